//! Insertion sort, stable and in-place. Quadratic in general, linear for presorted input.
//!
//! Also the small-range subroutine of the dual-pivot quicksort and the run builder of the merge
//! sort.

use std::cmp::Ordering;
use std::mem::{self, ManuallyDrop};
use std::ptr;

sort_impl!("insertion_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    if v.len() >= 2 {
        insertion_sort(v, 0, v.len() - 1, &mut is_less);
    }
}

/// Sorts `v[left..=right]` in place, leaving the rest of `v` untouched.
///
/// Each element is taken out of the slice and the greater elements before it are moved one slot
/// to the right, until the gap reaches the element's place.
///
/// # Panics
///
/// Panics if `left > right` or `right >= v.len()`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort<T, F>(v: &mut [T], left: usize, right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(left <= right && right < v.len());

    let base = v.as_mut_ptr();

    for i in (left + 1)..=right {
        // SAFETY: `left < i <= right < v.len()`, and nothing else accesses `v` meanwhile.
        unsafe {
            shift_left_into_place(base, left, i, is_less);
        }
    }
}

/// Moves `*base.add(i)` left until it is not less than its predecessor, with `base[left..i]`
/// already sorted.
///
/// # Safety
///
/// `base[left..=i]` must be valid for reads and writes and `left < i`.
unsafe fn shift_left_into_place<T, F>(base: *mut T, left: usize, i: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    unsafe {
        let mut pos = i;

        if !is_less(&*base.add(pos), &*base.add(pos - 1)) {
            return;
        }

        // The element now lives in `gap`. Every comparison below uses that copy, it is the one
        // written back.
        let mut gap = Gap {
            value: ManuallyDrop::new(ptr::read(base.add(pos))),
            dest: base.add(pos),
        };

        loop {
            ptr::copy_nonoverlapping(base.add(pos - 1), base.add(pos), 1);
            pos -= 1;
            gap.dest = base.add(pos);

            // Equal elements stop the scan, so they keep their relative order.
            if pos == left || !is_less(&*gap.value, &*base.add(pos - 1)) {
                break;
            }
        }
        // Dropping `gap` writes the element into `base[pos]`.
    }
}

/// An element held outside the slice, and the slot it belongs to.
///
/// Writes the element to `dest` when dropped, also while unwinding from a panicking `is_less`, so
/// the slice always ends up holding each of its elements exactly once.
struct Gap<T> {
    value: ManuallyDrop<T>,
    dest: *mut T,
}

impl<T> Drop for Gap<T> {
    fn drop(&mut self) {
        // SAFETY: `dest` is the single vacated slot, and `value` is never used again.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.dest, 1);
        }
    }
}
