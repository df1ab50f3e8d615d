//! Adaptive hybrid merge sort. Insertion sorted runs of `min_run` elements, merged bottom-up with
//! doubling width. Stable, *O*(*n* \* log(*n*)) worst-case, one scratch buffer of `len` elements.

use std::cmp::{self, Ordering};
use std::mem;
use std::ptr;

use crate::stable::insertion_sort::insertion_sort;

sort_impl!("merge_sort_stable");

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

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    merge_sort(v, &mut is_less);
}

/// Inputs shorter than this form a single run.
const MIN_MERGE: usize = 64;

/// Computes the initial run length for an input of `len` elements.
///
/// Halves `len` until it drops below `MIN_MERGE`, rounding up if any shifted out bit was set. This
/// keeps the number of runs equal to, or slightly less than, a power of two, so the bottom-up
/// merge passes stay balanced.
pub(crate) fn min_run(mut len: usize) -> usize {
    let mut r = 0;
    while len >= MIN_MERGE {
        r |= len & 1;
        len >>= 1;
    }

    len + r
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(mem::size_of::<T>() != 0);

    let len = v.len();

    if len < 2 {
        return;
    }

    let min_run = min_run(len);

    for start in (0..len).step_by(min_run) {
        let end = cmp::min(start + min_run, len);
        insertion_sort(v, start, end - 1, is_less);
    }

    if min_run >= len {
        return;
    }

    // Allocated once, every merge pass reuses it. It never holds initialized elements from the
    // point of view of the `Vec`, so dropping it only frees the memory.
    let mut buf = Vec::<T>::with_capacity(len);
    let buf_ptr = buf.as_mut_ptr();

    let mut width = min_run;
    while width < len {
        let mut start = 0;
        while len - start > width {
            let end = start + cmp::min(len - start, 2 * width);

            // SAFETY: `0 < width < end - start`, so both runs are non-empty. `buf` has capacity
            // for `len >= end - start` elements and `T` is not a zero-sized type.
            unsafe {
                merge(&mut v[start..end], width, buf_ptr, is_less);
            }

            start = end;
        }

        width *= 2;
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into one sorted run, moving both through
/// `buf`.
///
/// # Safety
///
/// The two runs must be non-empty and `mid` must be in bounds. Buffer `buf` must be long enough
/// to hold a copy of `v`. Also, `T` must not be a zero-sized type.
#[inline(never)]
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let arr_ptr = v.as_mut_ptr();

    unsafe {
        // The runs touch in order, nothing to do.
        if !is_less(&*arr_ptr.add(mid), &*arr_ptr.add(mid - 1)) {
            return;
        }

        // Both runs are moved out into `buf` and merged back into `v`. From here on all
        // comparisons happen on the copies in `buf`, which are the values written back.
        ptr::copy_nonoverlapping(arr_ptr, buf, len);

        // Intermediate state of the merge is tracked by `hole`. If `is_less` panics, dropping
        // `hole` writes the unconsumed rest of both runs into the remaining slots of `v`, so `v`
        // still holds every object it initially held exactly once.
        let mut hole = MergeHole {
            left: buf,
            left_end: buf.add(mid),
            right: buf.add(mid),
            right_end: buf.add(len),
            dest: arr_ptr,
        };

        while hole.left < hole.left_end && hole.right < hole.right_end {
            // Take from the right run only if strictly less, ties go to the left run.
            if is_less(&*hole.right, &*hole.left) {
                ptr::copy_nonoverlapping(hole.right, hole.dest, 1);
                hole.right = hole.right.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.left, hole.dest, 1);
                hole.left = hole.left.add(1);
            }
            hole.dest = hole.dest.add(1);
        }
        // Finally, `hole` gets dropped and copies whatever remains of either run into `v`.
    }
}

// When dropped, copies `left..left_end` followed by `right..right_end` into `dest..`.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, and these are pointers into `buf` and `v`. The
        // number of remaining elements equals the number of unfilled slots starting at `dest`.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
