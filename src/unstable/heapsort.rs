//! Binary max-heap sort. In-place, *O*(*n* \* log(*n*)) worst-case, not stable.

use std::cmp::Ordering;
use std::mem;

sort_impl!("heapsort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    heapsort(v, &mut is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    // Max-heap over all of `v`, built bottom-up from the last parent.
    for parent in (0..len / 2).rev() {
        heapify(v, len, parent, is_less);
    }

    // `v[..heap_len]` is the heap, `v[heap_len..]` the sorted tail. Each step moves the maximum
    // of the heap to the front of the tail.
    let mut heap_len = len;
    while heap_len > 1 {
        heap_len -= 1;
        v.swap(0, heap_len);
        heapify(v, heap_len, 0, is_less);
    }
}

/// Sifts `v[root]` down within the heap `v[..heap_len]`, until it is at least as great as both of
/// its children.
fn heapify<T, F>(v: &mut [T], heap_len: usize, mut root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(heap_len <= v.len());

    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_len && is_less(&v[largest], &v[left]) {
            largest = left;
        }
        if right < heap_len && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == root {
            return;
        }

        v.swap(root, largest);
        root = largest;
    }
}
