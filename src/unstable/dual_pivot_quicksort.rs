//! Dual-pivot quicksort. In-place and not stable.
//!
//! Average *O*(*n* \* log(*n*)). The pivots are always the first and last element of a region,
//! without sampling or randomization, so crafted inputs, ascending and descending ones included,
//! take *O*(*n*^2) time. Regions are kept on an explicit work list, so such inputs cost time but
//! never native stack depth.

use std::cmp::{self, Ordering};
use std::mem;

use crate::stable::insertion_sort::insertion_sort;

sort_impl!("dual_pivot_quicksort_unstable");

/// Regions whose index width `right - left` is below this are insertion sorted instead of
/// partitioned, so regions of up to 27 elements.
pub const SMALL_SORT_THRESHOLD: usize = 27;

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

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    quicksort(v, &mut is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    // Half-open `(start, end)` regions of `v` that still need sorting. The largest of the
    // sub-regions produced by a partition is pushed first, so it is processed last. That keeps
    // the list short even for degenerate partitions.
    let mut pending = vec![(0, len)];

    while let Some((start, end)) = pending.pop() {
        if end - start <= SMALL_SORT_THRESHOLD {
            insertion_sort(v, start, end - 1, is_less);
            continue;
        }

        let region = &mut v[start..end];

        let (pivot_lo, pivot_hi) = partition(region, is_less);

        // With equal pivots everything between them equals both, nothing left to order.
        let pivots_equal = !is_less(&region[pivot_lo], &region[pivot_hi]);

        let left = (start, start + pivot_lo);
        let middle = if pivots_equal {
            (start, start)
        } else {
            (start + pivot_lo + 1, start + pivot_hi)
        };
        let right = (start + pivot_hi + 1, end);

        let mut sub_regions = [left, middle, right];
        sub_regions.sort_unstable_by_key(|&(sub_start, sub_end)| {
            cmp::Reverse(sub_end - sub_start)
        });

        pending.extend(
            sub_regions
                .into_iter()
                .filter(|&(sub_start, sub_end)| sub_end - sub_start >= 2),
        );
    }
}

/// Partitions `v` into three buckets around the pivots `v[0]` and `v[len - 1]`, after ordering
/// the two: elements less than the low pivot, elements between the pivots, and elements greater
/// than the high pivot.
///
/// Returns the final positions of the low and the high pivot. Everything left of the low pivot is
/// less than it, everything right of the high pivot is greater than it.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    let last = len - 1;

    if is_less(&v[last], &v[0]) {
        v.swap(0, last);
    }

    // The pivots stay at `v[0]` and `v[last]` during the scan.
    //
    // v[1..less]        < low pivot
    // v[less..k]        between the pivots
    // v[k..=great]      not yet classified
    // v[great + 1..last] > high pivot
    let mut less = 1;
    let mut great = last - 1;
    let mut k = less;

    while k <= great {
        if is_less(&v[k], &v[0]) {
            v.swap(k, less);
            less += 1;
        } else if is_less(&v[last], &v[k]) {
            while k < great && is_less(&v[last], &v[great]) {
                great -= 1;
            }
            v.swap(k, great);
            great -= 1;

            // The element just swapped in from the right has not been classified yet.
            if is_less(&v[k], &v[0]) {
                v.swap(k, less);
                less += 1;
            }
        }
        k += 1;
    }

    // Move the pivots to the bucket boundaries.
    v.swap(0, less - 1);
    v.swap(last, great + 1);

    (less - 1, great + 1)
}
