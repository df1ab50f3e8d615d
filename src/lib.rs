//! A collection of comparison based sorting algorithms.
//!
//! Stable: insertion sort and an adaptive hybrid merge sort.
//! Unstable: dual-pivot quicksort and heapsort.
//!
//! Every algorithm accepts either the natural order of `T: Ord` or a caller supplied comparison
//! function `FnMut(&T, &T) -> Ordering`, which must implement a strict total order. A comparison
//! function that does not, or that panics, never causes elements to be lost or duplicated, but
//! the resulting order is unspecified.

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod harness;
pub mod stable;
pub mod unstable;

/// Sorts the slice with the default algorithm, the stable hybrid merge sort.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable::merge_sort::sort(v);
}

/// Sorts the slice with the default algorithm, using `compare` as the order.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable::merge_sort::sort_by(v, compare);
}

/// Dual-pivot quicksort. Not stable, *O*(*n* \* log(*n*)) on average but *O*(*n*^2) for
/// presorted input.
#[inline]
pub fn quicksort<T: Ord>(v: &mut [T]) {
    unstable::dual_pivot_quicksort::sort(v);
}

/// Dual-pivot quicksort with `compare` as the order. Not stable, *O*(*n*^2) worst-case.
#[inline]
pub fn quicksort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable::dual_pivot_quicksort::sort_by(v, compare);
}

/// Hybrid merge sort. Stable, *O*(*n* \* log(*n*)) worst-case, allocates `v.len()` elements.
#[inline]
pub fn merge_sort<T: Ord>(v: &mut [T]) {
    stable::merge_sort::sort(v);
}

/// Hybrid merge sort with `compare` as the order. Stable, *O*(*n* \* log(*n*)) worst-case.
#[inline]
pub fn merge_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable::merge_sort::sort_by(v, compare);
}

/// Heapsort. Not stable, in-place, *O*(*n* \* log(*n*)) worst-case.
#[inline]
pub fn heapsort<T: Ord>(v: &mut [T]) {
    unstable::heapsort::sort(v);
}

/// Heapsort with `compare` as the order. Not stable, *O*(*n* \* log(*n*)) worst-case.
#[inline]
pub fn heapsort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable::heapsort::sort_by(v, compare);
}

/// Insertion sort. Stable, in-place, *O*(*n*^2) worst-case, linear for presorted input.
#[inline]
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    stable::insertion_sort::sort(v);
}

/// Insertion sort with `compare` as the order. Stable, *O*(*n*^2) worst-case.
#[inline]
pub fn insertion_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable::insertion_sort::sort_by(v, compare);
}

/// Returns `true` if no adjacent pair of `v` is in descending order.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, |a, b| a.cmp(b))
}

/// Returns `true` if `compare` reports no adjacent pair of `v` as `Greater`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
