pub mod insertion_sort;
pub mod merge_sort;
