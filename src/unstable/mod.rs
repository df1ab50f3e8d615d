pub mod dual_pivot_quicksort;
pub mod heapsort;
