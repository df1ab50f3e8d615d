//! Algorithm selection by name, plus timing and verification of a single run.
//!
//! Timings are informational, a single run says little about the performance of an algorithm.
//! See `benches/bench.rs` for proper measurements.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::{stable, unstable};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Quicksort,
    #[default]
    MergeSort,
    Heapsort,
    InsertionSort,
    /// The standard library stable sort, `slice::sort`. Not part of the collection, useful as
    /// a baseline.
    Std,
}

impl Algorithm {
    /// The algorithms implemented by this crate.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Quicksort,
        Algorithm::MergeSort,
        Algorithm::Heapsort,
        Algorithm::InsertionSort,
    ];

    /// Canonical identifier, accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Quicksort => "quicksort",
            Algorithm::MergeSort => "timsort",
            Algorithm::Heapsort => "heapsort",
            Algorithm::InsertionSort => "insertionsort",
            Algorithm::Std => "std",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::MergeSort | Algorithm::InsertionSort | Algorithm::Std => true,
            Algorithm::Quicksort | Algorithm::Heapsort => false,
        }
    }

    /// Parses `name`, falling back to the default algorithm for unknown names.
    pub fn from_name_or_default(name: &str) -> Algorithm {
        name.parse().unwrap_or_else(|err: UnknownAlgorithm| {
            let fallback = Algorithm::default();
            warn!("{err}, falling back to {fallback}");
            fallback
        })
    }

    pub fn sort<T: Ord>(self, v: &mut [T]) {
        self.sort_by(v, |a, b| a.cmp(b));
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Quicksort => unstable::dual_pivot_quicksort::sort_by(v, compare),
            Algorithm::MergeSort => stable::merge_sort::sort_by(v, compare),
            Algorithm::Heapsort => unstable::heapsort::sort_by(v, compare),
            Algorithm::InsertionSort => stable::insertion_sort::sort_by(v, compare),
            Algorithm::Std => v.sort_by(compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive. `mergesort` is accepted as an alias of `timsort`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quicksort" => Ok(Algorithm::Quicksort),
            "timsort" | "mergesort" => Ok(Algorithm::MergeSort),
            "heapsort" => Ok(Algorithm::Heapsort),
            "insertionsort" => Ok(Algorithm::InsertionSort),
            "std" => Ok(Algorithm::Std),
            _ => Err(UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// Returned when parsing an algorithm identifier that names no known algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm {
    name: String,
}

impl UnknownAlgorithm {
    /// The rejected identifier, as given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort algorithm '{}'", self.name)
    }
}

impl Error for UnknownAlgorithm {}

/// Outcome of a single timed run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkResult {
    /// The algorithm that actually ran, after falling back for unknown names.
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub is_sorted: bool,
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ms | Sorted: {}",
            self.algorithm,
            self.elapsed.as_secs_f64() * 1000.0,
            if self.is_sorted { "Yes" } else { "No" }
        )
    }
}

/// Sorts a copy of `v` with the algorithm called `algorithm_name`, timing the sort and checking
/// the result. `v` itself is left untouched.
pub fn benchmark<T>(v: &[T], algorithm_name: &str) -> BenchmarkResult
where
    T: Ord + Clone,
{
    benchmark_by(v, algorithm_name, |a, b| a.cmp(b))
}

/// Like [`benchmark`], using `compare` for sorting and for checking the result.
pub fn benchmark_by<T, F>(v: &[T], algorithm_name: &str, mut compare: F) -> BenchmarkResult
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let algorithm = Algorithm::from_name_or_default(algorithm_name);
    let mut data = v.to_vec();

    let start = Instant::now();
    algorithm.sort_by(&mut data, &mut compare);
    let elapsed = start.elapsed();

    let is_sorted = crate::is_sorted_by(&data, &mut compare);

    debug!(
        "{algorithm} sorted {} elements in {elapsed:?}, sorted: {is_sorted}",
        data.len()
    );

    BenchmarkResult {
        algorithm,
        elapsed,
        is_sorted,
    }
}
