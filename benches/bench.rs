use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::OnceCell;

use log::{info, warn};
use sort_collection::harness::Algorithm;
use sort_collection::{stable, unstable};
use sort_test_tools::{patterns, Sort};

/// Algorithms listed in the comma separated `BENCH_ALGORITHMS` env var, using the names the
/// harness accepts. Every algorithm is benchmarked if the variable is not set.
fn selected_algorithms() -> Option<&'static [Algorithm]> {
    static SELECTED: OnceCell<Option<Vec<Algorithm>>> = OnceCell::new();

    SELECTED
        .get_or_init(|| {
            env::var("BENCH_ALGORITHMS").ok().map(|val| {
                val.split(',')
                    .filter(|name| !name.trim().is_empty())
                    .filter_map(|name| match name.parse::<Algorithm>() {
                        Ok(algorithm) => Some(algorithm),
                        Err(err) => {
                            warn!("BENCH_ALGORITHMS: {err}, ignored");
                            None
                        }
                    })
                    .collect()
            })
        })
        .as_deref()
}

fn should_run_benchmark(algorithm: Algorithm) -> bool {
    match selected_algorithms() {
        Some(selected) => selected.contains(&algorithm),
        None => true,
    }
}

// Quadratic combinations that would dominate the total runtime without telling anything new.
fn is_prohibitively_slow(sort_name: &str, pattern_name: &str, test_len: usize) -> bool {
    if test_len <= 10_000 {
        return false;
    }

    sort_name.contains("insertion")
        || (sort_name.contains("quicksort")
            && matches!(pattern_name, "ascending" | "descending" | "all_equal_ends"))
}

#[inline(never)]
fn bench_sort<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [T]),
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_len}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_len)),
                |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn measure_comp_count<T: Ord + std::fmt::Debug, S: Sort>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else {
        100
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by to ensure the type properties such as Copy of the type
    // that is being sorted doesn't change. And we get representative numbers.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<T: Ord + std::fmt::Debug, S: Sort>(
    c: &mut Criterion,
    algorithm: Algorithm,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if !should_run_benchmark(algorithm)
        || is_prohibitively_slow(&bench_name, pattern_name, test_len)
    {
        return;
    }

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!("{bench_name}-comp-{transform_name}-{pattern_name}-{test_len}");
        measure_comp_count::<T, S>(&name, test_len, transform, pattern_provider);
    } else {
        bench_sort(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

fn split_len(len: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((len as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = len - len_a;

    (len_a, len_b)
}

fn bench_patterns<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let mut pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_d20", |len| patterns::random_uniform(len, 0..20)),
        ("random_z1", |len| patterns::random_zipf(len, 1.0)),
        ("random_s95", |len| patterns::random_sorted(len, 95.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("saws_short", |len| {
            patterns::saw_mixed(len, (len as f64 / 22.0).round() as usize)
        }),
    ];

    // Patterns aimed at the weak spots of the individual algorithms.
    let mut extra_pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("all_equal", patterns::all_equal),
        ("all_equal_ends", patterns::equal_ends),
        ("pipe_organ", patterns::pipe_organ),
        ("90_zero_10_random", |len| {
            let (len_90, len_10) = split_len(len, 90.0);
            std::iter::repeat(0)
                .take(len_90)
                .chain(patterns::random(len_10))
                .collect()
        }),
    ];

    if env::var("EXTRA_PATTERNS").is_ok() {
        pattern_providers.append(&mut extra_pattern_providers);
    }

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_len < 3 && *pattern_name != "random" {
            continue;
        }

        macro_rules! bench_inst {
            ($sort_impl:ty, $algorithm:expr) => {
                bench_impl::<T, $sort_impl>(
                    c,
                    $algorithm,
                    test_len,
                    transform_name,
                    &transform,
                    pattern_name,
                    pattern_provider,
                );
            };
        }

        // --- Stable sorts ---

        bench_inst!(stable::merge_sort::SortImpl, Algorithm::MergeSort);
        bench_inst!(stable::insertion_sort::SortImpl, Algorithm::InsertionSort);

        // --- Unstable sorts ---

        bench_inst!(unstable::dual_pivot_quicksort::SortImpl, Algorithm::Quicksort);
        bench_inst!(unstable::heapsort::SortImpl, Algorithm::Heapsort);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();

    if let Some(selected) = selected_algorithms() {
        info!("benchmarking only {selected:?}");
    }

    let test_lens = [
        0, 1, 2, 3, 7, 16, 26, 27, 28, 50, 64, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
        1_000_000,
    ];

    patterns::use_random_seed_each_time();

    for test_len in test_lens {
        // Basic type often used to test sorting algorithms.
        bench_patterns(c, test_len, "i32", |values| values);

        // Common type for usize on 64-bit machines.
        // Sorting indices is very common.
        bench_patterns(c, test_len, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    ((*val as i64) + (i32::MAX as i64) + 1) as u64 * (i32::MAX as u64)
                })
                .collect()
        });

        // Larger type that is not Copy and does heap access.
        bench_patterns(c, test_len, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
