//! Input generators for the test suite and the benchmarks.
//!
//! Every generator yields `i32` values, callers map them to other types. The random ones draw
//! from a single seed per process, so a failing test reproduces with `OVERRIDE_SEED=<seed>`.
//! Benchmarks call [`use_random_seed_each_time`] to get new values on every call instead.

use std::env;
use std::sync::{Mutex, MutexGuard};

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use zipf::ZipfDistribution;

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Values drawn uniformly from `range`. Narrow ranges such as `0..=3` give many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    seeded_rng().sample_iter(range.into()).take(len).collect()
}

/// Ranks in `1..=len` following Zipf's law, the smallest ranks dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let dist = match ZipfDistribution::new(len.max(1), exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf parameters, len: {len} exponent: {exponent}"),
    };

    seeded_rng()
        .sample_iter(dist)
        .take(len)
        .map(|rank| rank as i32)
        .collect()
}

/// A sorted prefix covering `sorted_percent` percent of the input, then random values.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * sorted_percent / 100.0).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values with an identical first and last element, so the first dual-pivot partition
/// sees equal pivots.
pub fn equal_ends(len: usize) -> Vec<i32> {
    let mut v = random(len);
    if len >= 2 {
        v[len - 1] = v[0];
    }

    v
}

/// `saw_count` runs of random values, each sorted ascending or descending at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    let run_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform(len / run_len + 1, 0..=1);

    for (run, direction) in v.chunks_mut(run_len).zip(directions) {
        if direction == 0 {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Makes every later call of a random generator use a new seed.
///
/// Panics if `OVERRIDE_SEED` is set, the two are mutually exclusive.
pub fn use_random_seed_each_time() {
    if let SeedSource::Override(seed) = seed_source() {
        panic!("OVERRIDE_SEED={seed} is set, refusing to use a new seed for each call");
    }

    *lock_seed_source() = Some(SeedSource::EachCall);
}

/// The seed the next random generator call uses.
pub fn random_init_seed() -> u64 {
    match seed_source() {
        SeedSource::Override(seed) | SeedSource::PerProcess(seed) => seed,
        SeedSource::EachCall => thread_rng().gen(),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SeedSource {
    Override(u64),
    PerProcess(u64),
    EachCall,
}

static SEED_SOURCE: Mutex<Option<SeedSource>> = Mutex::new(None);

fn lock_seed_source() -> MutexGuard<'static, Option<SeedSource>> {
    // A panicking test cannot leave a half written `Copy` value behind.
    SEED_SOURCE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn seed_source() -> SeedSource {
    *lock_seed_source().get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => match val.trim().parse() {
            Ok(seed) => SeedSource::Override(seed),
            Err(err) => panic!("invalid OVERRIDE_SEED value '{val}': {err}"),
        },
        Err(_) => SeedSource::PerProcess(thread_rng().gen()),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
