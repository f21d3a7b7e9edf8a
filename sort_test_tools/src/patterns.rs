use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every random pattern, so a failing run can be replayed with `SEED=<n>`.
pub static SEED: Lazy<u64> = Lazy::new(initialize_seed);

fn initialize_seed() -> u64 {
    let randomize_seed = env::var("RANDOMIZE_SEED")
        .map(|val| val == "true")
        .unwrap_or(false);

    let seed = if randomize_seed {
        thread_rng().gen()
    } else {
        env::var("SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12345)
    };

    log::info!("Seed: {seed}");
    println!("Seed: {seed}");

    seed
}

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();

    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let chunk_len = len.div_ceil(saw_count.max(1)).max(1);
    let mut v = random(len);
    for chunk in v.chunks_mut(chunk_len) {
        chunk.sort();
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let first_half = len / 2;

    v[..first_half].sort();
    v[first_half..].sort_by(|a, b| b.cmp(a));

    v
}
