// SPDX-License-Identifier: MIT

use rand::rngs::StdRng;
use rand::SeedableRng;
use reductions::generator::generate_with;

/// Array of `len` values drawn from the generator's range with a fixed seed,
/// so failures reproduce.
pub fn seeded_array(seed: u64, len: usize) -> Vec<i64> {
    generate_with(&mut StdRng::seed_from_u64(seed), len)
}

/// Array of `len` ones; its sum is its length.
pub fn ones(len: usize) -> Vec<i64> {
    vec![1; len]
}

/// The values `1..=n`, summing to `n * (n + 1) / 2`.
pub fn one_to(n: i64) -> Vec<i64> {
    (1..=n).collect()
}
