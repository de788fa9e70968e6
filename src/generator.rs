// SPDX-License-Identifier: MIT

use rand::distributions::Uniform;
use rand::Rng;
use std::ops::RangeInclusive;

/// Inclusive range every generated element is drawn from.
pub const VALUE_RANGE: RangeInclusive<i64> = 0..=1000;

/// Generates `len` integers drawn uniformly from [`VALUE_RANGE`] using the
/// thread-local, entropy-seeded generator. Output differs between runs.
pub fn generate(len: usize) -> Vec<i64> {
    generate_with(&mut rand::thread_rng(), len)
}

/// Generates `len` integers drawn uniformly from [`VALUE_RANGE`] using `rng`.
///
/// # Arguments
/// * `rng` - Source of randomness, seeded or not
/// * `len` - Number of values to draw
pub fn generate_with<R>(rng: &mut R, len: usize) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let values =
        Uniform::new_inclusive(*VALUE_RANGE.start(), *VALUE_RANGE.end());
    rng.sample_iter(values).take(len).collect()
}
