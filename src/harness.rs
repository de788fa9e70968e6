// SPDX-License-Identifier: MIT

use crate::error::Result;
use crate::partition::Partition;
use crate::reduction::{Reduction, Strategy};
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of one timed fan-out/join cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub strategy: Strategy,
    /// Combined sum reported by the strategy.
    pub total: i64,
    /// Wall-clock time spent planning chunks, spawning the workers and
    /// joining them.
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed time truncated to whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Plans chunks for `threads` workers and runs `strategy` once over `data`,
/// timing both steps together.
///
/// # Arguments
/// * `strategy` - Merge strategy to run
/// * `data` - Array to sum, shared read-only with every worker
/// * `threads` - Number of worker threads to fan out to
///
/// # Returns
/// The strategy's total and the elapsed wall-clock time, or
/// [`Error::ZeroThreads`](crate::Error::ZeroThreads) if `threads` is zero.
pub fn run_timed(
    strategy: Strategy,
    data: &[i64],
    threads: usize,
) -> Result<Measurement> {
    // Start timing.
    let start_time = Instant::now();

    // Split the array into one chunk per worker.
    let partition = Partition::new(data.len(), threads)?;

    // Fan out and wait for all workers to complete.
    let total = strategy.reduce(data, &partition);

    let elapsed = start_time.elapsed();

    debug!(
        %strategy,
        total,
        len = partition.len(),
        threads = partition.threads(),
        elapsed_ms = %elapsed.as_millis(),
        "reduction finished"
    );

    Ok(Measurement {
        strategy,
        total,
        elapsed,
    })
}

/// Runs every strategy in [`Strategy::ALL`] order, one after the other.
///
/// # Returns
/// One measurement per strategy, or the first planning error.
pub fn run_all(data: &[i64], threads: usize) -> Result<Vec<Measurement>> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| run_timed(strategy, data, threads))
        .collect()
}
