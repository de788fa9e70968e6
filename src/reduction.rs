// SPDX-License-Identifier: MIT

//! The three ways of merging per-thread chunk sums into one total.
//!
//! Every strategy spawns one scoped worker thread per chunk of a
//! [`Partition`]. A worker always sums its chunk into a local value first;
//! the strategies differ only in how that local value is merged. The end of
//! the thread scope is the join barrier.

use crate::partition::{Chunk, Partition};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::thread;
use tracing::trace;

/// Trait implemented by each merge strategy.
pub trait Reduction {
    /// Short label used in reports and logs.
    fn name(&self) -> &'static str;

    /// Sums `data` by fanning out one worker thread per chunk of `partition`
    /// and joining them all before returning.
    fn reduce(&self, data: &[i64], partition: &Partition) -> i64;
}

/// Reference sum computed on the calling thread.
pub fn sequential_sum(data: &[i64]) -> i64 {
    data.iter().sum()
}

/// Local sum of one worker's chunk. Chunks past the end of `data` sum to 0.
pub fn chunk_sum(data: &[i64], chunk: Chunk) -> i64 {
    let sum = sequential_sum(chunk.slice(data));
    trace!(begin = chunk.begin, end = chunk.end, sum, "chunk summed");
    sum
}

/// Each worker writes its chunk sum into its own slot; the slots are added up
/// after the join.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonAtomic;

impl Reduction for NonAtomic {
    fn name(&self) -> &'static str {
        "non-atomic"
    }

    fn reduce(&self, data: &[i64], partition: &Partition) -> i64 {
        // One result slot per worker thread.
        let mut slots = vec![0i64; partition.threads()];

        // `iter_mut` hands every worker a distinct `&mut` slot, so there is at
        // most one writer per index. Summing each element exactly once still
        // relies on the partition tiling the array.
        thread::scope(|scope| {
            for (slot, &chunk) in slots.iter_mut().zip(partition.chunks()) {
                scope.spawn(move || *slot = chunk_sum(data, chunk));
            }
        });

        // All workers have joined, merge the slots sequentially.
        slots.iter().sum()
    }
}

/// Each worker merges its chunk sum into one shared counter with a relaxed
/// `fetch_add`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atomic;

impl Reduction for Atomic {
    fn name(&self) -> &'static str {
        "atomic"
    }

    fn reduce(&self, data: &[i64], partition: &Partition) -> i64 {
        let total = AtomicI64::new(0);

        thread::scope(|scope| {
            for &chunk in partition.chunks() {
                let total = &total;
                scope.spawn(move || {
                    let local = chunk_sum(data, chunk);
                    // Addition commutes, only atomicity of the add is needed.
                    total.fetch_add(local, Ordering::Relaxed);
                });
            }
        });

        total.into_inner()
    }
}

/// Each worker merges its chunk sum into one shared counter while holding a
/// mutex. The lock is taken only for the add, never during the chunk sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Locked;

impl Reduction for Locked {
    fn name(&self) -> &'static str {
        "mutex"
    }

    fn reduce(&self, data: &[i64], partition: &Partition) -> i64 {
        let total = Mutex::new(0i64);

        thread::scope(|scope| {
            for &chunk in partition.chunks() {
                let total = &total;
                scope.spawn(move || {
                    let local = chunk_sum(data, chunk);

                    // Acquire the lock only for the add.
                    let mut total_guard = match total.lock() {
                        Ok(guard) => guard,
                        Err(poisoned) => {
                            total.clear_poison();
                            poisoned.into_inner()
                        }
                    };
                    *total_guard += local;
                });
            }
        });

        total.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

/// The available strategies, in the order they are run and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    NonAtomic,
    Atomic,
    Mutex,
}

impl Strategy {
    pub const ALL: [Strategy; 3] =
        [Strategy::NonAtomic, Strategy::Atomic, Strategy::Mutex];

    /// Returns the implementation backing this strategy.
    pub fn reduction(self) -> &'static dyn Reduction {
        match self {
            Strategy::NonAtomic => &NonAtomic,
            Strategy::Atomic => &Atomic,
            Strategy::Mutex => &Locked,
        }
    }
}

impl Reduction for Strategy {
    fn name(&self) -> &'static str {
        self.reduction().name()
    }

    fn reduce(&self, data: &[i64], partition: &Partition) -> i64 {
        self.reduction().reduce(data, partition)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
