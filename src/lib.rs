// SPDX-License-Identifier: MIT

//! Parallel array summation with three merge strategies: disjoint per-thread
//! slots, a shared relaxed atomic, and a shared mutex-guarded integer.
//!
//! The pipeline is generate, plan chunks, reduce with each strategy under a
//! wall-clock timer, then render a comparison table against a sequential sum.

pub mod config;
pub mod error;
pub mod generator;
pub mod harness;
pub mod partition;
pub mod reduction;
pub mod report;

pub use error::{Error, Result};
pub use partition::{Chunk, ChunkSplitter, Partition};
pub use reduction::{sequential_sum, Reduction, Strategy};
