// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while planning or configuring a reduction run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A partition needs at least one worker thread.
    #[error("thread count must be at least 1")]
    ZeroThreads,
    /// The chunks of a partition do not tile `[0, len)` exactly.
    #[error("chunks do not cover [0, {len}) exactly once")]
    Coverage { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
