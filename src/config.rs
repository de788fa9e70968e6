// SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use clap::Parser;
use tracing::debug;

/// Element count used when `--size` or `--threads` is missing.
pub const DEFAULT_SIZE: usize = 1_000_000;
/// Worker thread count used when `--size` or `--threads` is missing.
pub const DEFAULT_THREADS: usize = 3;

/// Compare non-atomic, atomic and mutex-guarded parallel array sums.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of elements in the generated array.
    #[arg(long, visible_alias = "iterations")]
    pub size: Option<usize>,

    /// Number of worker threads per strategy.
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Resolved run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            threads: DEFAULT_THREADS,
        }
    }
}

/// A [`Config`] together with whether the defaults had to be substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub config: Config,
    /// Set when `--size` or `--threads` was missing.
    pub defaulted: bool,
}

impl Resolved {
    /// Message reported on stderr when the defaults were substituted, or
    /// `None` when both flags were given.
    pub fn notice(&self) -> Option<String> {
        self.defaulted.then(|| {
            format!(
                "Error: --size or --threads argument is absent, \
                 using defaults: size={} and threads={}",
                self.config.size, self.config.threads
            )
        })
    }
}

impl Cli {
    /// Turns parsed flags into a [`Config`].
    ///
    /// Both values must be given together: if either is missing the defaults
    /// replace both of them and [`Resolved::defaulted`] is set, so the caller
    /// can report it regardless of the log filter.
    ///
    /// # Errors
    /// [`Error::ZeroThreads`] when `--threads 0` is given.
    pub fn resolve(self) -> Result<Resolved> {
        let resolved = match (self.size, self.threads) {
            (Some(size), Some(threads)) => Resolved {
                config: Config { size, threads },
                defaulted: false,
            },
            _ => Resolved {
                config: Config::default(),
                defaulted: true,
            },
        };
        debug!(
            size = resolved.config.size,
            threads = resolved.config.threads,
            defaulted = resolved.defaulted,
            "resolved configuration"
        );

        if resolved.config.threads == 0 {
            return Err(Error::ZeroThreads);
        }
        Ok(resolved)
    }
}
