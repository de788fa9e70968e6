// SPDX-License-Identifier: MIT

use crate::harness::Measurement;
use std::fmt;

/// Horizontal rule framing the table; every row has the same width.
const RULE: &str =
    "+--------------+----------------------+------------+-------+";

/// Comparison table of every strategy against the sequential sum.
#[derive(Debug, Clone)]
pub struct Report {
    pub size: usize,
    pub threads: usize,
    pub expected: i64,
    pub measurements: Vec<Measurement>,
}

impl Report {
    /// Creates a report for one run.
    ///
    /// # Arguments
    /// * `size` - Number of elements in the summed array
    /// * `threads` - Worker threads used by each strategy
    /// * `expected` - Sequential reference sum
    /// * `measurements` - One entry per strategy, in the order they ran
    pub fn new(
        size: usize,
        threads: usize,
        expected: i64,
        measurements: Vec<Measurement>,
    ) -> Self {
        Report {
            size,
            threads,
            expected,
            measurements,
        }
    }

    /// True when every strategy reproduced the expected sum.
    pub fn all_match(&self) -> bool {
        self.measurements.iter().all(|m| m.total == self.expected)
    }

    /// Writes the table to standard output.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Array size: {}, threads: {}", self.size, self.threads)?;
        writeln!(f, "Expected sum: {}", self.expected)?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "| {:<12} | {:>20} | {:>10} | {:<5} |",
            "Strategy", "Total sum", "Time (ms)", "Match"
        )?;
        writeln!(f, "{RULE}")?;
        // One row per strategy, compared against the sequential sum.
        for m in &self.measurements {
            let matched = if m.total == self.expected { "yes" } else { "NO" };
            writeln!(
                f,
                "| {:<12} | {:>20} | {:>10} | {:<5} |",
                m.strategy.to_string(),
                m.total,
                m.elapsed_ms(),
                matched
            )?;
        }
        writeln!(f, "{RULE}")
    }
}
