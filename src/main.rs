// SPDX-License-Identifier: MIT

use clap::Parser;
use reductions::config::Cli;
use reductions::harness::run_all;
use reductions::report::Report;
use reductions::{generator, sequential_sum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Log to stderr so the report on stdout stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let resolved = Cli::parse().resolve()?;
    // Reported whatever the log filter says.
    if let Some(notice) = resolved.notice() {
        eprintln!("{notice}");
    }
    let config = resolved.config;
    info!(size = config.size, threads = config.threads, "starting run");

    // Generate the input and the expected sum.
    let data = generator::generate(config.size);
    let expected = sequential_sum(&data);

    // Time each strategy in turn.
    let measurements = run_all(&data, config.threads)?;

    let report =
        Report::new(config.size, config.threads, expected, measurements);
    report.print();

    if !report.all_match() {
        warn!(expected, "a strategy disagreed with the sequential sum");
    }
    Ok(())
}
