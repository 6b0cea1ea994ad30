//! `hqdm-conformance`: validates the kind registry, the triple encoder and
//! the built vocabulary artifacts.
//!
//! **Usage:**
//! ```text
//! hqdm-conformance [--artifacts <path>] [--verbose]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use hqdm_conformance::{run_all, ArtifactPaths, Severity};

/// Run the HQDM conformance suite.
#[derive(Parser)]
#[command(
    name = "hqdm-conformance",
    about = "Validate the HQDM registry, encoder and vocabulary artifacts"
)]
struct Args {
    /// Path to the built artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Log at DEBUG level.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    hqdm_clients::init_tracing(args.verbose);

    let report = run_all(&ArtifactPaths {
        artifacts: args.artifacts,
    })?;

    println!("HQDM Conformance Report");
    println!("=======================");
    println!();

    for result in &report.results {
        println!("[{}] {}: {}", result.severity, result.validator, result.message);
        for detail in &result.details {
            println!("       {detail}");
        }
    }

    let failed = report.failure_count();
    let warned = report.warning_count();
    let passed = report
        .results
        .iter()
        .filter(|r| r.severity == Severity::Pass)
        .count();

    println!();
    println!("Summary: {passed} passed, {warned} warnings, {failed} failed");

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
