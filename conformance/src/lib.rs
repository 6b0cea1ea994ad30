//! HQDM conformance suite.
//!
//! Validators that hold the `hqdm` library and its artifacts to the
//! standards they claim.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Kind registry | unique names, acyclic hierarchy rooted at `thing` |
//! | Triple blocks | encoder block grammar, literal typing rules |
//! | Vocabulary (N-Triples/Turtle) | RDF 1.1, Turtle 1.1 structure |
//! | Vocabulary (JSON-LD) | JSON-LD 1.1 `@context`/`@graph` structure |
//!
//! # Entry Point
//!
//! ```no_run
//! use hqdm_conformance::{run_all, ArtifactPaths};
//! use std::path::PathBuf;
//!
//! let paths = ArtifactPaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths)?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

use std::path::PathBuf;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// Directory containing the files written by `hqdm-build`.
    pub artifacts: PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Kind registry (live, no file I/O)
/// 2. Triple-block encoder over the fixtures (live)
/// 3. Built vocabulary artifacts
///
/// # Errors
///
/// Returns an error only if an artifact exists but cannot be read or parsed.
pub fn run_all(paths: &ArtifactPaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::registry::validate());
    report.extend(validators::triples::validate());
    report.extend(validators::artifacts::validate(&paths.artifacts)?);

    Ok(report)
}
