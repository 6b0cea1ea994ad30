//! `hqdm-build`: writes the HQDM kind vocabulary to the output directory.
//!
//! **Outputs:**
//! - `<out>/hqdm.json`: JSON-LD 1.1
//! - `<out>/hqdm.ttl`: Turtle 1.1
//! - `<out>/hqdm.nt`: N-Triples
//!
//! **Usage:**
//! ```text
//! hqdm-build [--out <path>] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hqdm::serializer::{jsonld, ntriples, turtle};
use hqdm::KindRegistry;
use hqdm_conformance::validators::artifacts::{JSON_LD_FILE, NTRIPLES_FILE, TURTLE_FILE};
use tracing::info;

/// Build the HQDM vocabulary artifacts.
#[derive(Parser)]
#[command(name = "hqdm-build", about = "Build HQDM vocabulary artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Log at DEBUG level.
    #[arg(long, short)]
    verbose: bool,
}

fn write(out: &Path, file: &str, content: &str) -> Result<()> {
    let path = out.join(file);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "written");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    hqdm_clients::init_tracing(args.verbose);
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let registry = KindRegistry::global();
    let roots = registry.iter().filter(|k| k.parents().is_empty()).count();
    println!("HQDM vocabulary: {} kinds, {} root", registry.len(), roots);

    let json = serde_json::to_string_pretty(&jsonld::vocabulary_to_json_ld(registry))
        .context("Failed to serialize vocabulary to JSON-LD")?;
    write(out, JSON_LD_FILE, &json)?;
    write(out, TURTLE_FILE, &turtle::vocabulary_to_turtle(registry))?;
    write(out, NTRIPLES_FILE, &ntriples::vocabulary_to_ntriples(registry))?;

    println!("Artifacts written to {}", out.display());
    Ok(())
}
