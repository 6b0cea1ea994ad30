//! `hqdm-entity`: builds one entity from the command line and prints it.
//!
//! Predicates may be full IRIs, `hqdm:`/`rdf:`/`rdfs:`/`owl:` prefixed names,
//! or bare HQDM local names (`member_of_kind`).
//!
//! **Usage:**
//! ```text
//! hqdm-entity --kind person --id http://example.org/o#person1 \
//!     --also-kind participant --string entity_name=person1 \
//!     [--reference P=IRI]... [--integer P=N]... [--real P=X]... \
//!     [--format triples|ntriples|turtle|jsonld] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hqdm::serializer::{jsonld, ntriples, triples, turtle};
use hqdm::{create_entity, Identifier, KindRegistry};
use hqdm_clients::parse_assignment;
use tracing::debug;

/// Output format.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Triple block with type-directed literals.
    Triples,
    /// One triple per line.
    Ntriples,
    /// Turtle document with prefix header.
    Turtle,
    /// JSON-LD node in a `@graph` document.
    Jsonld,
}

/// Build one HQDM entity and print it.
#[derive(Parser)]
#[command(name = "hqdm-entity", about = "Build and serialize one HQDM entity")]
struct Args {
    /// Primary kind: local name, class name or kind IRI.
    #[arg(long)]
    kind: String,

    /// Entity identifier.
    #[arg(long)]
    id: String,

    /// Additional kinds.
    #[arg(long = "also-kind")]
    also_kinds: Vec<String>,

    /// Reference value, `PREDICATE=IRI`.
    #[arg(long = "reference")]
    references: Vec<String>,

    /// String value, `PREDICATE=TEXT`.
    #[arg(long = "string")]
    strings: Vec<String>,

    /// Integer value, `PREDICATE=N`.
    #[arg(long = "integer")]
    integers: Vec<String>,

    /// Real value, `PREDICATE=X`.
    #[arg(long = "real")]
    reals: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Triples)]
    format: Format,

    /// Log at DEBUG level.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    hqdm_clients::init_tracing(args.verbose);

    let id = Identifier::new(args.id.as_str())?;
    let mut entity = create_entity(&args.kind, id)?;
    let registry = KindRegistry::global();
    for name in &args.also_kinds {
        entity.add_kind(registry.lookup(name)?);
    }

    for arg in &args.references {
        let (predicate, value) = parse_assignment(arg)?;
        entity.add_reference(predicate, Identifier::new(value)?);
    }
    for arg in &args.strings {
        let (predicate, value) = parse_assignment(arg)?;
        entity.add_string(predicate, value);
    }
    for arg in &args.integers {
        let (predicate, value) = parse_assignment(arg)?;
        let n: i64 = value
            .parse()
            .with_context(|| format!("{value:?} is not an integer"))?;
        entity.add_integer(predicate, n);
    }
    for arg in &args.reals {
        let (predicate, value) = parse_assignment(arg)?;
        let x: f64 = value
            .parse()
            .with_context(|| format!("{value:?} is not a real number"))?;
        entity.add_real(predicate, x);
    }
    debug!(triples = entity.triple_count(), "entity built");

    let output = match args.format {
        Format::Triples => triples::to_triples(&entity),
        Format::Ntriples => ntriples::entity_to_ntriples(&entity),
        Format::Turtle => turtle::model_to_turtle([&entity]),
        Format::Jsonld => serde_json::to_string_pretty(&jsonld::model_to_json_ld([&entity]))
            .context("Failed to serialize entity to JSON-LD")?,
    };
    print!("{output}");
    Ok(())
}
