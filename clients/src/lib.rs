//! Shared plumbing for the HQDM client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{anyhow, Result};
use hqdm::iris;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a compact stderr subscriber.
///
/// `verbose` logs at DEBUG. Otherwise the `RUST_LOG` directives apply,
/// falling back to INFO when the variable is unset or unparsable.
pub fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
        }
        None => EnvFilter::new("info"),
    }
}

/// Expands a predicate argument to a full IRI.
///
/// `hqdm:member_of` and bare `member_of` become HQDM IRIs, `rdf:type` is
/// expanded, and anything containing `://` is taken as is.
#[must_use]
pub fn expand_predicate(predicate: &str) -> String {
    if predicate.contains("://") {
        return predicate.to_owned();
    }
    match predicate.split_once(':') {
        Some(("hqdm", local)) => format!("{}{local}", iris::HQDM),
        Some(("rdf", local)) => format!("{}{local}", iris::RDF),
        Some(("rdfs", local)) => format!("{}{local}", iris::RDFS),
        Some(("owl", local)) => format!("{}{local}", iris::OWL),
        Some(_) => predicate.to_owned(),
        None => format!("{}{predicate}", iris::HQDM),
    }
}

/// Splits a `PREDICATE=VALUE` argument, expanding the predicate.
///
/// # Errors
///
/// Returns an error if there is no `=` or either side is empty.
pub fn parse_assignment(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((p, v)) if !p.is_empty() && !v.is_empty() => Ok((expand_predicate(p), v.to_owned())),
        _ => Err(anyhow!("expected PREDICATE=VALUE, got {arg:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_filter_levels() {
        let hint = |verbose, rust_log| log_filter(verbose, rust_log).max_level_hint();
        assert_eq!(hint(false, None), Some(LevelFilter::INFO));
        assert_eq!(hint(false, Some("  ")), Some(LevelFilter::INFO));
        assert_eq!(hint(false, Some("warn")), Some(LevelFilter::WARN));
        assert_eq!(hint(false, Some("hqdm=trace")), Some(LevelFilter::TRACE));
        assert_eq!(hint(false, Some("hqdm=loud")), Some(LevelFilter::INFO));
        assert_eq!(hint(true, Some("warn")), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn predicates_expand() {
        assert_eq!(expand_predicate("member_of"), iris::MEMBER_OF);
        assert_eq!(expand_predicate("hqdm:part_of"), iris::PART_OF);
        assert_eq!(expand_predicate("rdf:type"), iris::RDF_TYPE);
        assert_eq!(
            expand_predicate("http://example.org/o#age"),
            "http://example.org/o#age"
        );
        assert_eq!(expand_predicate("ex:age"), "ex:age");
    }

    #[test]
    fn assignments() {
        assert_eq!(
            parse_assignment("entity_name=ACME=Corp").unwrap(),
            (iris::ENTITY_NAME.to_owned(), "ACME=Corp".to_owned())
        );
        assert!(parse_assignment("entity_name").is_err());
        assert!(parse_assignment("=x").is_err());
        assert!(parse_assignment("p=").is_err());
    }
}
