//! Built vocabulary artifact validator.
//!
//! Checks the files written by `hqdm-build`:
//! - `hqdm.nt`: every line ends with ` .` and declares one `owl:Class` per kind
//! - `hqdm.ttl`: prefix header and one class block per kind
//! - `hqdm.json`: JSON-LD with `@context` and one `@graph` node per kind

use std::path::Path;

use anyhow::{Context, Result};
use hqdm::{iris, KindRegistry};
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

/// File name of the JSON-LD vocabulary.
pub const JSON_LD_FILE: &str = "hqdm.json";
/// File name of the Turtle vocabulary.
pub const TURTLE_FILE: &str = "hqdm.ttl";
/// File name of the N-Triples vocabulary.
pub const NTRIPLES_FILE: &str = "hqdm.nt";

const VALIDATOR: &str = "artifacts";

/// Validates the vocabulary artifacts in `artifacts`.
///
/// A missing file is reported as a failure, not an error.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or the JSON-LD file
/// cannot be parsed.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let kinds = KindRegistry::global().len();

    if let Some(content) = read(artifacts, NTRIPLES_FILE, &mut report)? {
        validate_ntriples(&content, kinds, &mut report);
    }
    if let Some(content) = read(artifacts, TURTLE_FILE, &mut report)? {
        validate_turtle(&content, kinds, &mut report);
    }
    if let Some(content) = read(artifacts, JSON_LD_FILE, &mut report)? {
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {JSON_LD_FILE} as JSON"))?;
        validate_json_ld(&value, kinds, &mut report);
    }

    Ok(report)
}

fn read(dir: &Path, file: &str, report: &mut ConformanceReport) -> Result<Option<String>> {
    let path = dir.join(file);
    if !path.exists() {
        report.push(TestResult::fail(
            format!("{VALIDATOR}/{file}"),
            format!("{file} not found in {}", dir.display()),
        ));
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}

fn validate_ntriples(content: &str, kinds: usize, report: &mut ConformanceReport) {
    let validator = format!("{VALIDATOR}/{NTRIPLES_FILE}");

    let malformed: Vec<String> = content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty() && !l.ends_with(" ."))
        .map(|(i, _)| format!("line {}: does not end with \" .\"", i + 1))
        .collect();
    let lines = content.lines().filter(|l| !l.trim().is_empty()).count();
    report.push(TestResult::from_violations(
        validator.clone(),
        format!("{NTRIPLES_FILE} has {lines} well-formed triples"),
        format!("{NTRIPLES_FILE} has malformed lines"),
        malformed,
    ));

    let class_suffix = format!("<{}> <{}> .", iris::RDF_TYPE, iris::OWL_CLASS);
    let classes = content.lines().filter(|l| l.ends_with(&class_suffix)).count();
    push_count(report, validator, "owl:Class declarations", classes, kinds);
}

fn validate_turtle(content: &str, kinds: usize, report: &mut ConformanceReport) {
    let validator = format!("{VALIDATOR}/{TURTLE_FILE}");

    let missing: Vec<String> = ["owl", "rdf", "rdfs", "xsd", "hqdm"]
        .iter()
        .filter(|prefix| {
            !content
                .lines()
                .any(|l| l.starts_with(&format!("@prefix {prefix}:")))
        })
        .map(|prefix| format!("missing @prefix {prefix}:"))
        .collect();
    report.push(TestResult::from_violations(
        validator.clone(),
        format!("{TURTLE_FILE} declares the standard prefixes"),
        format!("{TURTLE_FILE} prefix header is incomplete"),
        missing,
    ));

    let classes = content.matches("\n  a owl:Class ;\n").count();
    push_count(report, validator, "class blocks", classes, kinds);
}

fn validate_json_ld(value: &Value, kinds: usize, report: &mut ConformanceReport) {
    let validator = format!("{VALIDATOR}/{JSON_LD_FILE}");

    if value.get("@context").is_some_and(Value::is_object) {
        report.push(TestResult::pass(validator.clone(), "@context is present"));
    } else {
        report.push(TestResult::fail(validator.clone(), "@context is missing"));
    }

    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(validator, "@graph is missing or not an array"));
        return;
    };
    let classes = graph
        .iter()
        .filter(|node| node.get("@type").and_then(Value::as_str) == Some("owl:Class"))
        .count();
    push_count(report, validator.clone(), "owl:Class nodes", classes, kinds);

    let unlabelled = graph
        .iter()
        .filter(|node| node.get("rdfs:label").is_none())
        .count();
    if unlabelled > 0 {
        report.push(TestResult::warn(
            validator,
            format!("{unlabelled} graph nodes have no rdfs:label"),
        ));
    }
}

fn push_count(
    report: &mut ConformanceReport,
    validator: String,
    what: &str,
    actual: usize,
    expected: usize,
) {
    if actual == expected {
        report.push(TestResult::pass(
            validator,
            format!("{what}: {actual} (expected {expected})"),
        ));
    } else {
        report.push(TestResult::fail(
            validator,
            format!("{what}: {actual}, expected {expected}"),
        ));
    }
}
