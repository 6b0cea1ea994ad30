//! Kind registry validator.
//!
//! Checks the live vocabulary (no file I/O):
//! - every name, class name and IRI resolves back to its own kind
//! - parent lists are free of self-references and duplicates
//! - the parent graph is acyclic and every kind reaches `thing`
//! - names follow HQDM snake case and class names the matching camel case

use std::collections::HashSet;

use hqdm::{iris, EntityKind, KindRegistry};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "registry";

/// Validates the kind registry invariants.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let registry = KindRegistry::global();

    validate_lookup(registry, &mut report);
    validate_parents(&mut report);
    validate_hierarchy(registry, &mut report);
    validate_naming(&mut report);

    report
}

fn validate_lookup(registry: &KindRegistry, report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    let mut names = HashSet::new();
    for kind in registry.iter() {
        if !names.insert(kind.name()) {
            violations.push(format!("duplicate kind name {}", kind.name()));
        }
        for key in [kind.name(), kind.class_name(), kind.iri()] {
            match registry.lookup(key) {
                Ok(found) if found == kind => {}
                Ok(found) => violations.push(format!("{key} resolves to {found}, expected {kind}")),
                Err(e) => violations.push(format!("{key}: {e}")),
            }
        }
        if registry.from_iri(kind.iri()).ok() != Some(kind) {
            violations.push(format!("{} does not round-trip through from_iri", kind.iri()));
        }
    }
    report.push(TestResult::from_violations(
        format!("{VALIDATOR}/lookup"),
        format!("{} kinds resolve by name, class name and IRI", registry.len()),
        "Kind lookup is inconsistent",
        violations,
    ));
}

fn validate_parents(report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    for &kind in EntityKind::ALL {
        let parents = kind.parents();
        if parents.contains(&kind) {
            violations.push(format!("{kind} lists itself as a parent"));
        }
        let unique: HashSet<_> = parents.iter().collect();
        if unique.len() != parents.len() {
            violations.push(format!("{kind} lists a parent twice"));
        }
        if parents.is_empty() && kind != EntityKind::Thing {
            violations.push(format!("{kind} has no parent but is not the root"));
        }
    }
    report.push(TestResult::from_violations(
        format!("{VALIDATOR}/parents"),
        "Parent lists are well-formed",
        "Malformed parent lists",
        violations,
    ));
}

fn validate_hierarchy(registry: &KindRegistry, report: &mut ConformanceReport) {
    let cycles: Vec<String> = EntityKind::ALL
        .iter()
        .filter(|&&kind| registry.ancestors(kind).contains(&kind))
        .map(|kind| format!("{kind} is its own ancestor"))
        .collect();
    report.push(TestResult::from_violations(
        format!("{VALIDATOR}/hierarchy"),
        "Kind hierarchy is acyclic",
        "Kind hierarchy has cycles",
        cycles,
    ));

    let unrooted: Vec<String> = EntityKind::ALL
        .iter()
        .filter(|&&kind| !registry.is_subkind_of(kind, EntityKind::Thing))
        .map(|kind| format!("{kind} does not reach thing"))
        .collect();
    report.push(TestResult::from_violations(
        format!("{VALIDATOR}/hierarchy"),
        "Every kind specializes thing",
        "Kinds outside the thing hierarchy",
        unrooted,
    ));
}

fn validate_naming(report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    for &kind in EntityKind::ALL {
        let name = kind.name();
        if !name.chars().all(|c| c.is_ascii_lowercase() || c == '_') || name.starts_with('_') {
            violations.push(format!("{name} is not snake case"));
        }
        if snake_case(kind.class_name()) != name.trim_end_matches('_') {
            violations.push(format!(
                "class name {} does not match {name}",
                kind.class_name()
            ));
        }
        if kind.iri().strip_prefix(iris::HQDM) != Some(name) {
            violations.push(format!("{} is not {name} in the HQDM namespace", kind.iri()));
        }
    }
    report.push(TestResult::from_violations(
        format!("{VALIDATOR}/naming"),
        "Kind names, class names and IRIs agree",
        "Kind naming is inconsistent",
        violations,
    ));
}

fn snake_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 8);
    for (i, c) in camel.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
