//! Triple-block encoder validator.
//!
//! Runs the fixture entities through
//! [`to_triples`](hqdm::serializer::triples::to_triples), checks every block
//! against the block grammar, and checks the encoder and attribute-store
//! properties the rest of the toolchain relies on.

use std::sync::OnceLock;

use hqdm::serializer::triples::to_triples;
use hqdm::{create_entity, iris, Entity, EntityKind, Error, Identifier, Value};
use regex::Regex;

use crate::fixtures::{self, Fixture};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "triples";

/// One `<predicate> object` clause. Objects are a reference, a typed
/// date/dateTime/integer literal, or a triple-quoted literal that is either
/// `xsd:string` tagged or plain.
const CLAUSE: &str = concat!(
    r#"^<[^<>\s]+> (?:<[^<>\s]*>"#,
    r#"|"[^"]*"\^\^<http://www\.w3\.org/2001/XMLSchema#(?:date|dateTime|integer)>"#,
    r#"|"""(?s:.*)"""(?:\^\^<http://www\.w3\.org/2001/XMLSchema#string>)?)$"#,
);

fn clause_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(CLAUSE).ok()).as_ref()
}

/// Checks one encoded block against the grammar:
/// `<subject>` then either `.\n`, or a space, clauses joined by `;\n`, and
/// `.\n`.
///
/// Returns one message per violation; an empty vector means the block is
/// well-formed.
#[must_use]
pub fn check_block(block: &str) -> Vec<String> {
    let mut violations = Vec::new();

    let Some(rest) = block.strip_prefix('<') else {
        violations.push("block does not start with '<'".to_owned());
        return violations;
    };
    let Some((subject, rest)) = rest.split_once('>') else {
        violations.push("subject is not closed with '>'".to_owned());
        return violations;
    };
    if subject.is_empty() || subject.contains(char::is_whitespace) {
        violations.push(format!("malformed subject <{subject}>"));
    }
    let Some(body) = rest.strip_suffix(".\n") else {
        violations.push("block does not end with \".\\n\"".to_owned());
        return violations;
    };
    if body.is_empty() {
        return violations;
    }
    let Some(clauses) = body.strip_prefix(' ') else {
        violations.push("first clause is not separated from the subject by a space".to_owned());
        return violations;
    };

    let Some(pattern) = clause_pattern() else {
        violations.push("clause pattern failed to compile".to_owned());
        return violations;
    };
    for (i, clause) in clauses.split(";\n").enumerate() {
        if !pattern.is_match(clause) {
            violations.push(format!("clause {}: {clause:?}", i + 1));
        }
    }
    violations
}

/// Validates encoder output for every fixture and the encoder properties.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    match fixtures::all() {
        Ok(fixtures) => validate_fixtures(&fixtures, &mut report),
        Err(e) => report.push(TestResult::fail(
            format!("{VALIDATOR}/grammar"),
            format!("Fixtures could not be built: {e}"),
        )),
    }

    if let Err(e) = validate_properties(&mut report) {
        report.push(TestResult::fail(
            format!("{VALIDATOR}/properties"),
            format!("Property fixtures could not be built: {e}"),
        ));
    }

    report
}

fn validate_fixtures(fixtures: &[Fixture], report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    for fixture in fixtures {
        let block = to_triples(&fixture.entity);
        for v in check_block(&block) {
            violations.push(format!("{}: {v}", fixture.name));
        }
        let clauses = block.matches(";\n").count() + 1;
        if clauses != fixture.entity.triple_count() {
            violations.push(format!(
                "{}: {clauses} clauses for {} triples",
                fixture.name,
                fixture.entity.triple_count()
            ));
        }
        if block != to_triples(&fixture.entity) {
            violations.push(format!("{}: encoding is not deterministic", fixture.name));
        }
    }
    report.push(TestResult::from_violations(
        format!("{VALIDATOR}/grammar"),
        format!("{} fixture blocks are well-formed and deterministic", fixtures.len()),
        "Encoder output violates the block grammar",
        violations,
    ));
}

fn check(report: &mut ConformanceReport, name: &str, ok: bool) {
    let validator = format!("{VALIDATOR}/properties");
    if ok {
        report.push(TestResult::pass(validator, name));
    } else {
        report.push(TestResult::fail(validator, format!("{name} does not hold")));
    }
}

fn validate_properties(report: &mut ConformanceReport) -> hqdm::Result<()> {
    let subject = Identifier::new("http://example.org/o#subject")?;
    let predicate = "http://example.org/o#p";

    let mut once = Entity::new(subject.clone(), EntityKind::Thing);
    once.add_string(predicate, "v");
    let mut twice = once.clone();
    twice.add_string(predicate, "v");
    check(
        report,
        "Adding a value twice equals adding it once",
        once.values(predicate) == twice.values(predicate),
    );

    let mut e = Entity::new(subject.clone(), EntityKind::Thing);
    e.add_real(predicate, 1.5);
    e.remove_value(predicate, &Value::from(1.5));
    check(
        report,
        "Removing the last value removes the predicate",
        !e.has_predicate(predicate),
    );

    let mut dated = Entity::new(subject.clone(), EntityKind::Event);
    dated.add_string("http://example.org/o#on", "2024-01-15");
    dated.add_string("http://example.org/o#at", "2024-01-15T10:30:00");
    let block = to_triples(&dated);
    check(
        report,
        "Date-shaped strings are typed xsd:date and xsd:dateTime",
        block.contains("\"2024-01-15\"^^<http://www.w3.org/2001/XMLSchema#date>")
            && block.contains("\"2024-01-15T10:30:00\"^^<http://www.w3.org/2001/XMLSchema#dateTime>"),
    );

    let mut referenced = Entity::new(subject.clone(), EntityKind::Thing);
    referenced.add_reference(predicate, Identifier::new("2024-01-15")?);
    check(
        report,
        "References render as <...> even when date-shaped",
        to_triples(&referenced).contains(&format!("<{predicate}> <2024-01-15>")),
    );

    let person = create_entity("person", subject.clone())?;
    check(
        report,
        "A created person carries only its kind tag and class name",
        person.has_value(iris::RDF_TYPE, &Value::Reference(EntityKind::Person.into()))
            && person.predicate_count() == 2
            && person.has_predicate(iris::CLASS_NAME),
    );

    check(
        report,
        "Unknown kind names are rejected",
        create_entity("not_a_real_kind", subject.clone())
            == Err(Error::UnknownKind("not_a_real_kind".to_owned())),
    );

    let mut tagged = Entity::new(subject, EntityKind::Person);
    tagged.add_string(iris::MEMBER_OF_KIND, "PERSON_KIND");
    check(
        report,
        "Substring search ignores case",
        tagged.has_value_containing(iris::MEMBER_OF_KIND, "person"),
    );

    let block = to_triples(&fixtures::multi_kind_person()?);
    let clauses = block.strip_suffix(".\n").map(|b| b.split(";\n").count());
    check(
        report,
        "The person1 scenario encodes to five clauses with a string member_of_kind",
        clauses == Some(5)
            && block.contains(
                "<https://hqdmtop.github.io/hqdm#member_of_kind> \"\"\"PERSON_KIND\"\"\"^^<http://www.w3.org/2001/XMLSchema#string>",
            ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_encoder_shapes() {
        let block = "<http://example.org/o#a> <http://example.org/o#p> <http://example.org/o#b>;\n\
<http://example.org/o#d> \"2024-01-15\"^^<http://www.w3.org/2001/XMLSchema#date>;\n\
<http://example.org/o#n> \"7\"^^<http://www.w3.org/2001/XMLSchema#integer>;\n\
<http://example.org/o#s> \"\"\"text; more\"\"\"^^<http://www.w3.org/2001/XMLSchema#string>;\n\
<http://example.org/o#r> \"\"\"1.5\"\"\".\n";
        assert_eq!(check_block(block), Vec::<String>::new());
        assert!(check_block("<http://example.org/o#a>.\n").is_empty());
    }

    #[test]
    fn rejects_malformed_blocks() {
        assert!(!check_block("http://example.org/o#a .\n").is_empty());
        assert!(!check_block("<a> <p> <b>").is_empty());
        assert!(!check_block("<a><p> <b>.\n").is_empty());
        assert!(!check_block("<a> <p> \"x\"^^<http://example.org/dt>.\n").is_empty());
        assert!(!check_block("<a> <p> <b>;<q> <c>.\n").is_empty());
    }

    #[test]
    fn live_encoder_passes() {
        let report = validate();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "encoder failures: {failures:#?}");
    }
}
