//! Triple-block encoder.
//!
//! Renders one entity as a single subject block:
//!
//! ```text
//! <subject> <p1> literal1;
//! <p2> literal2;
//! <p3> literal3.
//! ```
//!
//! Every `(predicate, value)` pair becomes one clause; clauses are joined
//! with `;\n` across the whole entity and the block ends with `.\n`. The
//! subject and predicates are written verbatim inside angle brackets.
//!
//! Literal encoding is decided by [`classify`], in priority order:
//! reference, dateTime-looking text, date-looking text, string, integer,
//! and finally an untyped triple-quoted literal. The date checks look at the
//! value's text, so a string such as `2024-01-15` is typed `xsd:date`.

use std::sync::OnceLock;

use regex::Regex;

use crate::entity::Entity;
use crate::iris::{XSD_DATE, XSD_DATETIME, XSD_INTEGER, XSD_STRING};
use crate::value::Value;

/// How a value is written as an RDF object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `<value>`.
    Reference,
    /// `"value"^^xsd:dateTime`.
    DateTime,
    /// `"value"^^xsd:date`.
    Date,
    /// `"""value"""^^xsd:string`.
    String,
    /// `"value"^^xsd:integer`.
    Integer,
    /// `"""value"""` with no datatype.
    Plain,
}

impl LiteralKind {
    /// XSD datatype IRI for this encoding, if it carries one.
    #[must_use]
    pub fn datatype(self) -> Option<&'static str> {
        match self {
            LiteralKind::DateTime => Some(XSD_DATETIME),
            LiteralKind::Date => Some(XSD_DATE),
            LiteralKind::String => Some(XSD_STRING),
            LiteralKind::Integer => Some(XSD_INTEGER),
            LiteralKind::Reference | LiteralKind::Plain => None,
        }
    }
}

fn date_time_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}").ok())
        .as_ref()
}

fn date_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").ok())
        .as_ref()
}

fn matches(pattern: Option<&Regex>, text: &str) -> bool {
    pattern.is_some_and(|re| re.is_match(text))
}

/// Decides the encoding of a value.
#[must_use]
pub fn classify(value: &Value) -> LiteralKind {
    if value.is_reference() {
        return LiteralKind::Reference;
    }
    let text = value.to_string();
    if matches(date_time_pattern(), &text) {
        LiteralKind::DateTime
    } else if matches(date_pattern(), &text) {
        LiteralKind::Date
    } else {
        match value {
            Value::String(_) => LiteralKind::String,
            Value::Integer(_) => LiteralKind::Integer,
            _ => LiteralKind::Plain,
        }
    }
}

/// Encodes one value as an RDF object term.
#[must_use]
pub fn encode_literal(value: &Value) -> String {
    let kind = classify(value);
    match kind {
        LiteralKind::Reference => format!("<{value}>"),
        LiteralKind::DateTime | LiteralKind::Date | LiteralKind::Integer => {
            format!("\"{value}\"^^<{}>", kind.datatype().unwrap_or_default())
        }
        LiteralKind::String => format!("\"\"\"{value}\"\"\"^^<{XSD_STRING}>"),
        LiteralKind::Plain => format!("\"\"\"{value}\"\"\""),
    }
}

/// Serializes an entity to a triple block.
///
/// Infallible and deterministic: the same entity always yields the same
/// string. An entity with no predicates renders as `<id>.\n`.
#[must_use]
pub fn to_triples(entity: &Entity) -> String {
    let mut out = String::with_capacity(64 * (entity.triple_count() + 1));
    out.push('<');
    out.push_str(entity.id().as_str());
    out.push('>');

    for (i, triple) in entity.triples().enumerate() {
        if i == 0 {
            out.push(' ');
        } else {
            out.push_str(";\n");
        }
        out.push('<');
        out.push_str(triple.predicate);
        out.push_str("> ");
        out.push_str(&encode_literal(triple.object));
    }

    out.push_str(".\n");
    out
}

/// Serializes several entities, one block after another.
#[must_use]
pub fn model_to_triples<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> String {
    entities.into_iter().map(to_triples).collect()
}
