//! N-Triples serializer.
//!
//! One triple per line, absolute IRIs, escaped literals. Datatypes follow
//! [`classify`](super::triples::classify), so N-Triples and the triple-block
//! encoder agree on how each value is typed; untyped reals become plain
//! literals.

use crate::entity::Entity;
use crate::iris::{OWL_CLASS, OWL_ONTOLOGY, RDFS_LABEL, RDFS_SUBCLASS_OF, RDF_TYPE, XSD_STRING};
use crate::registry::KindRegistry;
use crate::serializer::triples::{classify, LiteralKind};
use crate::value::Value;

/// Serializes one entity to N-Triples.
#[must_use]
pub fn entity_to_ntriples(entity: &Entity) -> String {
    let mut out = String::with_capacity(128 * entity.triple_count());
    for t in entity.triples() {
        triple(&mut out, t.subject.as_str(), t.predicate, &object(t.object));
    }
    out
}

/// Serializes several entities to one N-Triples document.
#[must_use]
pub fn model_to_ntriples<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> String {
    entities.into_iter().map(entity_to_ntriples).collect()
}

/// Serializes the kind registry as an OWL vocabulary: every kind is an
/// `owl:Class` with an `rdfs:label` and one `rdfs:subClassOf` per parent.
#[must_use]
pub fn vocabulary_to_ntriples(registry: &KindRegistry) -> String {
    let mut out = String::with_capacity(160 * 4 * registry.len());

    let ontology = crate::iris::HQDM.trim_end_matches('#');
    triple(&mut out, ontology, RDF_TYPE, &iri(OWL_ONTOLOGY));

    for kind in registry.iter() {
        triple(&mut out, kind.iri(), RDF_TYPE, &iri(OWL_CLASS));
        triple(&mut out, kind.iri(), RDFS_LABEL, &lit(kind.name(), XSD_STRING));
        for parent in kind.parents() {
            triple(&mut out, kind.iri(), RDFS_SUBCLASS_OF, &iri(parent.iri()));
        }
    }
    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{s}>")
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn lit(s: &str, datatype: &str) -> String {
    format!("\"{}\"^^<{}>", escape(s), datatype)
}

fn object(value: &Value) -> String {
    let kind = classify(value);
    match (kind, kind.datatype()) {
        (LiteralKind::Reference, _) => iri(&value.to_string()),
        (_, Some(datatype)) => lit(&value.to_string(), datatype),
        (_, None) => format!("\"{}\"", escape(&value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityKind, Identifier};

    #[test]
    fn every_line_ends_with_period() {
        let mut e = Entity::new(Identifier::new("http://example.org/o#p").unwrap(), EntityKind::Person);
        e.add_string("http://example.org/o#note", "line one\nline \"two\"");
        e.add_real("http://example.org/o#height", 1.8);
        let nt = entity_to_ntriples(&e);
        assert_eq!(nt.lines().count(), e.triple_count());
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
        assert!(nt.contains(r#""line one\nline \"two\""^^<http://www.w3.org/2001/XMLSchema#string>"#));
        assert!(nt.contains(r#"<http://example.org/o#height> "1.8" ."#));
    }

    #[test]
    fn vocabulary_declares_every_kind() {
        let registry = KindRegistry::global();
        let nt = vocabulary_to_ntriples(registry);
        let classes = nt
            .lines()
            .filter(|l| l.ends_with(&format!("<{RDF_TYPE}> <{OWL_CLASS}> .")))
            .count();
        assert_eq!(classes, registry.len());
        assert!(nt.contains(&format!(
            "<{}> <{RDFS_SUBCLASS_OF}> <{}> .",
            EntityKind::Person.iri(),
            EntityKind::Party.iri()
        )));
    }
}
