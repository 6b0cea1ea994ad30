//! Turtle 1.1 serializer.
//!
//! Entity blocks from [`to_triples`](super::triples::to_triples) are already
//! valid Turtle predicate-object lists; this module adds the prefix header
//! and renders the kind vocabulary as class blocks.

use crate::entity::Entity;
use crate::registry::KindRegistry;
use crate::serializer::triples::to_triples;

const PREFIXES: &str = "@prefix owl:  <http://www.w3.org/2002/07/owl#> .\n\
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .\n\
@prefix hqdm: <https://hqdmtop.github.io/hqdm#> .\n";

/// Serializes entities to a Turtle document: prefix header, blank line,
/// then one block per entity.
#[must_use]
pub fn model_to_turtle<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> String {
    let mut out = String::from(PREFIXES);
    out.push('\n');
    for entity in entities {
        out.push_str(&to_triples(entity));
        out.push('\n');
    }
    out
}

/// Serializes the kind registry as an OWL vocabulary in Turtle.
#[must_use]
pub fn vocabulary_to_turtle(registry: &KindRegistry) -> String {
    let mut out = String::with_capacity(256 * registry.len());
    out.push_str(PREFIXES);
    out.push('\n');

    out.push_str(
        "<https://hqdmtop.github.io/hqdm>\n  a owl:Ontology ;\n  rdfs:label \"HQDM\" .\n\n",
    );

    for kind in registry.iter() {
        let subclasses: String = kind
            .parents()
            .iter()
            .map(|parent| format!("  rdfs:subClassOf hqdm:{} ;\n", parent.name()))
            .collect();
        out.push_str(&format!(
            "hqdm:{}\n  a owl:Class ;\n{}  rdfs:label \"{}\" .\n\n",
            kind.name(),
            subclasses,
            kind.name()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityKind, Identifier};

    #[test]
    fn vocabulary_has_prefixes_and_classes() {
        let registry = KindRegistry::global();
        let turtle = vocabulary_to_turtle(registry);
        assert!(turtle.contains("@prefix owl:"));
        assert!(turtle.contains("@prefix hqdm:"));
        assert_eq!(turtle.matches("  a owl:Class ;\n").count(), registry.len());
        assert!(turtle.contains(
            "hqdm:person\n  a owl:Class ;\n  rdfs:subClassOf hqdm:biological_system ;\n"
        ));
    }

    #[test]
    fn thing_has_no_superclass() {
        let turtle = vocabulary_to_turtle(KindRegistry::global());
        assert!(turtle.contains("hqdm:thing\n  a owl:Class ;\n  rdfs:label \"thing\" .\n"));
    }

    #[test]
    fn model_wraps_entity_blocks() {
        let e = Entity::new(Identifier::new("http://example.org/o#a").unwrap(), EntityKind::Person);
        let turtle = model_to_turtle([&e]);
        assert!(turtle.starts_with("@prefix owl:"));
        assert!(turtle.contains(&to_triples(&e)));
    }
}
