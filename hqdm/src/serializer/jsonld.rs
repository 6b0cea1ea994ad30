//! JSON-LD 1.1 serializer.
//!
//! Entities become graph nodes: `@id` is the identifier, `@type` holds the
//! kind references from `rdf:type`, and every other predicate is keyed by
//! its prefixed IRI. Literal typing follows
//! [`classify`](super::triples::classify).

use serde_json::{json, Map, Value as Json};

use crate::entity::Entity;
use crate::iris;
use crate::registry::KindRegistry;
use crate::serializer::triples::{classify, LiteralKind};
use crate::value::Value;

const PREFIXES: &[(&str, &str)] = &[
    ("hqdm", iris::HQDM),
    ("rdf", iris::RDF),
    ("rdfs", iris::RDFS),
    ("owl", iris::OWL),
    ("xsd", iris::XSD),
];

/// Serializes one entity to a JSON-LD node object.
#[must_use]
pub fn entity_to_json_ld(entity: &Entity) -> Json {
    let mut node = Map::new();
    node.insert("@id".to_owned(), json!(entity.id().as_str()));

    let types: Vec<Json> = entity
        .values(iris::RDF_TYPE)
        .into_iter()
        .flatten()
        .filter_map(Value::as_reference)
        .map(|id| json!(shorten_iri(id.as_str())))
        .collect();
    node.insert("@type".to_owned(), Json::Array(types));

    for triple in entity.triples() {
        if triple.predicate == iris::RDF_TYPE && triple.object.is_reference() {
            continue;
        }
        push_value(&mut node, shorten_iri(triple.predicate), value_to_json(triple.object));
    }

    Json::Object(node)
}

/// Serializes several entities to a JSON-LD document with `@context` and
/// `@graph`.
#[must_use]
pub fn model_to_json_ld<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Json {
    let graph: Vec<Json> = entities.into_iter().map(entity_to_json_ld).collect();
    json!({
        "@context": build_context(),
        "@graph": graph
    })
}

/// Serializes the kind registry as an OWL vocabulary graph.
#[must_use]
pub fn vocabulary_to_json_ld(registry: &KindRegistry) -> Json {
    let mut nodes = vec![json!({
        "@id": iris::HQDM.trim_end_matches('#'),
        "@type": "owl:Ontology",
        "rdfs:label": "HQDM"
    })];
    for kind in registry.iter() {
        let parents: Vec<Json> = kind
            .parents()
            .iter()
            .map(|p| json!({ "@id": shorten_iri(p.iri()) }))
            .collect();
        nodes.push(json!({
            "@id": shorten_iri(kind.iri()),
            "@type": "owl:Class",
            "rdfs:label": kind.name(),
            "rdfs:subClassOf": parents
        }));
    }
    json!({
        "@context": build_context(),
        "@graph": nodes
    })
}

fn build_context() -> Json {
    let mut ctx = Map::new();
    for (prefix, iri) in PREFIXES {
        ctx.insert((*prefix).to_owned(), json!(iri));
    }
    Json::Object(ctx)
}

fn value_to_json(value: &Value) -> Json {
    match (classify(value), value) {
        (LiteralKind::Reference, _) => json!({ "@id": value.to_string() }),
        (kind @ (LiteralKind::Date | LiteralKind::DateTime), _) => json!({
            "@value": value.to_string(),
            "@type": kind.datatype().map(shorten_iri)
        }),
        (_, Value::Integer(i)) => json!(i),
        (_, Value::Real(r)) => json!(r),
        _ => json!(value.to_string()),
    }
}

/// When the same key appears more than once, promote it to an array rather
/// than overwriting.
fn push_value(node: &mut Map<String, Json>, key: String, value: Json) {
    if let Some(existing) = node.get_mut(&key) {
        let prev = std::mem::replace(existing, Json::Null);
        *existing = match prev {
            Json::Array(mut arr) => {
                arr.push(value);
                Json::Array(arr)
            }
            other => json!([other, value]),
        };
    } else {
        node.insert(key, value);
    }
}

/// Shortens a full IRI to a prefixed form using the known prefixes.
fn shorten_iri(iri: &str) -> String {
    for (prefix, full) in PREFIXES {
        if let Some(local) = iri.strip_prefix(full) {
            return format!("{prefix}:{local}");
        }
    }
    iri.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityKind, Identifier};

    fn person() -> Entity {
        let mut e = Entity::new(
            Identifier::new("http://example.org/o#person1").unwrap(),
            EntityKind::Person,
        );
        e.add_kind(EntityKind::Participant);
        e.add_string(iris::ENTITY_NAME, "person1");
        e.add_string("http://example.org/o#born", "1990-04-01");
        e.add_integer("http://example.org/o#age", 34);
        e
    }

    #[test]
    fn node_has_id_and_types() {
        let node = entity_to_json_ld(&person());
        assert_eq!(node["@id"], "http://example.org/o#person1");
        let types = node["@type"].as_array().expect("@type must be array");
        assert!(types.contains(&json!("hqdm:person")));
        assert!(types.contains(&json!("hqdm:participant")));
        assert!(node.get("rdf:type").is_none());
    }

    #[test]
    fn literals_are_typed() {
        let node = entity_to_json_ld(&person());
        assert_eq!(node["hqdm:data_EntityName"], "person1");
        assert_eq!(node["hqdm:data_ClassName"], "Person");
        assert_eq!(node["http://example.org/o#born"]["@type"], "xsd:date");
        assert_eq!(node["http://example.org/o#age"], 34);
    }

    #[test]
    fn repeated_predicates_become_arrays() {
        let mut e = person();
        e.add_string(iris::ENTITY_NAME, "p1");
        let node = entity_to_json_ld(&e);
        assert_eq!(node["hqdm:data_EntityName"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn vocabulary_graph_has_one_node_per_kind() {
        let registry = KindRegistry::global();
        let doc = vocabulary_to_json_ld(registry);
        assert!(doc["@context"].is_object());
        let graph = doc["@graph"].as_array().expect("@graph must be array");
        assert_eq!(graph.len(), registry.len() + 1);
    }
}
