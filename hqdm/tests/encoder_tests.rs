//! Exact-output tests for the triple-block encoder.

use hqdm::serializer::triples::to_triples;
use hqdm::{create_entity, iris, EntityKind, Entity, Identifier, Value};
use pretty_assertions::assert_eq;

fn id(s: &str) -> Identifier {
    Identifier::new(s).unwrap()
}

/// person1 tagged person + participant, with a name and a string
/// member_of_kind, and the seeded class name removed.
fn scenario_person() -> Entity {
    let mut e = create_entity("person", id("person1")).unwrap();
    assert!(e.remove_value(iris::CLASS_NAME, &Value::from("Person")));
    e.add_kind(EntityKind::Participant);
    e.add_string(iris::ENTITY_NAME, "person1");
    e.add_string(iris::MEMBER_OF_KIND, "PERSON_KIND");
    e
}

#[test]
fn end_to_end_person_block() {
    let expected = "<person1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://hqdmtop.github.io/hqdm#participant>;\n\
<http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://hqdmtop.github.io/hqdm#person>;\n\
<https://hqdmtop.github.io/hqdm#data_EntityName> \"\"\"person1\"\"\"^^<http://www.w3.org/2001/XMLSchema#string>;\n\
<https://hqdmtop.github.io/hqdm#member_of_kind> \"\"\"PERSON_KIND\"\"\"^^<http://www.w3.org/2001/XMLSchema#string>.\n";
    assert_eq!(to_triples(&scenario_person()), expected);
}

#[test]
fn end_to_end_has_four_clauses() {
    let block = to_triples(&scenario_person());
    assert!(block.ends_with(".\n"));
    let body = block.strip_suffix(".\n").unwrap();
    assert_eq!(body.split(";\n").count(), 4);
}

#[test]
fn seeded_entity_block() {
    let e = create_entity("person", id("http://example.org/o#person1")).unwrap();
    let expected = "<http://example.org/o#person1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://hqdmtop.github.io/hqdm#person>;\n\
<https://hqdmtop.github.io/hqdm#data_ClassName> \"\"\"Person\"\"\"^^<http://www.w3.org/2001/XMLSchema#string>.\n";
    assert_eq!(to_triples(&e), expected);
}

#[test]
fn string_typed_kind_values_are_quoted() {
    let mut e = create_entity("person", id("http://example.org/o#person1")).unwrap();
    e.add_string(iris::RDF_TYPE, "http://example.org/o#participant");
    let block = to_triples(&e);
    assert!(block.contains(
        "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \"\"\"http://example.org/o#participant\"\"\"^^<http://www.w3.org/2001/XMLSchema#string>"
    ));
}

#[test]
fn dates_are_typed_by_content() {
    let mut e = Entity::new(id("http://example.org/o#e"), EntityKind::Event);
    e.add_string("http://example.org/o#on", "2024-01-15");
    e.add_string("http://example.org/o#at", "2024-01-15T10:30:00");
    let block = to_triples(&e);
    assert!(block.contains(
        "<http://example.org/o#on> \"2024-01-15\"^^<http://www.w3.org/2001/XMLSchema#date>"
    ));
    assert!(block.contains(
        "<http://example.org/o#at> \"2024-01-15T10:30:00\"^^<http://www.w3.org/2001/XMLSchema#dateTime>"
    ));
}

#[test]
fn references_are_never_quoted() {
    let mut e = Entity::new(id("http://example.org/o#e"), EntityKind::Event);
    e.add_reference("http://example.org/o#ref", id("2024-01-15"));
    let block = to_triples(&e);
    assert!(block.contains("<http://example.org/o#ref> <2024-01-15>"));
    assert!(!block.contains("XMLSchema#date>"));
}

#[test]
fn numbers() {
    let mut e = Entity::new(id("http://example.org/o#e"), EntityKind::Thing);
    e.add_integer("http://example.org/o#count", 42);
    e.add_real("http://example.org/o#ratio", 2.0);
    let block = to_triples(&e);
    assert!(block.contains(
        "<http://example.org/o#count> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
    ));
    assert!(block.contains("<http://example.org/o#ratio> \"\"\"2.0\"\"\""));
}

#[test]
fn encoding_is_deterministic() {
    let e = scenario_person();
    assert_eq!(to_triples(&e), to_triples(&e));
    assert_eq!(to_triples(&e), to_triples(&e.clone()));
}
