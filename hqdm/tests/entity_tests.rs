//! Entity, factory and builder behavior through the public API.

use hqdm::{
    create_entity, create_with_kinds, iris, BuilderConfig, EntityKind, Error, Identifier,
    IriBase, KindRegistry, ModelBuilder, Value,
};
use pretty_assertions::assert_eq;

fn id(s: &str) -> Identifier {
    Identifier::new(s).unwrap()
}

#[test]
fn created_entity_holds_only_seeded_predicates() {
    let e = create_entity("person", id("http://example.org/o#p1")).unwrap();
    assert!(e.has_value(iris::RDF_TYPE, &Value::Reference(EntityKind::Person.into())));
    let predicates: Vec<&str> = e.predicates().map(|(p, _)| p).collect();
    assert_eq!(predicates, vec![iris::RDF_TYPE, iris::CLASS_NAME]);
}

#[test]
fn kind_lookup_accepts_name_class_name_and_iri() {
    for name in ["functional_system", "FunctionalSystem", EntityKind::FunctionalSystem.iri()] {
        let e = create_entity(name, id("x")).unwrap();
        assert_eq!(e.kind(), EntityKind::FunctionalSystem);
    }
}

#[test]
fn unknown_kind_and_invalid_identifier() {
    assert_eq!(
        create_entity("not_a_real_kind", id("x")).unwrap_err(),
        Error::UnknownKind("not_a_real_kind".to_owned())
    );
    assert!(matches!(
        Identifier::new(""),
        Err(Error::InvalidIdentifier { .. })
    ));
    assert!(matches!(
        Identifier::new("has space"),
        Err(Error::InvalidIdentifier { .. })
    ));
}

#[test]
fn values_view_reflects_adds_and_removes() {
    let mut e = create_entity("organization", id("http://example.org/o#acme")).unwrap();
    let p = "http://example.org/o#alias";
    assert!(e.values(p).is_none());
    assert!(e.add_string(p, "ACME"));
    assert!(e.add_string(p, "Acme Corp"));
    assert!(!e.add_string(p, "ACME"));
    assert_eq!(e.values(p).map(|v| v.len()), Some(2));
    assert!(e.remove_value(p, &Value::from("ACME")));
    assert!(!e.remove_value(p, &Value::from("ACME")));
    assert!(e.remove_value(p, &Value::from("Acme Corp")));
    assert!(!e.has_predicate(p));
    assert!(!e.remove_value("http://example.org/o#never", &Value::from(1_i64)));
}

#[test]
fn search_helpers() {
    let mut e = create_entity("person", id("p")).unwrap();
    e.add_string(iris::MEMBER_OF_KIND, "PERSON_KIND");
    e.add_integer("http://example.org/o#age", 34);
    assert!(e.has_value_containing(iris::MEMBER_OF_KIND, "person"));
    assert!(e.has_value_containing(iris::MEMBER_OF_KIND, "Son_K"));
    assert!(e.has_value_case_insensitive(iris::MEMBER_OF_KIND, "person_kind"));
    assert!(!e.has_value_case_insensitive(iris::MEMBER_OF_KIND, "person"));
    assert!(e.has_value_containing("http://example.org/o#age", "3"));
    assert!(!e.has_value_case_insensitive("http://example.org/o#age", "34"));
}

#[test]
fn kind_tags_survive_removal_attempts() {
    let mut e = create_with_kinds(&[EntityKind::Person, EntityKind::Participant], id("p")).unwrap();
    let tag = Value::Reference(EntityKind::Participant.into());
    assert!(!e.remove_value(iris::RDF_TYPE, &tag));
    assert_eq!(e.kinds(), vec![EntityKind::Person, EntityKind::Participant]);
    assert!(e.conforms_to(EntityKind::Party));
    assert!(e.conforms_to(EntityKind::Thing));
    assert!(!e.conforms_to(EntityKind::Organization));
}

#[test]
fn equality_is_by_identifier() {
    let mut a = create_entity("person", id("same")).unwrap();
    let b = create_entity("organization", id("same")).unwrap();
    a.add_string(iris::ENTITY_NAME, "a");
    assert_eq!(a, b);
    let old = a.rebind_identifier(id("other"));
    assert_eq!(old, id("same"));
    assert_ne!(a, b);
}

#[test]
fn registry_covers_vocabulary() {
    let registry = KindRegistry::global();
    assert_eq!(registry.len(), EntityKind::COUNT);
    let ancestors = registry.ancestors(EntityKind::Person);
    assert!(ancestors.contains(&EntityKind::Party));
    assert!(ancestors.contains(&EntityKind::Thing));
}

#[test]
fn builder_models_an_organization() {
    let mut model = ModelBuilder::new(BuilderConfig {
        base: IriBase::new("acme", "http://acme.example/model#").unwrap(),
        name_entities: true,
    });
    let acme = model.create("organization", "acme").unwrap();
    let sales = model.create("organization_component", "sales").unwrap();
    let alice = model.create("person", "alice").unwrap();
    let kind = model.create("kind_of_person", "employee_kind").unwrap();
    model
        .component_of(&sales, &acme)
        .unwrap()
        .member_of_kind(&alice, &kind)
        .unwrap()
        .entity_name(&acme, "ACME Ltd")
        .unwrap();

    assert_eq!(model.len(), 4);
    let triples = model.to_triples();
    assert!(triples.starts_with("<http://acme.example/model#acme>"));
    assert!(triples.contains(
        "<https://hqdmtop.github.io/hqdm#component_of> <http://acme.example/model#acme>"
    ));
    assert!(triples.contains(
        "<https://hqdmtop.github.io/hqdm#member_of_kind> <http://acme.example/model#employee_kind>"
    ));

    let entities = model.into_entities();
    let names = entities[0].values(iris::ENTITY_NAME).unwrap();
    assert_eq!(names.len(), 2);
}
