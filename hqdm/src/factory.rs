//! Entity construction by kind name, kind tag or type IRI.

use tracing::debug;

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::identifier::Identifier;
use crate::kinds::EntityKind;
use crate::registry::KindRegistry;

/// Creates an entity of the kind named `kind_name`: an HQDM local name
/// (`person`), class name (`Person`) or full kind IRI.
///
/// # Errors
///
/// Returns [`Error::UnknownKind`] if the name is not in the vocabulary. No
/// entity is created in that case.
pub fn create_entity(kind_name: &str, id: Identifier) -> Result<Entity> {
    let kind = KindRegistry::global().lookup(kind_name)?;
    Ok(create(kind, id))
}

/// Creates an entity of a known kind.
#[must_use]
pub fn create(kind: EntityKind, id: Identifier) -> Entity {
    debug!(%id, kind = kind.name(), "creating entity");
    Entity::new(id, kind)
}

/// Creates an entity from an `rdf:type` IRI, as found when reading data back.
///
/// # Errors
///
/// Returns [`Error::UnknownKind`] if the IRI is outside the HQDM namespace or
/// names no kind.
pub fn create_from_type_iri(type_iri: &str, id: Identifier) -> Result<Entity> {
    let kind = KindRegistry::global().from_iri(type_iri)?;
    debug!(%id, type_iri, "resolved type IRI");
    Ok(create(kind, id))
}

/// Creates one entity tagged with several kinds, e.g. something that is at
/// once a `person`, a `participant` and a `party`. The first kind is primary.
///
/// # Errors
///
/// Returns [`Error::UnknownKind`] if `kinds` is empty.
pub fn create_with_kinds(kinds: &[EntityKind], id: Identifier) -> Result<Entity> {
    let (&primary, rest) = kinds
        .split_first()
        .ok_or_else(|| Error::UnknownKind(String::new()))?;
    let mut entity = create(primary, id);
    for &kind in rest {
        entity.add_kind(kind);
    }
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iris;
    use crate::value::Value;

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn create_by_name_tags_the_kind() {
        let e = create_entity("person", id("person1")).unwrap();
        assert_eq!(e.kind(), EntityKind::Person);
        assert!(e.has_value(
            iris::RDF_TYPE,
            &Value::Reference(EntityKind::Person.into())
        ));
        assert_eq!(e.predicate_count(), 2);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = create_entity("not_a_real_kind", id("x")).unwrap_err();
        assert_eq!(err, Error::UnknownKind("not_a_real_kind".to_owned()));
    }

    #[test]
    fn type_iri_round_trip() {
        let e = create_from_type_iri(EntityKind::ClassOfFunctionalSystem.iri(), id("c1")).unwrap();
        assert_eq!(e.kind(), EntityKind::ClassOfFunctionalSystem);
        assert!(create_from_type_iri("http://example.org/o#person", id("x")).is_err());
    }

    #[test]
    fn multi_kind_creation() {
        let e = create_with_kinds(
            &[EntityKind::Person, EntityKind::Participant, EntityKind::Party],
            id("p"),
        )
        .unwrap();
        assert_eq!(e.kind(), EntityKind::Person);
        assert_eq!(
            e.values(iris::RDF_TYPE).map(|v| v.len()),
            Some(3)
        );
        assert!(create_with_kinds(&[], id("p")).is_err());
    }
}
