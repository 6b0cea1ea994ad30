//! The attribute-store entity.
//!
//! An [`Entity`] is an identified node with a multi-valued predicate map.
//! Entities never point at each other directly: relationships are
//! [`Value::Reference`] values resolved by identifier equality, as in RDF.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::warn;

use crate::identifier::Identifier;
use crate::iris;
use crate::kinds::EntityKind;
use crate::registry::KindRegistry;
use crate::value::Value;

/// An identified HQDM thing with kind tags and a predicate → value-set map.
///
/// Invariants:
/// - a predicate key is present iff it holds at least one value;
/// - `rdf:type` always holds the primary kind, and kind tags are never
///   removed once added;
/// - equality and hashing consider the identifier only.
#[derive(Debug, Clone)]
pub struct Entity {
    id: Identifier,
    kind: EntityKind,
    predicates: BTreeMap<String, BTreeSet<Value>>,
}

/// One `(subject, predicate, object)` statement projected from an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple<'a> {
    /// The entity's identifier.
    pub subject: &'a Identifier,
    /// The predicate name.
    pub predicate: &'a str,
    /// One value of the predicate.
    pub object: &'a Value,
}

impl Entity {
    /// Creates an entity tagged with `kind`.
    ///
    /// The new entity holds exactly two predicates: `rdf:type` with a
    /// reference to the kind IRI, and the class-name predicate
    /// ([`iris::CLASS_NAME`]) with the kind's canonical class name.
    #[must_use]
    pub fn new(id: Identifier, kind: EntityKind) -> Self {
        let mut entity = Self {
            id,
            kind,
            predicates: BTreeMap::new(),
        };
        entity.insert(iris::RDF_TYPE, Value::Reference(kind.into()));
        entity.insert(iris::CLASS_NAME, Value::from(kind.class_name()));
        entity
    }

    /// Returns the entity's identifier.
    #[must_use]
    pub fn id(&self) -> &Identifier {
        &self.id
    }

    /// Returns the primary kind assigned at creation.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Replaces the identifier and returns the previous one.
    ///
    /// Only intended for repairing identities of deserialized entities;
    /// any references to the old identifier elsewhere are left untouched.
    pub fn rebind_identifier(&mut self, id: Identifier) -> Identifier {
        std::mem::replace(&mut self.id, id)
    }

    /// Adds a reference value. Returns `true` if it was not already present.
    pub fn add_reference(&mut self, predicate: impl Into<String>, value: Identifier) -> bool {
        self.add_value(predicate, Value::Reference(value))
    }

    /// Adds a string value. Returns `true` if it was not already present.
    pub fn add_string(&mut self, predicate: impl Into<String>, value: impl Into<String>) -> bool {
        self.add_value(predicate, Value::String(value.into()))
    }

    /// Adds an integer value. Returns `true` if it was not already present.
    pub fn add_integer(&mut self, predicate: impl Into<String>, value: i64) -> bool {
        self.add_value(predicate, Value::Integer(value))
    }

    /// Adds a real value. Returns `true` if it was not already present.
    pub fn add_real(&mut self, predicate: impl Into<String>, value: f64) -> bool {
        self.add_value(predicate, Value::Real(value))
    }

    /// Adds any value to the predicate's set, creating the set if needed.
    ///
    /// Adding a value that is already present changes nothing. An empty
    /// predicate name is ignored and logged.
    pub fn add_value(&mut self, predicate: impl Into<String>, value: impl Into<Value>) -> bool {
        let predicate = predicate.into();
        if predicate.is_empty() {
            warn!(entity = %self.id, "ignoring value for empty predicate name");
            return false;
        }
        self.insert(predicate, value.into())
    }

    fn insert(&mut self, predicate: impl Into<String>, value: Value) -> bool {
        self.predicates
            .entry(predicate.into())
            .or_default()
            .insert(value)
    }

    /// Removes `value` from the predicate's set. Removing the last value
    /// removes the predicate.
    ///
    /// Returns `false` if nothing was removed: the predicate or value was
    /// absent, or the value is a kind tag (`rdf:type` reference to a
    /// registered kind), which is never removed.
    pub fn remove_value(&mut self, predicate: &str, value: &Value) -> bool {
        if predicate == iris::RDF_TYPE && is_kind_tag(value) {
            warn!(entity = %self.id, kind = %value, "kind tags cannot be removed");
            return false;
        }
        let Some(values) = self.predicates.get_mut(predicate) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.predicates.remove(predicate);
        }
        removed
    }

    /// Returns the values held under `predicate`, if any.
    #[must_use]
    pub fn values(&self, predicate: &str) -> Option<&BTreeSet<Value>> {
        self.predicates.get(predicate)
    }

    /// Iterates predicates and their value sets in predicate order.
    pub fn predicates(&self) -> impl Iterator<Item = (&str, &BTreeSet<Value>)> + '_ {
        self.predicates.iter().map(|(p, v)| (p.as_str(), v))
    }

    /// Number of distinct predicates.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Number of `(predicate, value)` pairs, i.e. triples this entity projects.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.predicates.values().map(BTreeSet::len).sum()
    }

    /// Returns `true` if the predicate holds at least one value.
    #[must_use]
    pub fn has_predicate(&self, predicate: &str) -> bool {
        self.predicates.contains_key(predicate)
    }

    /// Exact membership test.
    #[must_use]
    pub fn has_value(&self, predicate: &str, value: &Value) -> bool {
        self.values(predicate)
            .is_some_and(|values| values.contains(value))
    }

    /// Case-insensitive equality against the predicate's string values.
    /// Non-string values are skipped.
    #[must_use]
    pub fn has_value_case_insensitive(&self, predicate: &str, value: &str) -> bool {
        let needle = value.to_lowercase();
        self.values(predicate).is_some_and(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .any(|s| s.to_lowercase() == needle)
        })
    }

    /// Loose search: `true` if the lowercase textual form of any value under
    /// `predicate` contains `substring`, compared case-insensitively.
    #[must_use]
    pub fn has_value_containing(&self, predicate: &str, substring: &str) -> bool {
        let needle = substring.to_lowercase();
        self.values(predicate).is_some_and(|values| {
            values
                .iter()
                .any(|v| v.to_string().to_lowercase().contains(&needle))
        })
    }

    /// Tags the entity with an additional kind. Returns `true` if the tag is
    /// new.
    pub fn add_kind(&mut self, kind: EntityKind) -> bool {
        self.insert(iris::RDF_TYPE, Value::Reference(kind.into()))
    }

    /// All kinds this entity is tagged with, primary kind first.
    ///
    /// Both reference and string `rdf:type` values are considered; values
    /// that do not name a registered kind are skipped.
    #[must_use]
    pub fn kinds(&self) -> Vec<EntityKind> {
        let registry = KindRegistry::global();
        let mut kinds = vec![self.kind];
        for value in self.values(iris::RDF_TYPE).into_iter().flatten() {
            let text = match value {
                Value::Reference(id) => id.as_str(),
                Value::String(s) => s.as_str(),
                _ => continue,
            };
            if let Ok(kind) = registry.from_iri(text) {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        kinds
    }

    /// Returns `true` if the entity is tagged with exactly `kind`.
    #[must_use]
    pub fn is_kind(&self, kind: EntityKind) -> bool {
        self.kinds().contains(&kind)
    }

    /// Returns `true` if any of the entity's kinds is `kind` or one of its
    /// specializations.
    #[must_use]
    pub fn conforms_to(&self, kind: EntityKind) -> bool {
        let registry = KindRegistry::global();
        self.kinds()
            .into_iter()
            .any(|k| registry.is_subkind_of(k, kind))
    }

    /// Projects the entity to its triples, in predicate then value order.
    pub fn triples(&self) -> impl Iterator<Item = Triple<'_>> + '_ {
        self.predicates.iter().flat_map(move |(predicate, values)| {
            values.iter().map(move |object| Triple {
                subject: &self.id,
                predicate,
                object,
            })
        })
    }
}

fn is_kind_tag(value: &Value) -> bool {
    value
        .as_reference()
        .is_some_and(|id| KindRegistry::global().from_iri(id.as_str()).is_ok())
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Triple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn creation_seeds_type_and_class_name() {
        let e = Entity::new(id("person1"), EntityKind::Person);
        assert_eq!(e.predicate_count(), 2);
        assert!(e.has_value(
            iris::RDF_TYPE,
            &Value::Reference(EntityKind::Person.into())
        ));
        assert!(e.has_value(iris::CLASS_NAME, &Value::from("Person")));
    }

    #[test]
    fn empty_predicate_is_ignored() {
        let mut e = Entity::new(id("x"), EntityKind::Thing);
        assert!(!e.add_string("", "value"));
        assert!(!e.has_predicate(""));
    }

    #[test]
    fn remove_last_value_drops_key() {
        let mut e = Entity::new(id("x"), EntityKind::Thing);
        e.add_integer("p", 7);
        assert!(e.remove_value("p", &Value::Integer(7)));
        assert!(!e.has_predicate("p"));
        assert!(!e.remove_value("p", &Value::Integer(7)));
    }

    #[test]
    fn kind_tags_are_protected() {
        let mut e = Entity::new(id("x"), EntityKind::Person);
        e.add_kind(EntityKind::Participant);
        let tag = Value::Reference(EntityKind::Participant.into());
        assert!(!e.remove_value(iris::RDF_TYPE, &tag));
        assert!(e.is_kind(EntityKind::Participant));
    }

    #[test]
    fn kinds_lists_primary_first() {
        let mut e = Entity::new(id("x"), EntityKind::Person);
        e.add_kind(EntityKind::Participant);
        e.add_kind(EntityKind::Party);
        let kinds = e.kinds();
        assert_eq!(kinds[0], EntityKind::Person);
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn triple_projection_matches_count() {
        let mut e = Entity::new(id("x"), EntityKind::Thing);
        e.add_string("p", "a");
        e.add_string("p", "b");
        assert_eq!(e.triple_count(), 4);
        assert_eq!(e.triples().count(), 4);
        assert!(e.triples().all(|t| t.subject == e.id()));
    }
}
