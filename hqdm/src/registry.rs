//! Name → kind lookup over the closed [`EntityKind`] vocabulary.
//!
//! The registry is the replacement for a per-class factory: resolving a kind
//! is a single hash lookup, and the table is built once on first use.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::kinds::EntityKind;

/// Static lookup table from kind names, class names and IRIs to
/// [`EntityKind`] tags.
#[derive(Debug)]
pub struct KindRegistry {
    by_key: HashMap<&'static str, EntityKind>,
}

impl KindRegistry {
    /// Returns the process-wide registry, building it on first call.
    #[must_use]
    pub fn global() -> &'static KindRegistry {
        static REGISTRY: OnceLock<KindRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut by_key = HashMap::with_capacity(EntityKind::COUNT * 3);
            for &kind in EntityKind::ALL {
                by_key.insert(kind.name(), kind);
                by_key.insert(kind.class_name(), kind);
                by_key.insert(kind.iri(), kind);
            }
            debug!(kinds = EntityKind::COUNT, "entity kind registry initialised");
            KindRegistry { by_key }
        })
    }

    /// Resolves a kind from its HQDM local name (`person`), class name
    /// (`Person`) or full IRI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if `name` is not in the vocabulary.
    pub fn lookup(&self, name: &str) -> Result<EntityKind> {
        self.by_key
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownKind(name.to_owned()))
    }

    /// Resolves a kind from a type IRI, as found in the `rdf:type` values of
    /// deserialized data. Only IRIs in the HQDM namespace are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] if the IRI is outside the HQDM namespace
    /// or names no kind.
    pub fn from_iri(&self, iri: &str) -> Result<EntityKind> {
        let local = EntityKind::local_name(iri).ok_or_else(|| Error::UnknownKind(iri.to_owned()))?;
        match self.by_key.get(local) {
            Some(&kind) if kind.name() == local => Ok(kind),
            _ => Err(Error::UnknownKind(iri.to_owned())),
        }
    }

    /// Returns `true` if `name` resolves to a kind.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_key.contains_key(name)
    }

    /// Transitive supertypes of `kind`, nearest first, without duplicates.
    #[must_use]
    pub fn ancestors(&self, kind: EntityKind) -> Vec<EntityKind> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut queue: VecDeque<EntityKind> = kind.parents().iter().copied().collect();
        while let Some(next) = queue.pop_front() {
            if seen.insert(next) {
                out.push(next);
                queue.extend(next.parents().iter().copied());
            }
        }
        out
    }

    /// Returns `true` if `kind` is `other` or specializes it.
    #[must_use]
    pub fn is_subkind_of(&self, kind: EntityKind, other: EntityKind) -> bool {
        kind == other || self.ancestors(kind).contains(&other)
    }

    /// Number of kinds in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        EntityKind::COUNT
    }

    /// Always `false`; the vocabulary is fixed and non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.is_empty()
    }

    /// Iterates every kind in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = EntityKind> + '_ {
        EntityKind::ALL.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_all_spellings() {
        let registry = KindRegistry::global();
        assert_eq!(registry.lookup("person").unwrap(), EntityKind::Person);
        assert_eq!(registry.lookup("Person").unwrap(), EntityKind::Person);
        assert_eq!(
            registry
                .lookup("https://hqdmtop.github.io/hqdm#person")
                .unwrap(),
            EntityKind::Person
        );
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        let err = KindRegistry::global().lookup("not_a_real_kind").unwrap_err();
        assert_eq!(err, Error::UnknownKind("not_a_real_kind".to_owned()));
    }

    #[test]
    fn from_iri_requires_hqdm_namespace() {
        let registry = KindRegistry::global();
        assert_eq!(
            registry.from_iri(EntityKind::Participant.iri()).unwrap(),
            EntityKind::Participant
        );
        assert!(registry.from_iri("http://example.org/o#person").is_err());
        // Class names are not valid IRI local names.
        assert!(registry
            .from_iri("https://hqdmtop.github.io/hqdm#Person")
            .is_err());
    }

    #[test]
    fn every_kind_is_reachable_by_name() {
        let registry = KindRegistry::global();
        for kind in registry.iter() {
            assert_eq!(registry.lookup(kind.name()).unwrap(), kind);
            assert_eq!(registry.lookup(kind.class_name()).unwrap(), kind);
            assert_eq!(registry.from_iri(kind.iri()).unwrap(), kind);
        }
        assert_eq!(registry.len(), EntityKind::COUNT);
        assert!(!registry.is_empty());
    }

    #[test]
    fn every_kind_descends_from_thing() {
        let registry = KindRegistry::global();
        for kind in registry.iter().filter(|k| *k != EntityKind::Thing) {
            assert!(
                registry.ancestors(kind).contains(&EntityKind::Thing),
                "{kind} does not reach thing"
            );
        }
    }

    #[test]
    fn ancestors_are_nearest_first_and_unique() {
        let registry = KindRegistry::global();
        let ancestors = registry.ancestors(EntityKind::Person);
        assert_eq!(ancestors[0], EntityKind::BiologicalSystem);
        let unique: HashSet<_> = ancestors.iter().collect();
        assert_eq!(unique.len(), ancestors.len());
        assert!(ancestors.contains(&EntityKind::Party));
        assert!(ancestors.contains(&EntityKind::SpatioTemporalExtent));
    }

    #[test]
    fn subkind_is_reflexive_and_transitive() {
        let registry = KindRegistry::global();
        assert!(registry.is_subkind_of(EntityKind::Person, EntityKind::Person));
        assert!(registry.is_subkind_of(EntityKind::Person, EntityKind::Thing));
        assert!(!registry.is_subkind_of(EntityKind::Thing, EntityKind::Person));
        assert!(!registry.is_subkind_of(EntityKind::Person, EntityKind::Class));
    }
}
