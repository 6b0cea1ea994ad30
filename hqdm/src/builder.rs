//! Model builder: accumulates entities and wires common HQDM relationships.

use std::collections::HashMap;

use tracing::debug;

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::factory::create;
use crate::identifier::{Identifier, IriBase};
use crate::iris;
use crate::registry::KindRegistry;
use crate::serializer::triples::model_to_triples;

/// Configuration for a [`ModelBuilder`].
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Namespace used to mint identifiers in [`ModelBuilder::create`].
    pub base: IriBase,
    /// When set, every entity created from a resource name also gets that
    /// name as `hqdm:data_EntityName`.
    pub name_entities: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            base: IriBase::new("ex", "http://example.org/hqdm#")
                .unwrap_or_else(|_| IriBase::hqdm()),
            name_entities: true,
        }
    }
}

/// Ordered collection of entities with chaining relationship helpers.
///
/// ```
/// use hqdm::ModelBuilder;
///
/// let mut model = ModelBuilder::default();
/// let person = model.create("person", "alice")?;
/// let class = model.create("class_of_person", "engineers")?;
/// model.member_of(&person, &class)?.entity_name(&class, "Engineers")?;
/// assert_eq!(model.len(), 2);
/// # Ok::<(), hqdm::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    config: BuilderConfig,
    entities: Vec<Entity>,
    index: HashMap<Identifier, usize>,
    // Set when `get_mut` hands out an entity; the index is rebuilt before
    // it is trusted again.
    stale: bool,
}

impl ModelBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            entities: Vec::new(),
            index: HashMap::new(),
            stale: false,
        }
    }

    /// Returns the builder configuration.
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Creates an entity whose identifier is `resource` in the configured
    /// namespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] for an unknown kind name and
    /// [`Error::InvalidIdentifier`] for an invalid resource name.
    pub fn create(&mut self, kind_name: &str, resource: &str) -> Result<Identifier> {
        let id = Identifier::from(self.config.base.iri(resource)?);
        let name = self.config.name_entities.then_some(resource);
        self.insert(kind_name, id, name)
    }

    /// Creates an entity with an explicit identifier.
    ///
    /// Creating an identifier the builder already holds returns it and adds
    /// no entity. If the requested kind differs, the held entity is tagged
    /// with it as an additional kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKind`] for an unknown kind name.
    pub fn create_with_id(&mut self, kind_name: &str, id: Identifier) -> Result<Identifier> {
        self.insert(kind_name, id, None)
    }

    fn insert(&mut self, kind_name: &str, id: Identifier, name: Option<&str>) -> Result<Identifier> {
        let kind = KindRegistry::global().lookup(kind_name)?;
        self.sync();
        if let Some(i) = self.position(&id) {
            if self.entities[i].add_kind(kind) {
                debug!(%id, kind = kind.name(), "entity already in model, added kind");
            } else {
                debug!(%id, "entity already in model");
            }
            return Ok(id);
        }
        let mut entity = create(kind, id.clone());
        if let Some(name) = name {
            entity.add_string(iris::ENTITY_NAME, name);
        }
        self.index.insert(id.clone(), self.entities.len());
        self.entities.push(entity);
        Ok(id)
    }

    fn position(&self, id: &Identifier) -> Option<usize> {
        if self.stale {
            return self.entities.iter().position(|e| e.id() == id);
        }
        self.index
            .get(id)
            .copied()
            .filter(|&i| self.entities.get(i).is_some_and(|e| e.id() == id))
    }

    fn sync(&mut self) {
        if !self.stale {
            return;
        }
        self.index.clear();
        for (i, entity) in self.entities.iter().enumerate() {
            self.index.entry(entity.id().clone()).or_insert(i);
        }
        self.stale = false;
    }

    fn entity_mut(&mut self, id: &Identifier) -> Result<&mut Entity> {
        self.sync();
        let i = self
            .position(id)
            .ok_or_else(|| Error::UnknownEntity(id.clone()))?;
        Ok(&mut self.entities[i])
    }

    /// Looks up an entity by identifier.
    #[must_use]
    pub fn get(&self, id: &Identifier) -> Option<&Entity> {
        self.position(id).map(|i| &self.entities[i])
    }

    /// Looks up an entity by identifier for mutation.
    ///
    /// Prefer [`rebind_identifier`](Self::rebind_identifier) over calling
    /// [`Entity::rebind_identifier`] through this handle; both keep lookups
    /// consistent, but the builder method also rejects taken identifiers.
    pub fn get_mut(&mut self, id: &Identifier) -> Option<&mut Entity> {
        self.sync();
        let i = self.position(id)?;
        self.stale = true;
        Some(&mut self.entities[i])
    }

    /// Moves the entity held under `old` to the identifier `new`, returning
    /// the previous identifier. References to `old` in other entities are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `old` is not held, and
    /// [`Error::DuplicateEntity`] if another entity already has `new`.
    pub fn rebind_identifier(&mut self, old: &Identifier, new: Identifier) -> Result<Identifier> {
        self.sync();
        let i = self
            .position(old)
            .ok_or_else(|| Error::UnknownEntity(old.clone()))?;
        if old == &new {
            return Ok(new);
        }
        if self.position(&new).is_some() {
            return Err(Error::DuplicateEntity(new));
        }
        self.index.remove(old);
        self.index.insert(new.clone(), i);
        debug!(%old, %new, "entity identifier rebound");
        Ok(self.entities[i].rebind_identifier(new))
    }

    /// Entities in creation order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no entity has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Consumes the builder, returning entities in creation order.
    #[must_use]
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    /// Serializes every entity with the triple encoder, in creation order.
    #[must_use]
    pub fn to_triples(&self) -> String {
        model_to_triples(&self.entities)
    }

    /// Adds `subject --predicate--> target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `subject` is not in this model.
    pub fn relate(
        &mut self,
        subject: &Identifier,
        predicate: &str,
        target: &Identifier,
    ) -> Result<&mut Self> {
        self.entity_mut(subject)?.add_reference(predicate, target.clone());
        debug!(%subject, predicate, %target, "relationship added");
        Ok(self)
    }

    /// `sub` has `sup` as a superclass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `sub` is not in this model.
    pub fn has_superclass(&mut self, sub: &Identifier, sup: &Identifier) -> Result<&mut Self> {
        self.relate(sub, iris::HAS_SUPERCLASS, sup)
    }

    /// `member` is a member of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `member` is not in this model.
    pub fn member_of(&mut self, member: &Identifier, class: &Identifier) -> Result<&mut Self> {
        self.relate(member, iris::MEMBER_OF, class)
    }

    /// `member` is a member of the kind `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `member` is not in this model.
    pub fn member_of_kind(&mut self, member: &Identifier, kind: &Identifier) -> Result<&mut Self> {
        self.relate(member, iris::MEMBER_OF_KIND, kind)
    }

    /// `part` is a part of `whole`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `part` is not in this model.
    pub fn part_of(&mut self, part: &Identifier, whole: &Identifier) -> Result<&mut Self> {
        self.relate(part, iris::PART_OF, whole)
    }

    /// `component` is a component of the system `whole`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `component` is not in this model.
    pub fn component_of(&mut self, component: &Identifier, whole: &Identifier) -> Result<&mut Self> {
        self.relate(component, iris::COMPONENT_OF, whole)
    }

    /// `state` is a temporal part of `whole`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `state` is not in this model.
    pub fn temporal_part_of(&mut self, state: &Identifier, whole: &Identifier) -> Result<&mut Self> {
        self.relate(state, iris::TEMPORAL_PART_OF, whole)
    }

    /// `participant` takes part in `activity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `participant` is not in this model.
    pub fn participant_in(
        &mut self,
        participant: &Identifier,
        activity: &Identifier,
    ) -> Result<&mut Self> {
        self.relate(participant, iris::PARTICIPANT_IN, activity)
    }

    /// `whole` consists of `part`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `whole` is not in this model.
    pub fn consists_of(&mut self, whole: &Identifier, part: &Identifier) -> Result<&mut Self> {
        self.relate(whole, iris::CONSISTS_OF, part)
    }

    /// Sets (adds) a human-readable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `subject` is not in this model.
    pub fn entity_name(&mut self, subject: &Identifier, name: &str) -> Result<&mut Self> {
        self.entity_mut(subject)?.add_string(iris::ENTITY_NAME, name);
        Ok(self)
    }
}
