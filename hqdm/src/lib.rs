//! HQDM (High Quality Data Model) entities as typed Rust data.
//!
//! The `hqdm` crate provides the closed HQDM kind vocabulary as an enum with
//! a parent table, a generic attribute-store [`Entity`] addressed by
//! [`Identifier`], a factory that creates entities by kind name, a
//! [`ModelBuilder`] for wiring relationships, and serializers for the
//! triple-block, N-Triples, Turtle and JSON-LD formats.
//!
//! # Entry Point
//!
//! ```
//! use hqdm::{create_entity, iris, Identifier, Value};
//!
//! let mut person = create_entity("person", Identifier::new("http://example.org/o#person1")?)?;
//! person.add_string(iris::ENTITY_NAME, "person1");
//! assert!(person.has_value(iris::ENTITY_NAME, &Value::from("person1")));
//! # Ok::<(), hqdm::Error>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! use hqdm::{serializer::triples::to_triples, EntityKind, Entity, Identifier};
//!
//! let e = Entity::new(Identifier::new("http://example.org/o#p")?, EntityKind::Person);
//! assert!(to_triples(&e).ends_with(".\n"));
//! # Ok::<(), hqdm::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod builder;
mod entity;
mod error;
mod factory;
mod identifier;
pub mod iris;
mod kinds;
mod registry;
pub mod serializer;
mod value;

pub use builder::{BuilderConfig, ModelBuilder};
pub use entity::{Entity, Triple};
pub use error::{Error, Result};
pub use factory::{create, create_entity, create_from_type_iri, create_with_kinds};
pub use identifier::{Identifier, Iri, IriBase};
pub use kinds::EntityKind;
pub use registry::KindRegistry;
pub use value::Value;
