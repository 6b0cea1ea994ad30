//! Serializers for HQDM entities and the kind vocabulary.
//!
//! - **Triples** ([`triples`]): the per-entity predicate/object block with
//!   type-directed literal encoding, the primary output format
//! - **N-Triples** ([`ntriples`]): one escaped triple per line
//! - **Turtle** ([`turtle`]): prefixed documents for models and the vocabulary
//! - **JSON-LD** ([`jsonld`]): `@context`/`@graph` documents (feature `serializers`)

#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod ntriples;
pub mod triples;
pub mod turtle;
