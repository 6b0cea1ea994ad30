//! Validators, one module per artifact family.

pub mod artifacts;
pub mod registry;
pub mod triples;
