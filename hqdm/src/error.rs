//! Error type shared by identifier parsing, kind lookup and the model builder.

use crate::identifier::Identifier;

/// Result alias for fallible HQDM operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing identifiers, resolving kinds, or wiring
/// relationships in a [`ModelBuilder`](crate::ModelBuilder).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The identifier or IRI failed syntactic validation.
    #[error("invalid identifier {value:?}: {reason}")]
    InvalidIdentifier {
        /// The rejected input.
        value: String,
        /// Which rule the input broke.
        reason: &'static str,
    },

    /// The kind name or type IRI is not part of the HQDM vocabulary.
    #[error("unknown entity kind: {0:?}")]
    UnknownKind(String),

    /// A builder relationship named a subject the builder does not hold.
    #[error("no entity with identifier {0} in this model")]
    UnknownEntity(Identifier),

    /// An identifier is already held by another entity in the model.
    #[error("identifier {0} is already used in this model")]
    DuplicateEntity(Identifier),
}

impl Error {
    pub(crate) fn invalid_identifier(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
            reason,
        }
    }
}
