//! Entity identifiers and IRIs.
//!
//! An [`Identifier`] is an opaque canonical string: either a full IRI such as
//! `https://hqdmtop.github.io/hqdm#person` or a bare local id such as
//! `person1`. Identity is string equality. [`Iri`] adds the namespace/resource
//! split needed when minting identifiers from an [`IriBase`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::iris;

/// Characters that would break the `<...>` subject/object syntax of the
/// triple encoder.
const RESERVED: &[char] = &['<', '>', '"'];
/// Namespace separators recognised when splitting an IRI.
const SEPARATORS: &[char] = &['#', '/'];

/// An immutable, validated entity identifier.
///
/// Used both as entity identity and as the payload of reference-valued
/// predicates. Two identifiers are equal iff their canonical strings are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Identifier(String);

impl Identifier {
    /// Validates `value` and wraps it as an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `value` is empty, contains
    /// whitespace, or contains one of `<`, `>`, `"`.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate(&value)?;
        Ok(Self(value))
    }

    /// Wraps a string already known to be valid, such as a kind IRI.
    pub(crate) fn trusted(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits this identifier into an [`Iri`], if it has a `#` or `/`
    /// separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for opaque ids with no separator.
    pub fn to_iri(&self) -> Result<Iri> {
        Iri::parse(&self.0)
    }
}

fn validate(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_identifier(value, "identifier is empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(Error::invalid_identifier(
            value,
            "identifier contains whitespace",
        ));
    }
    if value.contains(RESERVED) {
        return Err(Error::invalid_identifier(
            value,
            "identifier contains a character reserved by the triple syntax",
        ));
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl From<Iri> for Identifier {
    fn from(iri: Iri) -> Self {
        // Both halves were validated when the Iri was built.
        Self(iri.to_string())
    }
}

impl From<&Iri> for Identifier {
    fn from(iri: &Iri) -> Self {
        Self(iri.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A namespace with a short prefix, e.g. `hqdm` → `https://hqdmtop.github.io/hqdm#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawIriBase")
)]
pub struct IriBase {
    prefix: String,
    namespace: String,
}

/// Unchecked wire form of an [`IriBase`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawIriBase {
    prefix: String,
    namespace: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIriBase> for IriBase {
    type Error = Error;

    fn try_from(raw: RawIriBase) -> Result<Self> {
        Self::new(raw.prefix, raw.namespace)
    }
}

impl IriBase {
    /// Creates a namespace base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `namespace` is not a valid
    /// identifier or does not end with `#` or `/`.
    pub fn new(prefix: impl Into<String>, namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        validate(&namespace)?;
        if !namespace.ends_with(SEPARATORS) {
            return Err(Error::invalid_identifier(
                namespace,
                "namespace must end with '#' or '/'",
            ));
        }
        Ok(Self {
            prefix: prefix.into(),
            namespace,
        })
    }

    /// The HQDM namespace.
    #[must_use]
    pub fn hqdm() -> Self {
        Self::fixed("hqdm", iris::HQDM)
    }

    /// The RDF namespace.
    #[must_use]
    pub fn rdf() -> Self {
        Self::fixed("rdf", iris::RDF)
    }

    /// The RDFS namespace.
    #[must_use]
    pub fn rdfs() -> Self {
        Self::fixed("rdfs", iris::RDFS)
    }

    fn fixed(prefix: &str, namespace: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            namespace: namespace.to_owned(),
        }
    }

    /// Returns the short prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the namespace IRI.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Builds the IRI for `resource` in this namespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `resource` is empty or not a
    /// valid identifier fragment.
    pub fn iri(&self, resource: &str) -> Result<Iri> {
        Iri::new(self, resource)
    }

    /// Returns the compact `prefix:resource` form.
    #[must_use]
    pub fn curie(&self, resource: &str) -> String {
        format!("{}:{}", self.prefix, resource)
    }
}

/// An IRI split into namespace (including the trailing `#` or `/`) and
/// resource.
///
/// Serializes as the full IRI string and is re-split on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Iri {
    namespace: String,
    resource: String,
}

impl Iri {
    /// Builds an IRI from a namespace base and a resource name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `resource` is empty, contains
    /// whitespace or reserved characters, or contains a `#`/`/` separator.
    pub fn new(base: &IriBase, resource: &str) -> Result<Self> {
        if resource.is_empty() {
            return Err(Error::invalid_identifier(resource, "IRI resource is empty"));
        }
        validate(resource)?;
        if resource.contains(SEPARATORS) {
            return Err(Error::invalid_identifier(
                resource,
                "IRI resource contains a namespace separator",
            ));
        }
        Ok(Self {
            namespace: base.namespace.clone(),
            resource: resource.to_owned(),
        })
    }

    /// Parses a full IRI, splitting at the last `#` or `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if there is no separator, nothing
    /// before it, or nothing after it.
    pub fn parse(value: &str) -> Result<Self> {
        validate(value)?;
        let Some(split) = value.rfind(SEPARATORS) else {
            return Err(Error::invalid_identifier(
                value,
                "IRI has no '#' or '/' separator",
            ));
        };
        if split == 0 {
            return Err(Error::invalid_identifier(value, "IRI namespace is empty"));
        }
        let (namespace, resource) = value.split_at(split + 1);
        if resource.is_empty() {
            return Err(Error::invalid_identifier(value, "IRI resource is empty"));
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            resource: resource.to_owned(),
        })
    }

    /// Returns the namespace part, including the trailing separator.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the resource (local name) part.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.namespace, self.resource)
    }
}

impl FromStr for Iri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_ids_are_accepted() {
        let id = Identifier::new("person1").unwrap();
        assert_eq!(id.as_str(), "person1");
        assert_eq!(id.to_string(), "person1");
    }

    #[test]
    fn empty_and_spaced_ids_are_rejected() {
        assert!(matches!(
            Identifier::new(""),
            Err(Error::InvalidIdentifier { .. })
        ));
        assert!(Identifier::new("a b").is_err());
        assert!(Identifier::new("a\tb").is_err());
        assert!(Identifier::new("<x>").is_err());
    }

    #[test]
    fn equality_is_string_equality() {
        let a: Identifier = "http://example.org/o#a".parse().unwrap();
        let b = Identifier::new(String::from("http://example.org/o#a")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn iri_splits_at_last_hash() {
        let iri = Iri::parse("http://example.org/o#person1").unwrap();
        assert_eq!(iri.namespace(), "http://example.org/o#");
        assert_eq!(iri.resource(), "person1");
        assert_eq!(iri.to_string(), "http://example.org/o#person1");
    }

    #[test]
    fn iri_splits_at_last_slash() {
        let iri = Iri::parse("https://example.org/things/widget").unwrap();
        assert_eq!(iri.namespace(), "https://example.org/things/");
        assert_eq!(iri.resource(), "widget");
    }

    #[test]
    fn iri_without_separator_is_rejected() {
        let err = Iri::parse("person1").unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
        assert!(Iri::parse("http://example.org/o#").is_err());
        assert!(Iri::parse("#x").is_err());
    }

    #[test]
    fn base_mints_iris() {
        let base = IriBase::new("ex", "http://example.org/o#").unwrap();
        let iri = base.iri("person1").unwrap();
        assert_eq!(Identifier::from(iri).as_str(), "http://example.org/o#person1");
        assert_eq!(base.curie("person1"), "ex:person1");
        assert!(base.iri("").is_err());
        assert!(base.iri("a/b").is_err());
    }

    #[test]
    fn base_requires_separator_suffix() {
        assert!(IriBase::new("ex", "http://example.org/o").is_err());
        assert_eq!(IriBase::hqdm().namespace(), iris::HQDM);
    }

    #[test]
    fn identifier_to_iri() {
        let id = Identifier::new("https://hqdmtop.github.io/hqdm#person").unwrap();
        assert_eq!(id.to_iri().unwrap().resource(), "person");
        assert!(Identifier::new("opaque").unwrap().to_iri().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_on_deserialize() {
        let id = Identifier::new("http://example.org/o#a").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"http://example.org/o#a\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<Identifier>("\"\"").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn iri_serde_uses_checked_string_form() {
        let iri = Iri::parse("http://example.org/o#a").unwrap();
        let json = serde_json::to_string(&iri).unwrap();
        assert_eq!(json, "\"http://example.org/o#a\"");
        let back: Iri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iri);
        assert_eq!(back.resource(), "a");

        assert!(serde_json::from_str::<Iri>("\"a b<>\"").is_err());
        assert!(serde_json::from_str::<Iri>("\"no-separator\"").is_err());
        assert!(serde_json::from_str::<Iri>(
            r#"{"namespace":"a b<>","resource":"x/y"}"#
        )
        .is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn iri_base_serde_validates_namespace() {
        let base = IriBase::new("ex", "http://example.org/o#").unwrap();
        let json = serde_json::to_string(&base).unwrap();
        let back: IriBase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, base);

        let missing_separator = r#"{"prefix":"ex","namespace":"http://example.org/o"}"#;
        assert!(serde_json::from_str::<IriBase>(missing_separator).is_err());
        let reserved = r#"{"prefix":"ex","namespace":"a b<>#"}"#;
        assert!(serde_json::from_str::<IriBase>(reserved).is_err());
    }
}
