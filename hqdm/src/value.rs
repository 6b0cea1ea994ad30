//! Predicate values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::identifier::Identifier;

/// A single value held under a predicate.
///
/// Values are stored in sets, so equality, ordering and hashing are total:
/// `Real` compares with [`f64::total_cmp`] and variants order as
/// `Reference < String < Integer < Real`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "lowercase"))]
pub enum Value {
    /// A reference to another entity (an object-valued predicate).
    Reference(Identifier),
    /// A string literal.
    String(String),
    /// An integer literal.
    Integer(i64),
    /// A floating-point literal.
    Real(f64),
}

impl Value {
    /// Returns the referenced identifier, if this is a reference.
    #[must_use]
    pub fn as_reference(&self) -> Option<&Identifier> {
        match self {
            Value::Reference(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for reference values.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Value::Reference(_))
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Reference(_) => 0,
            Value::String(_) => 1,
            Value::Integer(_) => 2,
            Value::Real(_) => 3,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Reference(a), Value::Reference(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Real(a), Value::Real(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Value::Reference(id) => id.hash(state),
            Value::String(s) => s.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Real(r) => r.to_bits().hash(state),
        }
    }
}

/// Textual form used by fuzzy search and by the literal encoder.
///
/// Integral finite reals keep a trailing `.0` (`2.0`, not `2`) so a real is
/// never mistaken for an integer in text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Reference(id) => f.write_str(id.as_str()),
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 => {
                write!(f, "{r:.1}")
            }
            Value::Real(r) => write!(f, "{r}"),
        }
    }
}

impl From<Identifier> for Value {
    fn from(id: Identifier) -> Self {
        Value::Reference(id)
    }
}

impl From<&Identifier> for Value {
    fn from(id: &Identifier) -> Self {
        Value::Reference(id.clone())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn display_forms() {
        let id = Identifier::new("http://example.org/o#a").unwrap();
        assert_eq!(Value::from(id).to_string(), "http://example.org/o#a");
        assert_eq!(Value::from("hello").to_string(), "hello");
        assert_eq!(Value::from(42_i64).to_string(), "42");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(3.25).to_string(), "3.25");
        assert_eq!(Value::from(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn reals_form_a_proper_set() {
        let mut set = BTreeSet::new();
        assert!(set.insert(Value::Real(1.5)));
        assert!(!set.insert(Value::Real(1.5)));
        assert!(set.insert(Value::Real(f64::NAN)));
        assert!(!set.insert(Value::Real(f64::NAN)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn variants_never_compare_equal() {
        assert_ne!(Value::from("42"), Value::from(42_i64));
        assert_ne!(Value::from(42_i64), Value::from(42.0));
        let id = Identifier::new("x").unwrap();
        assert_ne!(Value::from(&id), Value::from("x"));
        assert!(Value::from(&id) < Value::from("x"));
    }

    #[test]
    fn accessors() {
        let id = Identifier::new("x").unwrap();
        assert_eq!(Value::from(&id).as_reference(), Some(&id));
        assert!(Value::from(&id).is_reference());
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from(1_i32).as_str(), None);
    }
}
