//! Canonical value model
//!
//! Every recognized option declares one of five semantic types. Raw document
//! values are coerced into [`CanonicalValue`] by the normalizer; nothing
//! downstream ever inspects a value by runtime shape-checking.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionType {
    /// Boolean flag
    Bool,
    /// Signed integer
    Integer,
    /// Free-form string
    Str,
    /// Unordered, deduplicated set of strings (canonically sorted)
    StringSet,
    /// Ordered list of strings
    StringList,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionType::Bool => "boolean",
            OptionType::Integer => "integer",
            OptionType::Str => "string",
            OptionType::StringSet => "string-set",
            OptionType::StringList => "string-list",
        };
        write!(f, "{}", name)
    }
}

/// A configuration value coerced into its declared semantic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalValue {
    Bool(bool),
    Integer(i64),
    Str(String),
    StringSet(BTreeSet<String>),
    StringList(Vec<String>),
}

impl CanonicalValue {
    /// The semantic type this value inhabits.
    pub fn value_type(&self) -> OptionType {
        match self {
            CanonicalValue::Bool(_) => OptionType::Bool,
            CanonicalValue::Integer(_) => OptionType::Integer,
            CanonicalValue::Str(_) => OptionType::Str,
            CanonicalValue::StringSet(_) => OptionType::StringSet,
            CanonicalValue::StringList(_) => OptionType::StringList,
        }
    }

    /// Build a string set from anything iterable.
    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CanonicalValue::StringSet(items.into_iter().map(Into::into).collect())
    }

    /// Build an ordered string list from anything iterable.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CanonicalValue::StringList(items.into_iter().map(Into::into).collect())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CanonicalValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CanonicalValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CanonicalValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            CanonicalValue::StringSet(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            CanonicalValue::StringList(l) => Some(l),
            _ => None,
        }
    }
}

impl From<bool> for CanonicalValue {
    fn from(b: bool) -> Self {
        CanonicalValue::Bool(b)
    }
}

impl From<i64> for CanonicalValue {
    fn from(i: i64) -> Self {
        CanonicalValue::Integer(i)
    }
}

impl From<&str> for CanonicalValue {
    fn from(s: &str) -> Self {
        CanonicalValue::Str(s.to_string())
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Bool(b) => write!(f, "{}", b),
            CanonicalValue::Integer(i) => write!(f, "{}", i),
            CanonicalValue::Str(s) => write!(f, "{}", s),
            CanonicalValue::StringSet(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            CanonicalValue::StringList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type() {
        assert_eq!(CanonicalValue::Bool(true).value_type(), OptionType::Bool);
        assert_eq!(CanonicalValue::Integer(88).value_type(), OptionType::Integer);
        assert_eq!(
            CanonicalValue::from("black").value_type(),
            OptionType::Str
        );
        assert_eq!(
            CanonicalValue::set(["a", "b"]).value_type(),
            OptionType::StringSet
        );
        assert_eq!(
            CanonicalValue::list(["a", "b"]).value_type(),
            OptionType::StringList
        );
    }

    #[test]
    fn test_set_is_sorted_and_deduplicated() {
        let value = CanonicalValue::set(["b", "a", "b"]);
        let set = value.as_set().unwrap();
        let items: Vec<_> = set.iter().cloned().collect();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_list_preserves_order() {
        let value = CanonicalValue::list(["tests", "src"]);
        assert_eq!(value.as_list().unwrap(), &["tests", "src"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CanonicalValue::Integer(100).to_string(), "100");
        assert_eq!(CanonicalValue::Bool(false).to_string(), "false");
        assert_eq!(CanonicalValue::set(["b", "a"]).to_string(), "{a, b}");
        assert_eq!(CanonicalValue::list(["b", "a"]).to_string(), "[b, a]");
    }

    #[test]
    fn test_accessors_reject_wrong_type() {
        assert_eq!(CanonicalValue::Integer(1).as_bool(), None);
        assert_eq!(CanonicalValue::Bool(true).as_integer(), None);
        assert_eq!(CanonicalValue::set(["a"]).as_list(), None);
    }
}
