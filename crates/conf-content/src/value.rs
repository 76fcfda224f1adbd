//! Raw value model
//!
//! A [`RawValue`] is what a configuration document can hold at option
//! position, as a tagged variant. Nothing downstream guesses at types by
//! shape: the normalizer in `conf-core` coerces raw values explicitly
//! against each option's declared semantic type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An untyped value as loaded from a configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RawValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    List(Vec<RawValue>),
}

impl RawValue {
    /// Human-readable name of the variant, for findings.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "boolean",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Str(_) => "string",
            RawValue::List(_) => "list",
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, RawValue::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a parsed TOML value. Inline tables have no place in the flat
    /// option model and yield `None`; datetimes degrade to strings.
    pub(crate) fn from_toml(value: &toml_edit::Value) -> Option<Self> {
        match value {
            toml_edit::Value::String(s) => Some(RawValue::Str(s.value().to_string())),
            toml_edit::Value::Integer(i) => Some(RawValue::Integer(*i.value())),
            toml_edit::Value::Float(f) => Some(RawValue::Float(*f.value())),
            toml_edit::Value::Boolean(b) => Some(RawValue::Bool(*b.value())),
            toml_edit::Value::Datetime(d) => Some(RawValue::Str(d.to_string())),
            toml_edit::Value::Array(arr) => {
                let items: Option<Vec<_>> = arr.iter().map(RawValue::from_toml).collect();
                items.map(RawValue::List)
            }
            toml_edit::Value::InlineTable(_) => None,
        }
    }

    /// Convert back into a TOML value for write-back.
    pub(crate) fn to_toml(&self) -> toml_edit::Value {
        match self {
            RawValue::Bool(b) => toml_edit::Value::from(*b),
            RawValue::Integer(i) => toml_edit::Value::from(*i),
            RawValue::Float(f) => toml_edit::Value::from(*f),
            RawValue::Str(s) => toml_edit::Value::from(s.as_str()),
            RawValue::List(items) => {
                let mut arr = toml_edit::Array::new();
                for item in items {
                    arr.push(item.to_toml());
                }
                toml_edit::Value::Array(arr)
            }
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Float(v) => write!(f, "{}", v),
            RawValue::Str(s) => write!(f, "{}", s),
            RawValue::List(items) => {
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
    fn test_type_name() {
        assert_eq!(RawValue::Bool(true).type_name(), "boolean");
        assert_eq!(RawValue::Integer(1).type_name(), "integer");
        assert_eq!(RawValue::Str("x".into()).type_name(), "string");
        assert_eq!(RawValue::List(vec![]).type_name(), "list");
    }

    #[test]
    fn test_is_scalar() {
        assert!(RawValue::Integer(1).is_scalar());
        assert!(!RawValue::List(vec![]).is_scalar());
    }

    #[test]
    fn test_display() {
        assert_eq!(RawValue::Str("src".into()).to_string(), "src");
        assert_eq!(
            RawValue::List(vec![RawValue::Str("a".into()), RawValue::Integer(2)]).to_string(),
            "[a, 2]"
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let value = RawValue::List(vec![
            RawValue::Str("build".into()),
            RawValue::Str("dist".into()),
        ]);
        let toml = value.to_toml();
        assert_eq!(RawValue::from_toml(&toml), Some(value));
    }

    #[test]
    fn test_inline_table_is_rejected() {
        let table = toml_edit::Value::InlineTable(toml_edit::InlineTable::new());
        assert_eq!(RawValue::from_toml(&table), None);
    }
}
