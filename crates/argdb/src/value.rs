//! crates/argdb/src/value.rs
//! Dynamic values stored in the argument database.

use std::fmt;

/// A value stored under a key in an [`ArgDatabase`](crate::ArgDatabase).
///
/// Values arrive from command-line tokens, from programmatic `set` calls, or
/// from registered descriptor defaults. Consumers inspect the variant they
/// expect and treat anything else as a type mismatch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgValue {
    /// Signed integer value.
    Int(i64),
    /// Free-form string value.
    Str(String),
    /// Ordered list of strings, written `[a,b,c]` on the command line.
    List(Vec<String>),
    /// Boolean switch, produced by a bare `-key` token.
    Bool(bool),
}

impl ArgValue {
    /// Returns the integer payload, if this is an [`ArgValue::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload, if this is an [`ArgValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the list payload, if this is an [`ArgValue::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Bool(value) => write!(f, "{value}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(value)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for ArgValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<&[&str]> for ArgValue {
    fn from(values: &[&str]) -> Self {
        Self::List(values.iter().map(|value| (*value).to_owned()).collect())
    }
}
