//! crates/argdb/src/descriptor.rs
//! Typed descriptors registered against database keys.

use crate::{ArgError, ArgValue};

/// Describes the type, bounds, and default of a database key.
///
/// Components register descriptors for the keys they consume so raw
/// command-line text is converted and validated before it is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgDescriptor {
    /// Integer-valued key with optional inclusive bounds.
    Int {
        /// Human-readable description shown in usage output.
        help: String,
        /// Value reported when the key was never set.
        default: Option<i64>,
        /// Inclusive lower bound.
        min: Option<i64>,
        /// Inclusive upper bound.
        max: Option<i64>,
    },
    /// Free-form key holding a string or a bracketed list.
    Free {
        /// Human-readable description shown in usage output.
        help: String,
        /// Value reported when the key was never set.
        default: Option<ArgValue>,
    },
}

impl ArgDescriptor {
    /// Creates an integer descriptor bounded to `min..=max`.
    #[must_use]
    pub fn int(help: impl Into<String>, default: i64, min: i64, max: i64) -> Self {
        Self::Int {
            help: help.into(),
            default: Some(default),
            min: Some(min),
            max: Some(max),
        }
    }

    /// Creates a free-form descriptor without a default.
    #[must_use]
    pub fn free(help: impl Into<String>) -> Self {
        Self::Free {
            help: help.into(),
            default: None,
        }
    }

    /// Returns the help text.
    #[must_use]
    pub fn help(&self) -> &str {
        match self {
            Self::Int { help, .. } | Self::Free { help, .. } => help,
        }
    }

    /// Returns the value reported for keys that were never set.
    #[must_use]
    pub fn default_value(&self) -> Option<ArgValue> {
        match self {
            Self::Int { default, .. } => default.map(ArgValue::Int),
            Self::Free { default, .. } => default.clone(),
        }
    }

    /// Converts raw command-line text into a value of this type.
    ///
    /// Integer descriptors parse decimal text and enforce their bounds. Free
    /// descriptors keep the text verbatim, except that a bracketed
    /// `[a,b,c]` form becomes an [`ArgValue::List`].
    pub fn parse(&self, key: &str, raw: &str) -> Result<ArgValue, ArgError> {
        match self {
            Self::Int { .. } => {
                let value = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ArgError::NotAnInteger {
                        key: key.to_owned(),
                        value: ArgValue::from(raw),
                    })?;
                self.check_bounds(key, value)
            }
            Self::Free { .. } => Ok(parse_free(raw)),
        }
    }

    /// Validates an already-typed value, coercing numeric strings for
    /// integer descriptors.
    pub fn validate(&self, key: &str, value: ArgValue) -> Result<ArgValue, ArgError> {
        match (self, value) {
            (Self::Int { .. }, ArgValue::Int(value)) => self.check_bounds(key, value),
            (Self::Int { .. }, ArgValue::Str(raw)) => self.parse(key, &raw),
            (Self::Int { .. }, value) => Err(ArgError::NotAnInteger {
                key: key.to_owned(),
                value,
            }),
            (Self::Free { .. }, ArgValue::Str(raw)) => Ok(parse_free(&raw)),
            (Self::Free { .. }, value) => Ok(value),
        }
    }

    fn check_bounds(&self, key: &str, value: i64) -> Result<ArgValue, ArgError> {
        if let Self::Int { min, max, .. } = self {
            let lower = min.unwrap_or(i64::MIN);
            let upper = max.unwrap_or(i64::MAX);
            if value < lower || value > upper {
                return Err(ArgError::OutOfRange {
                    key: key.to_owned(),
                    value,
                    min: lower,
                    max: upper,
                });
            }
        }
        Ok(ArgValue::Int(value))
    }
}

fn parse_free(raw: &str) -> ArgValue {
    let trimmed = raw.trim();
    match trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(inner) => ArgValue::List(
            inner
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect(),
        ),
        None => ArgValue::Str(raw.to_owned()),
    }
}
