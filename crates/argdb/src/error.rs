use crate::ArgValue;

/// Error returned when a value cannot be stored under a typed key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    /// An integer value fell outside the bounds of its descriptor.
    #[error("value {value} for '{key}' is outside the range {min}..={max}")]
    OutOfRange {
        /// Key being assigned.
        key: String,
        /// Rejected value.
        value: i64,
        /// Inclusive lower bound (`i64::MIN` when unbounded).
        min: i64,
        /// Inclusive upper bound (`i64::MAX` when unbounded).
        max: i64,
    },

    /// An integer descriptor received a value that is not an integer.
    #[error("value '{value}' for '{key}' is not an integer")]
    NotAnInteger {
        /// Key being assigned.
        key: String,
        /// Rejected value.
        value: ArgValue,
    },

    /// A command-line token did not have the `-key[=value]` shape.
    #[error("malformed argument token '{token}'")]
    Malformed {
        /// Offending token.
        token: String,
    },
}
