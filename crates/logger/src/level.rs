//! crates/logger/src/level.rs
//! Bounded debug verbosity level.

use std::fmt;

use argdb::ArgValue;

/// Configured debug verbosity, from 0 (quiet) to 5 (everything).
///
/// A message reaches the console when its level is at most the configured
/// level. Level 5 additionally disables list summarization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DebugLevel(u8);

impl DebugLevel {
    /// Lowest level; only level-0 messages reach the console.
    pub const MIN: Self = Self(0);
    /// Highest level.
    pub const MAX: Self = Self(5);

    /// Creates a level, returning `None` above [`DebugLevel::MAX`].
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Reads a level from a configuration value.
    ///
    /// Integers and numeric strings within range are accepted.
    #[must_use]
    pub fn from_value(value: &ArgValue) -> Option<Self> {
        let raw = match value {
            ArgValue::Int(level) => *level,
            ArgValue::Str(text) => text.trim().parse().ok()?,
            ArgValue::List(_) | ArgValue::Bool(_) => return None,
        };
        u8::try_from(raw).ok().and_then(Self::new)
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Reports whether a message at `level` passes this threshold.
    #[must_use]
    pub fn admits(self, level: i64) -> bool {
        i64::from(self.0) >= level
    }
}

impl TryFrom<u8> for DebugLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| format!("debug level {level} exceeds {}", Self::MAX))
    }
}

impl From<DebugLevel> for u8 {
    fn from(level: DebugLevel) -> Self {
        level.0
    }
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
