//! crates/logger/src/sections.rs
//! Section filter applied to console output.

use argdb::ArgValue;

/// Names of the sections allowed to reach the console.
///
/// An empty filter lets every section through. Names keep their first-seen
/// order and duplicates are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugSections(Vec<String>);

impl DebugSections {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a filter from a configuration value.
    ///
    /// Lists are taken as-is. Strings may be bracketed (`[compile,link]`) and
    /// may separate names with commas or whitespace. Other values yield an
    /// empty filter.
    #[must_use]
    pub fn from_value(value: &ArgValue) -> Self {
        match value {
            ArgValue::List(names) => names.iter().map(String::as_str).collect(),
            ArgValue::Str(text) => {
                let trimmed = text.trim();
                let inner = trimmed
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .unwrap_or(trimmed);
                inner
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .collect()
            }
            ArgValue::Int(_) | ArgValue::Bool(_) => Self::new(),
        }
    }

    /// Adds a section name unless it is empty or already present.
    pub fn insert(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() && !self.contains(name) {
            self.0.push(name.to_owned());
        }
    }

    /// Reports whether `name` is configured.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|configured| configured == name)
    }

    /// Reports whether no sections are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of configured sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over configured section names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Section half of the console gate.
    ///
    /// Messages without a section, and every message when no filter is
    /// configured, pass.
    #[must_use]
    pub fn allows(&self, section: Option<&str>) -> bool {
        match section {
            None | Some("") => true,
            Some(name) => self.is_empty() || self.contains(name),
        }
    }
}

impl<'a> FromIterator<&'a str> for DebugSections {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut sections = Self::new();
        for name in iter {
            sections.insert(name);
        }
        sections
    }
}
