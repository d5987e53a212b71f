//! crates/argdb/src/database.rs
//! In-memory argument database.

use std::collections::BTreeMap;

use crate::{ArgDescriptor, ArgError, ArgValue, ConfigSource};

#[cfg(feature = "tracing")]
const ARGDB_TARGET: &str = "argdb";

/// In-memory [`ConfigSource`] populated from command-line tokens or direct
/// assignments.
///
/// Values assigned to a key with a registered descriptor are validated
/// immediately. Values assigned before their key is registered are stored as
/// given and re-validated when the descriptor arrives; values that fail that
/// check are discarded so lookups fall back to the descriptor default.
#[derive(Clone, Debug, Default)]
pub struct ArgDatabase {
    values: BTreeMap<String, ArgValue>,
    types: BTreeMap<String, ArgDescriptor>,
}

impl ArgDatabase {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a database from command-line tokens.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut db = Self::new();
        db.insert_args(args)?;
        Ok(db)
    }

    /// Stores `value` under `key`, validating it against the registered
    /// descriptor when one exists.
    pub fn set(&mut self, key: &str, value: impl Into<ArgValue>) -> Result<(), ArgError> {
        let value = match self.types.get(key) {
            Some(descriptor) => descriptor.validate(key, value.into())?,
            None => value.into(),
        };
        self.values.insert(key.to_owned(), value);
        Ok(())
    }

    /// Parses `-key=value` / `--key=value` tokens into the database.
    ///
    /// A bare `-key` stores [`ArgValue::Bool`] `true`. Tokens without a leading
    /// dash are positional and ignored. Processing stops at the first invalid
    /// token; earlier tokens remain applied.
    pub fn insert_args<I, S>(&mut self, args: I) -> Result<(), ArgError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in args {
            let Some((key, raw)) = parse_arg_token(token.as_ref())? else {
                continue;
            };
            let value = match (raw, self.types.get(key)) {
                (None, _) => ArgValue::Bool(true),
                (Some(raw), Some(descriptor)) => descriptor.parse(key, raw)?,
                (Some(raw), None) => ArgValue::from(raw),
            };
            self.values.insert(key.to_owned(), value);
        }
        Ok(())
    }

    /// Returns the descriptor registered for `key`.
    #[must_use]
    pub fn descriptor(&self, key: &str) -> Option<&ArgDescriptor> {
        self.types.get(key)
    }

    /// Reports whether an explicit value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Removes the explicit value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<ArgValue> {
        self.values.remove(key)
    }

    /// Iterates over keys with explicit values, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl ConfigSource for ArgDatabase {
    fn lookup(&self, key: &str) -> Option<ArgValue> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| self.types.get(key).and_then(ArgDescriptor::default_value))
    }

    fn register_type(&mut self, key: &str, descriptor: ArgDescriptor) {
        if let Some(existing) = self.values.remove(key) {
            match descriptor.validate(key, existing) {
                Ok(value) => {
                    self.values.insert(key.to_owned(), value);
                }
                Err(error) => trace_dropped_value(key, &error),
            }
        }
        self.types.insert(key.to_owned(), descriptor);
    }
}

/// Splits `-key=value` into `("key", Some("value"))` and `-key` into
/// `("key", None)`. Returns `None` for positional tokens.
fn parse_arg_token(token: &str) -> Result<Option<(&str, Option<&str>)>, ArgError> {
    let Some(body) = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))
    else {
        return Ok(None);
    };

    let (key, raw) = match body.split_once('=') {
        Some((key, raw)) => (key, Some(raw)),
        None => (body, None),
    };

    if key.is_empty() {
        return Err(ArgError::Malformed {
            token: token.to_owned(),
        });
    }
    Ok(Some((key, raw)))
}

#[cfg(feature = "tracing")]
fn trace_dropped_value(key: &str, error: &ArgError) {
    tracing::debug!(
        target: ARGDB_TARGET,
        key = %key,
        error = %error,
        "dropped value rejected by registered type"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_dropped_value(_key: &str, _error: &ArgError) {}
