//! crates/logger/src/shared.rs
//! Process-wide debug settings shared by every logger.

use std::sync::OnceLock;

use argdb::{ArgDescriptor, ConfigSource};

use crate::level::DebugLevel;
use crate::sections::DebugSections;

/// Indentation unit written once per nesting level.
pub const DEFAULT_INDENT: &str = "  ";

/// Configuration key holding the debug level.
pub const DEBUG_LEVEL_KEY: &str = "debugLevel";

/// Configuration key holding the section filter.
pub const DEBUG_SECTIONS_KEY: &str = "debugSections";

/// Settings copied into every [`Logger`](crate::Logger).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Console verbosity threshold.
    pub level: DebugLevel,
    /// Section filter for console output.
    pub sections: DebugSections,
    /// Indentation unit.
    pub indent: &'static str,
}

impl Settings {
    /// Creates settings with the default indent.
    #[must_use]
    pub const fn new(level: DebugLevel, sections: DebugSections) -> Self {
        Self {
            level,
            sections,
            indent: DEFAULT_INDENT,
        }
    }

    /// Reads the level and section filter from `source`.
    ///
    /// A missing or unusable level falls back to [`DebugLevel::MIN`]; a
    /// missing section filter means no filter. The indent is never read from
    /// the source.
    #[must_use]
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let level = match source.lookup(DEBUG_LEVEL_KEY) {
            Some(value) => DebugLevel::from_value(&value).unwrap_or_else(|| {
                trace_unusable_level(&value);
                DebugLevel::default()
            }),
            None => DebugLevel::default(),
        };
        let sections = source
            .lookup(DEBUG_SECTIONS_KEY)
            .map(|value| DebugSections::from_value(&value))
            .unwrap_or_default();
        Self::new(level, sections)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DebugLevel::default(), DebugSections::new())
    }
}

/// One-time store for the debug settings.
///
/// The first logger constructed against a `SharedConfig` registers the debug
/// keys with its configuration source and captures the level and sections it
/// reports. Every later logger copies those captured values, whatever its own
/// source says. Embedders that need different values must [`preset`] them
/// before the first logger is built.
///
/// [`SharedConfig::global`] is the instance used by
/// [`Logger::new`](crate::Logger::new). Independent instances are useful when
/// a host runs several isolated builds in one process.
///
/// [`preset`]: SharedConfig::preset
#[derive(Debug, Default)]
pub struct SharedConfig {
    registered: OnceLock<()>,
    settings: OnceLock<Settings>,
}

impl SharedConfig {
    /// Creates an empty instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registered: OnceLock::new(),
            settings: OnceLock::new(),
        }
    }

    /// Returns the process-wide instance.
    pub fn global() -> &'static Self {
        static GLOBAL: SharedConfig = SharedConfig::new();
        &GLOBAL
    }

    /// Registers the `debugLevel` and `debugSections` descriptors with
    /// `source`, once per instance. Returns `true` when this call performed
    /// the registration.
    pub fn register_types(&self, source: &mut dyn ConfigSource) -> bool {
        let mut performed = false;
        self.registered.get_or_init(|| {
            source.register_type(
                DEBUG_LEVEL_KEY,
                ArgDescriptor::int(
                    "Integer 0 to 5, where a higher level means more detail",
                    i64::from(DebugLevel::MIN.get()),
                    i64::from(DebugLevel::MIN.get()),
                    i64::from(DebugLevel::MAX.get()),
                ),
            );
            source.register_type(
                DEBUG_SECTIONS_KEY,
                ArgDescriptor::free("Message types to print, e.g. [compile,link,bk,install]"),
            );
            performed = true;
        });
        performed
    }

    /// Returns the established settings, reading them from `source` if this
    /// is the first request.
    pub fn settings_or_init(&self, source: &dyn ConfigSource) -> &Settings {
        self.settings.get_or_init(|| Settings::from_source(source))
    }

    /// Establishes the settings without consulting a configuration source.
    ///
    /// Returns the rejected settings if they were already established.
    pub fn preset(&self, settings: Settings) -> Result<(), Settings> {
        self.settings.set(settings)
    }

    /// Returns the settings if they have been established.
    #[must_use]
    pub fn get(&self) -> Option<&Settings> {
        self.settings.get()
    }

    /// Reports whether the debug keys have been registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered.get().is_some()
    }
}

#[cfg(feature = "tracing")]
fn trace_unusable_level(value: &argdb::ArgValue) {
    tracing::warn!(
        target: crate::LOGGER_TARGET,
        value = %value,
        "ignoring unusable debug level"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_unusable_level(_value: &argdb::ArgValue) {}

#[cfg(test)]
mod tests {
    use super::*;
    use argdb::{ArgDatabase, ArgValue};

    #[test]
    fn from_source_defaults_when_keys_missing() {
        let settings = Settings::from_source(&ArgDatabase::new());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.indent, "  ");
    }

    #[test]
    fn from_source_ignores_unusable_level() {
        let mut db = ArgDatabase::new();
        db.set(DEBUG_LEVEL_KEY, "chatty").unwrap();
        assert_eq!(Settings::from_source(&db).level, DebugLevel::MIN);
    }

    #[test]
    fn register_types_runs_once() {
        let shared = SharedConfig::new();
        let mut db = ArgDatabase::new();
        assert!(!shared.is_registered());
        assert!(shared.register_types(&mut db));
        assert!(!shared.register_types(&mut db));
        assert!(shared.is_registered());
        assert_eq!(db.lookup(DEBUG_LEVEL_KEY), Some(ArgValue::Int(0)));
        assert!(db.descriptor(DEBUG_SECTIONS_KEY).is_some());
    }

    #[test]
    fn first_settings_win() {
        let shared = SharedConfig::new();
        let mut first = ArgDatabase::new();
        first.set(DEBUG_LEVEL_KEY, 3).unwrap();
        let mut second = ArgDatabase::new();
        second.set(DEBUG_LEVEL_KEY, 1).unwrap();

        assert_eq!(shared.settings_or_init(&first).level.get(), 3);
        assert_eq!(shared.settings_or_init(&second).level.get(), 3);
    }

    #[test]
    fn preset_fails_once_established() {
        let shared = SharedConfig::new();
        assert!(shared.get().is_none());
        let settings = Settings::new(DebugLevel::MAX, DebugSections::new());
        assert!(shared.preset(settings.clone()).is_ok());
        assert_eq!(shared.preset(Settings::default()), Err(Settings::default()));
        assert_eq!(shared.get(), Some(&settings));
    }
}
