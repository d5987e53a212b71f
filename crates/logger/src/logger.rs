//! crates/logger/src/logger.rs
//! Leveled, sectioned, indented debug emission.

use std::fmt::Display;
use std::io::{self, Write};

use argdb::{ArgValue, ConfigSource};

use crate::error::LoggerError;
use crate::fileset::{FileCollection, FileSetRef, render_file_set};
use crate::level::DebugLevel;
use crate::nesting::NestingGuard;
use crate::sections::DebugSections;
use crate::shared::{Settings, SharedConfig};
use crate::sink::IndentedSink;
use crate::summary::summarize_list;

/// Debug logger for build steps.
///
/// Every message goes to the optional log sink, which is an unfiltered
/// audit trail. The console sink only receives messages whose level is at
/// most the configured debug level and whose section passes the section
/// filter. Both sinks indent by the logger's current nesting depth, which
/// callers raise with [`nested`](Self::nested) as they recurse.
///
/// # Examples
///
/// ```
/// use argdb::ArgDatabase;
/// use logger::{Logger, SharedConfig};
///
/// let shared = SharedConfig::new();
/// let mut db = ArgDatabase::from_args(["-debugLevel=2"])?;
/// let mut logger = Logger::with_shared(&shared, &mut db, Some(Vec::new()), Vec::new());
///
/// logger.debug_print("configure", 1, None)?;
/// {
///     let mut step = logger.nested();
///     step.debug_print("compile main.c", 3, Some("compile"))?;
/// }
///
/// let (log, console) = logger.into_parts();
/// assert_eq!(String::from_utf8(log.unwrap())?, "configure\n  compile main.c\n");
/// assert_eq!(String::from_utf8(console)?, "configure\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Logger<L, C = io::Stdout> {
    debug_level: DebugLevel,
    debug_sections: DebugSections,
    debug_indent: &'static str,
    log: Option<IndentedSink<L>>,
    console: IndentedSink<C>,
    depth: usize,
}

impl<L> Logger<L> {
    /// Creates a logger that prints to standard output.
    ///
    /// The first logger in the process registers the debug keys with
    /// `source` and captures its level and sections in
    /// [`SharedConfig::global`]. Later loggers copy those captured values.
    pub fn new(source: &mut dyn ConfigSource, log: Option<L>) -> Self {
        Self::with_shared(SharedConfig::global(), source, log, io::stdout())
    }
}

impl Logger<io::Sink> {
    /// Creates a console-only logger.
    pub fn without_log(source: &mut dyn ConfigSource) -> Self {
        Self::new(source, None)
    }
}

impl<L, C> Logger<L, C> {
    /// Creates a logger against an explicit shared configuration and console.
    pub fn with_shared(
        shared: &SharedConfig,
        source: &mut dyn ConfigSource,
        log: Option<L>,
        console: C,
    ) -> Self {
        shared.register_types(source);
        let settings = shared.settings_or_init(source);
        Self::from_settings(settings, log, console)
    }

    /// Creates a logger from already-established settings.
    pub fn from_settings(settings: &Settings, log: Option<L>, console: C) -> Self {
        Self {
            debug_level: settings.level,
            debug_sections: settings.sections.clone(),
            debug_indent: settings.indent,
            log: log.map(|writer| IndentedSink::with_indent(writer, settings.indent)),
            console: IndentedSink::with_indent(console, settings.indent),
            depth: 0,
        }
    }

    /// Console verbosity threshold.
    #[must_use]
    pub const fn debug_level(&self) -> DebugLevel {
        self.debug_level
    }

    /// Console section filter.
    #[must_use]
    pub const fn debug_sections(&self) -> &DebugSections {
        &self.debug_sections
    }

    /// Indentation unit.
    #[must_use]
    pub const fn debug_indent(&self) -> &'static str {
        self.debug_indent
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enters one nesting level until the returned guard is dropped.
    pub fn nested(&mut self) -> NestingGuard<'_, L, C> {
        NestingGuard::new(self)
    }

    pub(crate) fn enter(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Borrows the log writer, if one was configured.
    #[must_use]
    pub fn log_ref(&self) -> Option<&L> {
        self.log.as_ref().map(IndentedSink::get_ref)
    }

    /// Borrows the console writer.
    #[must_use]
    pub const fn console_ref(&self) -> &C {
        self.console.get_ref()
    }

    /// Consumes the logger and returns the log and console writers.
    pub fn into_parts(self) -> (Option<L>, C) {
        (self.log.map(IndentedSink::into_inner), self.console.into_inner())
    }

    /// Reports whether a message at `level` in `section` reaches the console.
    ///
    /// The level gate applies first, then the section filter.
    #[must_use]
    pub fn is_enabled(&self, level: i64, section: Option<&str>) -> bool {
        self.debug_level.admits(level) && self.debug_sections.allows(section)
    }

    /// Renders `items`, summarizing long lists below level 5.
    #[must_use]
    pub fn debug_list_str<T: Display>(&self, items: &[T]) -> String {
        summarize_list(self.debug_level, items)
    }

    /// Renders a file collection, a plain list, or rejects anything else.
    pub fn debug_file_set_str<F: FileCollection>(
        &self,
        input: FileSetRef<'_, F>,
    ) -> Result<String, LoggerError> {
        match input {
            FileSetRef::Set(set) => Ok(render_file_set(self.debug_level, set)),
            FileSetRef::List(items) => Ok(self.debug_list_str(items)),
            FileSetRef::Other(value) => Err(LoggerError::InvalidInput(format!("{value:?}"))),
        }
    }
}

impl<L, C> Logger<L, C>
where
    L: Write,
    C: Write,
{
    /// Emits `message` at `level`, optionally tagged with `section`.
    ///
    /// `level` must be an integer; anything else fails with
    /// [`LoggerError::InvalidArgument`] before any output. The log sink
    /// always receives the message. The console receives it only when
    /// [`is_enabled`](Self::is_enabled) holds.
    pub fn debug_print(
        &mut self,
        message: impl AsRef<str>,
        level: impl Into<ArgValue>,
        section: Option<&str>,
    ) -> Result<(), LoggerError> {
        let level = match level.into() {
            ArgValue::Int(level) => level,
            value => return Err(LoggerError::InvalidArgument { value }),
        };
        let message = message.as_ref();

        if let Some(log) = self.log.as_mut() {
            log.write_line(self.depth, message)?;
        }

        let to_console = self.is_enabled(level, section);
        trace_emission(level, section, self.depth, to_console);
        if to_console {
            self.console.write_line(self.depth, message)?;
        }
        Ok(())
    }

    /// Flushes both sinks.
    pub fn flush(&mut self) -> Result<(), LoggerError> {
        if let Some(log) = self.log.as_mut() {
            log.flush()?;
        }
        self.console.flush()?;
        Ok(())
    }
}

#[cfg(feature = "tracing")]
fn trace_emission(level: i64, section: Option<&str>, depth: usize, console: bool) {
    tracing::trace!(
        target: crate::LOGGER_TARGET,
        level = level,
        section = ?section,
        depth = depth,
        console = console,
        "debug_print"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_emission(_level: i64, _section: Option<&str>, _depth: usize, _console: bool) {}
