#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logger` is the build tool's debug output facility. Callers emit
//! messages tagged with a numeric level (0 to 5) and an optional section
//! name. Every message lands in an optional log sink, which is an
//! unfiltered audit trail; the console only shows messages that pass the
//! configured level and section filter. Output is indented by the caller's
//! nesting depth so recursive build steps read as a tree.
//!
//! # Design
//!
//! - [`SharedConfig`] captures the debug level and section filter once, from
//!   the first [`ConfigSource`](argdb::ConfigSource) a [`Logger`] is built
//!   against, and hands the same [`Settings`] to every later logger.
//! - [`Logger`] owns an optional log [`IndentedSink`] and a console sink
//!   (standard output by default) plus a nesting depth raised by
//!   [`Logger::nested`] guards.
//! - [`summarize_list`] and [`render_file_set`] produce the compact list
//!   and file-collection renderings used in debug messages.
//!
//! # Invariants
//!
//! - Settings captured by a [`SharedConfig`] never change afterwards.
//! - The log sink receives every message with a valid level, regardless of
//!   filters.
//! - A message reaches the console only if its level is at most the
//!   configured level and its section (if any) passes the filter.
//!
//! # Errors
//!
//! [`LoggerError::InvalidArgument`] rejects non-integer levels before
//! anything is written. [`LoggerError::InvalidInput`] rejects formatter
//! input that is neither a file collection nor a list. Sink failures surface
//! as [`LoggerError::Io`].
//!
//! # Examples
//!
//! ```
//! use argdb::ArgDatabase;
//! use logger::{FileSet, FileSetRef, Logger, SharedConfig};
//!
//! let shared = SharedConfig::new();
//! let mut db = ArgDatabase::from_args(["-debugLevel=1", "-debugSections=[compile]"])?;
//! let mut logger = Logger::with_shared(&shared, &mut db, None::<Vec<u8>>, Vec::new());
//!
//! let sources = FileSet::new(["a.c", "b.c", "c.c", "d.c"]).with_tag("sources");
//! let rendered = logger.debug_file_set_str(FileSetRef::from(&sources))?;
//! assert_eq!(rendered, "(sources)[a.c-<2>-d.c]");
//!
//! logger.debug_print(format!("compiling {rendered}"), 1, Some("compile"))?;
//! logger.debug_print("linking", 1, Some("link"))?;
//! assert_eq!(logger.console_ref().as_slice(), b"compiling (sources)[a.c-<2>-d.c]\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod fileset;
mod level;
mod logger;
mod nesting;
mod sections;
mod shared;
mod sink;
mod summary;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use error::LoggerError;
pub use fileset::{FileCollection, FileSet, FileSetRef, ProjectRoot, render_file_set};
pub use level::DebugLevel;
pub use logger::Logger;
pub use nesting::NestingGuard;
pub use sections::DebugSections;
pub use shared::{
    DEBUG_LEVEL_KEY, DEBUG_SECTIONS_KEY, DEFAULT_INDENT, Settings, SharedConfig,
};
pub use sink::IndentedSink;
pub use summary::{list_str, summarize_list};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{BUILD_TARGET, DebugLayer, init_tracing};

/// Target used for the logger's own tracing events.
#[cfg(feature = "tracing")]
const LOGGER_TARGET: &str = "logger::emit";
