//! crates/logger/src/tracing_bridge.rs
//! Bridge between the tracing crate and the debug level/section gate.
//!
//! [`DebugLayer`] lets build code use the standard `tracing` macros while
//! keeping the console behaviour of [`Logger`](crate::Logger): an event with
//! target `build::<section>` is treated as a message in that section, its
//! tracing level maps to a debug level, and it is printed only if the shared
//! settings admit it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logger::{Settings, init_tracing};
//!
//! init_tracing(Settings::default())?;
//! tracing::info!(target: "build::compile", "compiling main.c");
//! ```

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::shared::Settings;
use crate::sink::IndentedSink;

/// Target prefix recognised by [`DebugLayer`].
pub const BUILD_TARGET: &str = "build";

/// A tracing layer that prints `build::*` events through the debug gate.
pub struct DebugLayer<W> {
    settings: Settings,
    sink: Mutex<IndentedSink<W>>,
}

impl<W> DebugLayer<W> {
    /// Creates a layer writing admitted events to `writer`.
    #[must_use]
    pub fn new(settings: Settings, writer: W) -> Self {
        let sink = IndentedSink::with_indent(writer, settings.indent);
        Self {
            settings,
            sink: Mutex::new(sink),
        }
    }

    /// Consumes the layer and returns the writer.
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
            .into_inner()
    }

    /// Maps a tracing target to a section.
    ///
    /// Returns `None` for targets outside `build`, `Some(None)` for `build`
    /// itself, and `Some(Some(section))` for `build::section[::...]`.
    fn target_to_section(target: &str) -> Option<Option<&str>> {
        let rest = target.strip_prefix(BUILD_TARGET)?;
        if rest.is_empty() {
            return Some(None);
        }
        let rest = rest.strip_prefix("::")?;
        Some(rest.split("::").next().filter(|section| !section.is_empty()))
    }

    /// Map a tracing level to a debug level.
    const fn level_to_debug_level(level: &Level) -> i64 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S, W> Layer<S> for DebugLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(section) = Self::target_to_section(metadata.target()) else {
            return;
        };
        let level = Self::level_to_debug_level(metadata.level());
        if !(self.settings.level.admits(level) && self.settings.sections.allows(section)) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            let mut sink = self
                .sink
                .lock()
                .unwrap_or_else(|poison| poison.into_inner());
            // Layers cannot report failures; a broken console drops the line.
            let _ = sink.write_line(0, &message);
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`DebugLayer`] on standard output as the global subscriber.
pub fn init_tracing(settings: Settings) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(DebugLayer::new(settings, io::stdout()))
        .try_init()
}
