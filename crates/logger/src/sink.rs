use std::io::{self, Write};

use crate::shared::DEFAULT_INDENT;

/// Line-oriented writer that prefixes each message with indentation.
///
/// Each call to [`write_line`](Self::write_line) renders `depth` copies of
/// the indent unit, the message, and a trailing newline into one buffer and
/// hands it to the writer with a single `write_all`, so lines from one sink
/// are never split across writes.
#[derive(Clone, Debug)]
pub struct IndentedSink<W> {
    writer: W,
    indent: &'static str,
    line: String,
}

impl<W> IndentedSink<W> {
    /// Creates a sink using the default two-space indent.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_indent(writer, DEFAULT_INDENT)
    }

    /// Creates a sink with an explicit indent unit.
    #[must_use]
    pub fn with_indent(writer: W, indent: &'static str) -> Self {
        Self {
            writer,
            indent,
            line: String::new(),
        }
    }

    /// Returns the indent unit.
    #[must_use]
    pub const fn indent(&self) -> &'static str {
        self.indent
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> IndentedSink<W>
where
    W: Write,
{
    /// Writes `message` indented by `depth` units, followed by a newline.
    pub fn write_line(&mut self, depth: usize, message: &str) -> io::Result<()> {
        self.line.clear();
        self.line
            .reserve(self.indent.len() * depth + message.len() + 1);
        for _ in 0..depth {
            self.line.push_str(self.indent);
        }
        self.line.push_str(message);
        self.line.push('\n');
        self.writer.write_all(self.line.as_bytes())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
