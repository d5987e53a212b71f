use std::io;

use argdb::ArgValue;

/// Error returned by [`Logger`](crate::Logger) operations.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The level passed to [`Logger::debug_print`](crate::Logger::debug_print)
    /// was not an integer. Raised before anything is written.
    #[error("debug level must be an integer, got {} '{value}'", .value.type_name())]
    InvalidArgument {
        /// The rejected level.
        value: ArgValue,
    },

    /// The file-set formatter received a value that is neither a file
    /// collection nor a plain list.
    #[error("invalid fileset {0}")]
    InvalidInput(String),

    /// Writing to the log or console sink failed.
    #[error("failed to write debug output: {0}")]
    Io(#[from] io::Error),
}
