//! Driver-level error types.
//!
//! Everything a lexer or parser reports is a diagnostic, not an `Err` — see
//! [`crate::diagnostic`]. `DriverError` covers only the failures that abort
//! the pipeline before any diagnostic could be produced: a bad invocation,
//! or the filesystem refusing to cooperate.

use std::path::PathBuf;

use thiserror::Error;

/// A failure that stops compilation before the lexer or parser ever runs.
#[derive(Debug, Error)]
pub enum DriverError {
    /// No source file was given on the command line.
    #[error("usage: pmmc <source-file>")]
    NoInputFile,

    /// The source file exists but could not be read.
    #[error("cannot read source file {0}: {1}")]
    SourceUnreadable(PathBuf, #[source] std::io::Error),

    /// An output sink (`tokenOutput.txt` or `output.txt`) could not be created.
    #[error("cannot create output file {0}: {1}")]
    SinkUnopenable(PathBuf, #[source] std::io::Error),
}

/// Result type alias for driver-level operations.
pub type DriverResult<T> = std::result::Result<T, DriverError>;
