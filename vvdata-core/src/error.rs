//! Error types for the verse data pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while classifying raw files or rebuilding the data set
#[derive(Error, Debug)]
pub enum VvError {
    /// The configured raw-input root does not exist
    #[error("raw input directory not found: {}", .0.display())]
    RawDirNotFound(PathBuf),

    /// No parser is registered under the configured name
    #[error("unknown parser '{0}' (expected one of: script, marker, command)")]
    UnknownParser(String),

    /// The external parser executable is missing
    #[error("parser command not found: {}", .0.display())]
    ParserCommandNotFound(PathBuf),

    /// The `command` parser was selected without naming an executable
    #[error("parser 'command' requires a command path")]
    ParserCommandUnset,

    /// A parser could not produce a record for a raw file
    #[error("parser '{parser}' failed on {}: {reason}", .path.display())]
    ParserFailed {
        /// Name of the parser that failed
        parser: String,
        /// The raw file being parsed
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A parsed record lacks one of the required language fields
    #[error("{record}: missing keys {missing:?}")]
    MissingFields {
        /// Output filename of the offending record
        record: String,
        /// Keys that were absent
        missing: Vec<&'static str>,
    },

    /// A parsed record carries a field of the wrong type
    #[error("{record}: field '{field}' must be a {expected}")]
    InvalidField {
        /// Output filename of the offending record
        record: String,
        /// Offending key
        field: String,
        /// Expected JSON type
        expected: &'static str,
    },

    /// Raw file content is not valid UTF-8
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    InvalidUtf8 {
        /// The raw file
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Filesystem failure
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A persisted JSON document could not be read or written
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid discovery pattern
    #[error("invalid file pattern: {0}")]
    Pattern(String),
}

impl VvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VvError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        VvError::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, VvError>;
