//! Error types for line conversion.

use crate::duration::DurationError;
use std::io;
use thiserror::Error;

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line does not have the expected shape.
    #[error("line does not match the dbench result format")]
    NoMatch,

    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    /// Average duration
    #[error("could not parse average duration: {0}")]
    Average(#[source] DurationError),

    /// Sample count is not an integer in `0..=i32::MAX`.
    #[error("could not parse number of samples from {0:?}")]
    Samples(String),

    /// Standard deviation
    #[error("could not parse std dev: {0}")]
    StdDev(#[source] DurationError),

    /// Minimum duration
    #[error("could not parse min duration: {0}")]
    Min(#[source] DurationError),

    /// Maximum duration
    #[error("could not parse max duration: {0}")]
    Max(#[source] DurationError),
}

/// A single input line that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse {line:?}: {kind}")]
pub struct ParseError {
    /// The offending line, as read (lossily decoded if it was not UTF-8).
    pub line: String,
    /// Reason the line was rejected.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create a new ParseError for `line`.
    pub fn new(line: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line: line.into(),
            kind,
        }
    }
}

/// Errors that abort a whole conversion run.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Reading the input failed.
    #[error("could not read input: {0}")]
    Read(#[source] io::Error),

    /// Writing or flushing the output failed.
    #[error("could not write output line {line}: {source}")]
    Write {
        /// Number of the input line being written, or the count of lines
        /// read when the final flush fails (0 for empty input).
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;
