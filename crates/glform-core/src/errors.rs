//! Error types for the glform converter.

use thiserror::Error;

/// Errors while reading a designer file.
///
/// Most malformed input is skipped rather than reported; only geometry that
/// cannot be read as numbers stops the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number at line {line}: {value:?}")]
    InvalidNumber { value: String, line: usize },

    #[error("Expected two numeric fields at line {line}, found {found}: {args:?}")]
    InvalidFieldCount {
        args: String,
        found: usize,
        line: usize,
    },
}

impl ParseError {
    /// Line number (1-based) the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidNumber { line, .. } | Self::InvalidFieldCount { line, .. } => *line,
        }
    }
}
