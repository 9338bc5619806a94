//! Error types for snapshot logs.

use std::io;

use thiserror::Error;

/// Why a single line is not a valid snapshot record.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RecordError {
    /// The line does not split into exactly four comma-separated tokens.
    #[error("expected 4 comma-separated values, found {found}")]
    WrongTokenCount {
        /// Tokens found.
        found: usize,
    },
    /// A token is empty or whitespace.
    #[error("empty value in column {column}")]
    EmptyToken {
        /// 1-based column.
        column: usize,
    },
    /// A token does not parse as a floating-point number.
    #[error("column {column}: {token:?} is not a number")]
    InvalidNumber {
        /// 1-based column.
        column: usize,
        /// The offending token.
        token: String,
    },
}

/// Errors that can occur while writing, reading or comparing logs.
#[derive(Debug, Error)]
pub enum LogError {
    /// An I/O error occurred during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A line could not be parsed.
    #[error("{log}, line {line}: {error}")]
    Malformed {
        /// Name of the log the line came from.
        log: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        #[source]
        error: RecordError,
    },
    /// One log ended before the other.
    #[error("logs have different numbers of lines: {shorter} ends after {lines}")]
    LineCountMismatch {
        /// Name of the log that ended first.
        shorter: String,
        /// Lines it contained.
        lines: usize,
    },
    /// The comparison tolerance is NaN or negative.
    #[error("tolerance must be a non-negative number, got {value}")]
    InvalidTolerance {
        /// The rejected value.
        value: f64,
    },
}
