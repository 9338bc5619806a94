//! Error types shared across the workspace.

use std::io;

use thiserror::Error;

/// Errors raised by a [`SnapshotSink`](crate::SnapshotSink).
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying stream could not be written or flushed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The snapshot's per-cell slices disagree in length.
    #[error("snapshot slices have mismatched lengths: {detail}")]
    ShapeMismatch {
        /// Which slices disagreed.
        detail: String,
    },
}
