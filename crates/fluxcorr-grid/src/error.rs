//! Error types for grid construction.

use thiserror::Error;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// Fewer cells than the transport stencil needs.
    #[error("grid needs at least {min} cells, got {got}")]
    TooFewCells {
        /// The requested cell count.
        got: usize,
        /// The minimum supported cell count.
        min: usize,
    },
    /// Cell width is NaN, infinite, zero, or negative.
    #[error("cell width must be finite and positive, got {value}")]
    InvalidCellWidth {
        /// The invalid value.
        value: f64,
    },
}
