//! Error types for the transport kernel.

use thiserror::Error;

/// Precondition violations detected before a transport step runs.
///
/// The kernel never reads out of bounds: every input is checked up front
/// and rejected with one of these variants instead.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TransportError {
    /// The field has fewer cells than the stencil needs.
    #[error("transport needs at least {min} cells, got {cells}")]
    GridTooSmall {
        /// Cells supplied.
        cells: usize,
        /// Minimum supported.
        min: usize,
    },
    /// An input or output slice does not match the field length.
    #[error("{what} has {got} cells, expected {expected}")]
    LengthMismatch {
        /// Which slice was wrong.
        what: &'static str,
        /// Length of the transported field.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
    /// `dt` or `dx` is NaN, infinite, zero, or negative.
    #[error("invalid transport parameters: {name} must be finite and positive, got {value}")]
    InvalidStep {
        /// `"dt"` or `"dx"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A field or velocity value is NaN or infinite.
    #[error("non-finite {what} value at cell {index}")]
    NonFiniteInput {
        /// `"field"` or `"velocity"`.
        what: &'static str,
        /// First offending cell.
        index: usize,
    },
}
