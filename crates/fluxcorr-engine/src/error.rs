//! Errors raised while stepping or running a simulation.

use fluxcorr_core::SinkError;
use fluxcorr_transport::TransportError;
use thiserror::Error;

/// A single step could not be taken. The simulation state is unchanged.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StepError {
    /// The transport kernel rejected its inputs.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
    /// The Courant number exceeded the limit under
    /// [`CourantPolicy::Reject`](crate::CourantPolicy::Reject).
    #[error("step {step}: Courant number {courant} at interface {interface} exceeds {limit}")]
    CourantExceeded {
        /// Index the rejected step would have had.
        step: u64,
        /// Largest `|epsilon|` found.
        courant: f64,
        /// Interface where it occurred.
        interface: usize,
        /// The configured limit.
        limit: f64,
    },
}

/// A run stopped early.
#[derive(Debug, Error)]
pub enum RunError {
    /// A step failed.
    #[error("step failed: {0}")]
    Step(#[from] StepError),
    /// The snapshot sink failed to accept or flush a snapshot.
    #[error("snapshot sink failed: {0}")]
    Sink(#[from] SinkError),
}
