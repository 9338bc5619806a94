//! Simulation driver for 1-D flux-corrected transport.
//!
//! A [`Simulation`] advances density and momentum on a
//! [`UniformGrid`](fluxcorr_grid::UniformGrid) with the
//! [`fluxcorr_transport`] kernel, re-deriving velocity between steps, and
//! streams [`Snapshot`](fluxcorr_core::Snapshot)s to any
//! [`SnapshotSink`](fluxcorr_core::SnapshotSink).
//!
//! Configuration lives in [`SimulationConfig`]; its defaults reproduce
//! the reference shock-tube run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fields;
pub mod simulation;

pub use config::{ConfigError, CourantPolicy, PulseConfig, SimulationConfig, COURANT_LIMIT};
pub use error::{RunError, StepError};
pub use simulation::{RunSummary, Simulation, StepReport};
