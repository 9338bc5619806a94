//! Core types and traits for the fluxcorr workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! abstractions shared between the simulation driver and its consumers:
//! the borrowed [`Snapshot`] view, the [`SnapshotSink`] trait, and the
//! sink error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod snapshot;

pub use error::SinkError;
pub use snapshot::{Snapshot, SnapshotSink};
