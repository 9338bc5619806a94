//! Command-line front ends for fluxcorr.
//!
//! Two binaries share this library:
//!
//! - `fluxcorr` runs a simulation and writes its snapshot log
//!   ([`run::execute`]).
//! - `compare-logs` compares two snapshot logs within a tolerance
//!   ([`compare::execute`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod logging;
pub mod run;

pub use compare::CompareArgs;
pub use run::{CourantArg, RunArgs};
