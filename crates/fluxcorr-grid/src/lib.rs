//! Fixed uniform 1-D grids.
//!
//! A [`UniformGrid`] is the only spatial backend: `N` cells of equal width,
//! cell `i` centred at `i * dx`, with `N + 1` interfaces between and around
//! them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod uniform;

pub use error::GridError;
pub use uniform::UniformGrid;
