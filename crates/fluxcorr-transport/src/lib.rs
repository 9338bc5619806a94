//! Flux-corrected transport (Boris & Book, 1976) for 1-D scalar fields.
//!
//! The kernel advances one scalar field by one time step given a
//! cell-centred velocity field:
//!
//! 1. [`coefficients`]: Courant number, diffusion and antidiffusion
//!    coefficients on every interface.
//! 2. A provisional transported-and-diffused field.
//! 3. Raw antidiffusive fluxes proportional to the provisional gradient.
//! 4. [`limiter`]: the monotonicity-preserving flux limiter.
//! 5. The provisional field corrected by the limited flux divergence.
//!
//! The first and last cells are pinned: they always keep their input
//! value.
//!
//! # Example
//!
//! ```
//! use fluxcorr_transport::fct_transport;
//!
//! let u = [0.0, 0.0, 1.0, 1.0, 0.0, 0.0];
//! let v = [0.0; 6];
//! let next = fct_transport(&u, &v, 0.1, 1.0).unwrap();
//! assert_eq!(next[0], 0.0);
//! assert_eq!(next[5], 0.0);
//! let interior: f64 = next[1..5].iter().sum();
//! assert!((interior - 2.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coefficients;
pub mod error;
pub mod fct;
pub mod limiter;
pub mod scratch;
pub mod stencil;

pub use error::TransportError;
pub use fct::{fct_transport, FctTransport, TransportStats};
pub use scratch::TransportScratch;
pub use stencil::Extended;
