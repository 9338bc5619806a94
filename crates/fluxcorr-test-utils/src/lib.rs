//! Test utilities and mock types for fluxcorr development.
//!
//! Provides field fixtures ([`rectangular_pulse`], [`padded_profile`]),
//! snapshot sinks that record into memory ([`MemorySink`]) or fail on
//! demand ([`FailingSink`]), and float assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod sink;

pub use fixtures::{padded_profile, rectangular_pulse, sawtooth};
pub use sink::{FailingSink, MemorySink, RecordedSnapshot};

/// Assert two slices are equal element-wise within `tol`.
///
/// Panics with the first offending index and both values.
#[track_caller]
pub fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {i}: {a} differs from {e} by more than {tol}"
        );
    }
}

/// Sum over every cell except the first and last.
pub fn interior_sum(values: &[f64]) -> f64 {
    match values.len() {
        0..=2 => 0.0,
        n => values[1..n - 1].iter().sum(),
    }
}
