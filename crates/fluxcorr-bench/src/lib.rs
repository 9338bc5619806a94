//! Benchmark profiles for the fluxcorr workspace.
//!
//! - [`reference_profile`]: the default 1000-cell, 250-step run
//! - [`stress_profile`]: 100K cells, same pulse shape scaled up
//! - [`pulse_fields`]: a density/velocity pair for kernel-only benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fluxcorr_engine::{PulseConfig, SimulationConfig};
use fluxcorr_test_utils::rectangular_pulse;

/// The reference run: 1000 cells, 250 steps, pulse on cells `50..150`.
pub fn reference_profile() -> SimulationConfig {
    SimulationConfig::default()
}

/// 100K cells with the pulse scaled by the same factor, 50 steps.
pub fn stress_profile() -> SimulationConfig {
    SimulationConfig {
        cell_count: 100_000,
        steps: 50,
        pulse: PulseConfig {
            cells: 5_000..15_000,
            ..PulseConfig::default()
        },
        ..SimulationConfig::default()
    }
}

/// Density and velocity with a rectangular pulse on the middle tenth of
/// `cells` cells.
pub fn pulse_fields(cells: usize) -> (Vec<f64>, Vec<f64>) {
    let pulse = cells * 9 / 20..cells * 11 / 20;
    (
        rectangular_pulse(cells, pulse.clone(), 25.0),
        rectangular_pulse(cells, pulse, 10.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert!(reference_profile().validate().is_ok());
        assert!(stress_profile().validate().is_ok());
    }

    #[test]
    fn pulse_fields_cover_middle_tenth() {
        let (rho, v) = pulse_fields(1000);
        assert_eq!(rho.iter().filter(|&&x| x > 0.0).count(), 100);
        assert_eq!(rho[450], 25.0);
        assert_eq!(v[549], 10.0);
        assert_eq!(v[550], 0.0);
    }
}
