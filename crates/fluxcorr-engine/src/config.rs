//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the builder-input for a [`Simulation`](crate::Simulation).
//! Its [`Default`] reproduces the reference shock-tube run: a 100-cell
//! pulse moving right across a 1000-cell domain for 250 steps.
//! [`validate()`](SimulationConfig::validate) checks every invariant up
//! front so the driver itself never has to.

use std::ops::Range;

use fluxcorr_grid::{GridError, UniformGrid};
use thiserror::Error;

/// Largest Courant number the transport scheme tolerates.
pub const COURANT_LIMIT: f64 = 1.0;

// ── PulseConfig ────────────────────────────────────────────────────

/// Rectangular initial pulse on an otherwise quiescent domain.
#[derive(Clone, Debug, PartialEq)]
pub struct PulseConfig {
    /// Cells covered by the pulse. Default: `50..150`.
    pub cells: Range<usize>,
    /// Density inside the pulse in kg m⁻³. Default: 25.
    pub density: f64,
    /// Velocity inside the pulse in m s⁻¹. Default: 10.
    pub velocity: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            cells: 50..150,
            density: 25.0,
            velocity: 10.0,
        }
    }
}

// ── CourantPolicy ──────────────────────────────────────────────────

/// What the driver does when a step's Courant number exceeds
/// [`COURANT_LIMIT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CourantPolicy {
    /// Step anyway, silently.
    Ignore,
    /// Step anyway and log a warning.
    #[default]
    Warn,
    /// Refuse the step and return
    /// [`StepError::CourantExceeded`](crate::StepError::CourantExceeded).
    Reject,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Grid parameters are invalid.
    #[error("grid: {0}")]
    Grid(#[from] GridError),
    /// `courant_max` is NaN, non-positive, or above [`COURANT_LIMIT`].
    #[error("courant_max must be in (0, {limit}], got {value}")]
    InvalidCourantBound {
        /// The invalid value.
        value: f64,
        /// The upper bound.
        limit: f64,
    },
    /// `characteristic_velocity` is NaN, infinite, zero, or negative.
    #[error("characteristic_velocity must be finite and positive, got {value}")]
    InvalidCharacteristicVelocity {
        /// The invalid value.
        value: f64,
    },
    /// The pulse range is reversed or extends past the grid.
    #[error("pulse cells {start}..{end} do not fit a grid of {cells} cells")]
    PulseOutOfRange {
        /// First pulse cell.
        start: usize,
        /// One past the last pulse cell.
        end: usize,
        /// Grid size.
        cells: usize,
    },
    /// A pulse value is non-finite, or the density is negative.
    #[error("invalid pulse {name}: {value}")]
    InvalidPulseValue {
        /// `"density"` or `"velocity"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `snapshot_interval` is zero.
    #[error("snapshot_interval must be at least 1")]
    SnapshotIntervalZero,
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of grid cells. Default: 1000. Minimum: 4.
    pub cell_count: usize,
    /// Cell width in metres. Default: 1.
    pub cell_width: f64,
    /// Steps taken by [`Simulation::run`](crate::Simulation::run). Default: 250.
    pub steps: u64,
    /// Courant number bound used to derive `dt`. Default: 0.4.
    pub courant_max: f64,
    /// Velocity scale used to derive `dt`, in m s⁻¹. Default: 10.
    pub characteristic_velocity: f64,
    /// Initial condition.
    pub pulse: PulseConfig,
    /// Runtime Courant diagnostic. Default: [`CourantPolicy::Warn`].
    pub courant_policy: CourantPolicy,
    /// Clamp negative densities to zero after each step. Default: true.
    pub clamp_negative_density: bool,
    /// Emit a snapshot every this many steps. Default: 1.
    ///
    /// The initial state and the final step are always emitted.
    pub snapshot_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_count: 1000,
            cell_width: 1.0,
            steps: 250,
            courant_max: 0.4,
            characteristic_velocity: 10.0,
            pulse: PulseConfig::default(),
            courant_policy: CourantPolicy::default(),
            clamp_negative_density: true,
            snapshot_interval: 1,
        }
    }
}

impl SimulationConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid shape.
        UniformGrid::new(self.cell_count, self.cell_width)?;
        // 2. Time step inputs.
        if !(self.courant_max > 0.0 && self.courant_max <= COURANT_LIMIT) {
            return Err(ConfigError::InvalidCourantBound {
                value: self.courant_max,
                limit: COURANT_LIMIT,
            });
        }
        let c = self.characteristic_velocity;
        if !c.is_finite() || c <= 0.0 {
            return Err(ConfigError::InvalidCharacteristicVelocity { value: c });
        }
        // 3. Initial condition.
        let Range { start, end } = self.pulse.cells;
        if start > end || end > self.cell_count {
            return Err(ConfigError::PulseOutOfRange {
                start,
                end,
                cells: self.cell_count,
            });
        }
        let density = self.pulse.density;
        if !density.is_finite() || density < 0.0 {
            return Err(ConfigError::InvalidPulseValue {
                name: "density",
                value: density,
            });
        }
        if !self.pulse.velocity.is_finite() {
            return Err(ConfigError::InvalidPulseValue {
                name: "velocity",
                value: self.pulse.velocity,
            });
        }
        // 4. Output cadence.
        if self.snapshot_interval == 0 {
            return Err(ConfigError::SnapshotIntervalZero);
        }
        Ok(())
    }

    /// Fixed time step: `courant_max * cell_width / characteristic_velocity`.
    pub fn time_step(&self) -> f64 {
        self.courant_max * self.cell_width / self.characteristic_velocity
    }
}
