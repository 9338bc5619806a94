//! The time-stepping driver.
//!
//! [`Simulation`] owns the grid, the two conserved fields (density and
//! momentum) and the derived velocity. Each [`step()`](Simulation::step)
//! transports both conserved fields with the *current* velocity, swaps the
//! results in, and re-derives velocity. [`run()`](Simulation::run) repeats
//! that for the configured number of steps and streams snapshots to a
//! [`SnapshotSink`].
//!
//! # Ownership model
//!
//! The driver holds a second buffer for each conserved field. The kernel
//! writes into those buffers and they are swapped with the live fields
//! only after every check has passed, so a failed step leaves the state
//! exactly as it was.

use fluxcorr_core::{Snapshot, SnapshotSink};
use fluxcorr_grid::UniformGrid;
use fluxcorr_transport::FctTransport;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, CourantPolicy, SimulationConfig, COURANT_LIMIT};
use crate::error::{RunError, StepError};
use crate::fields::{clamp_negative, derive_velocity, integrate};

// ── StepReport ──────────────────────────────────────────────────

/// Diagnostics from one successful [`Simulation::step()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// Steps completed, including this one.
    pub step: u64,
    /// Simulation time after the step, in seconds.
    pub time: f64,
    /// Time step used, in seconds.
    pub dt: f64,
    /// Largest `|epsilon|` over all interfaces during the step.
    pub max_courant: f64,
    /// Cells whose density was clamped up to zero.
    pub clamped_cells: usize,
    /// `Σ density * dx` after the step.
    pub mass: f64,
    /// `Σ momentum * dx` after the step.
    pub momentum: f64,
}

// ── RunSummary ──────────────────────────────────────────────────

/// Outcome of a completed [`Simulation::run()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps taken during the run.
    pub steps: u64,
    /// Snapshots handed to the sink, including the initial one.
    pub snapshots_written: u64,
    /// Simulation time at the end of the run.
    pub final_time: f64,
    /// Mass before the first step.
    pub initial_mass: f64,
    /// Mass after the last step.
    pub final_mass: f64,
    /// Largest Courant number seen in any step.
    pub max_courant: f64,
    /// Total clamped cells over all steps.
    pub clamped_cells: usize,
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded 1-D flux-corrected transport simulation.
///
/// Created from a [`SimulationConfig`] via [`new()`](Simulation::new).
///
/// # Example
///
/// ```
/// use fluxcorr_engine::{Simulation, SimulationConfig, PulseConfig};
///
/// let config = SimulationConfig {
///     cell_count: 40,
///     steps: 5,
///     pulse: PulseConfig { cells: 5..15, ..PulseConfig::default() },
///     ..SimulationConfig::default()
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// let before = sim.mass();
/// let report = sim.step().unwrap();
/// assert_eq!(report.step, 1);
/// assert!((report.mass - before).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    grid: UniformGrid,
    kernel: FctTransport,
    dt: f64,
    time: f64,
    steps_taken: u64,
    density: Vec<f64>,
    momentum: Vec<f64>,
    velocity: Vec<f64>,
    density_next: Vec<f64>,
    momentum_next: Vec<f64>,
}

impl Simulation {
    /// Validate `config`, build the grid and set the initial pulse.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = UniformGrid::new(config.cell_count, config.cell_width)?;
        let n = grid.cell_count();

        let mut density = vec![0.0; n];
        let mut momentum = vec![0.0; n];
        let mut velocity = vec![0.0; n];
        let pulse = &config.pulse;
        for i in pulse.cells.clone() {
            density[i] = pulse.density;
            velocity[i] = pulse.velocity;
            momentum[i] = pulse.density * pulse.velocity;
        }

        Ok(Self {
            dt: config.time_step(),
            kernel: FctTransport::with_capacity(n),
            grid,
            time: 0.0,
            steps_taken: 0,
            density,
            momentum,
            velocity,
            density_next: vec![0.0; n],
            momentum_next: vec![0.0; n],
            config,
        })
    }

    /// Advance both conserved fields by one time step.
    ///
    /// # Errors
    ///
    /// [`StepError::Transport`] if the kernel rejects the current state
    /// (for example a non-finite velocity), or
    /// [`StepError::CourantExceeded`] under [`CourantPolicy::Reject`]. In
    /// both cases nothing is committed.
    pub fn step(&mut self) -> Result<StepReport, StepError> {
        let dx = self.grid.cell_width();
        let step = self.steps_taken + 1;

        let stats = self.kernel.transport_into(
            &self.density,
            &self.velocity,
            self.dt,
            dx,
            &mut self.density_next,
        )?;
        if stats.max_courant > COURANT_LIMIT {
            match self.config.courant_policy {
                CourantPolicy::Ignore => {}
                CourantPolicy::Warn => warn!(
                    step,
                    courant = stats.max_courant,
                    interface = stats.max_courant_interface,
                    "Courant number exceeds stability limit"
                ),
                CourantPolicy::Reject => {
                    return Err(StepError::CourantExceeded {
                        step,
                        courant: stats.max_courant,
                        interface: stats.max_courant_interface,
                        limit: COURANT_LIMIT,
                    })
                }
            }
        }
        self.kernel.transport_into(
            &self.momentum,
            &self.velocity,
            self.dt,
            dx,
            &mut self.momentum_next,
        )?;

        std::mem::swap(&mut self.density, &mut self.density_next);
        std::mem::swap(&mut self.momentum, &mut self.momentum_next);

        let clamped_cells = if self.config.clamp_negative_density {
            clamp_negative(&mut self.density)
        } else {
            0
        };
        if clamped_cells > 0 {
            warn!(step, clamped_cells, "clamped negative densities to zero");
        }

        derive_velocity(&self.momentum, &self.density, &mut self.velocity);
        self.time += self.dt;
        self.steps_taken = step;

        let report = StepReport {
            step,
            time: self.time,
            dt: self.dt,
            max_courant: stats.max_courant,
            clamped_cells,
            mass: self.mass(),
            momentum: self.total_momentum(),
        };
        debug!(
            step,
            time = report.time,
            courant = report.max_courant,
            mass = report.mass,
            "step complete"
        );
        Ok(report)
    }

    /// Take the configured number of steps, streaming snapshots to `sink`.
    ///
    /// The current state is emitted first, then the state after every
    /// `snapshot_interval`-th step and after the last step. `sink.finish()`
    /// is called once on success; on error the run stops immediately.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<RunSummary, RunError> {
        let steps = self.config.steps;
        let interval = self.config.snapshot_interval.max(1);
        let final_step = self.steps_taken + steps;
        let initial_mass = self.mass();
        info!(
            cells = self.grid.cell_count(),
            length = self.grid.length(),
            dt = self.dt,
            steps,
            mass = initial_mass,
            "starting run"
        );

        sink.write_snapshot(&self.snapshot())?;
        let mut snapshots_written = 1;
        let mut max_courant = 0.0_f64;
        let mut clamped_cells = 0;
        while self.steps_taken < final_step {
            let report = self.step()?;
            max_courant = max_courant.max(report.max_courant);
            clamped_cells += report.clamped_cells;
            if report.step % interval == 0 || report.step == final_step {
                sink.write_snapshot(&self.snapshot())?;
                snapshots_written += 1;
            }
        }
        sink.finish()?;

        let summary = RunSummary {
            steps,
            snapshots_written,
            final_time: self.time,
            initial_mass,
            final_mass: self.mass(),
            max_courant,
            clamped_cells,
        };
        info!(
            steps,
            snapshots = snapshots_written,
            time = summary.final_time,
            mass = summary.final_mass,
            "run complete"
        );
        Ok(summary)
    }

    /// Borrow the current state as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            step: self.steps_taken,
            time: self.time,
            positions: self.grid.centers(),
            velocity: &self.velocity,
            density: &self.density,
            momentum: &self.momentum,
        }
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The spatial grid.
    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    /// Fixed time step in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Current simulation time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Steps completed so far.
    pub fn step_count(&self) -> u64 {
        self.steps_taken
    }

    /// Current density per cell.
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Current momentum per cell.
    pub fn momentum(&self) -> &[f64] {
        &self.momentum
    }

    /// Current velocity per cell.
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// `Σ density * dx`.
    pub fn mass(&self) -> f64 {
        integrate(&self.density, self.grid.cell_width())
    }

    /// `Σ momentum * dx`.
    pub fn total_momentum(&self) -> f64 {
        integrate(&self.momentum, self.grid.cell_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PulseConfig;
    use fluxcorr_test_utils::{FailingSink, MemorySink};

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            cell_count: 40,
            steps: 10,
            pulse: PulseConfig {
                cells: 5..15,
                ..PulseConfig::default()
            },
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn initial_condition_is_a_rectangular_pulse() {
        let sim = Simulation::new(small_config()).unwrap();
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.time(), 0.0);
        for i in 0..40 {
            let inside = (5..15).contains(&i);
            assert_eq!(sim.density()[i], if inside { 25.0 } else { 0.0 });
            assert_eq!(sim.velocity()[i], if inside { 10.0 } else { 0.0 });
            assert_eq!(sim.momentum()[i], if inside { 250.0 } else { 0.0 });
        }
        assert_eq!(sim.mass(), 250.0);
        assert!((sim.dt() - 0.04).abs() < 1e-15);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = SimulationConfig {
            snapshot_interval: 0,
            ..small_config()
        };
        assert_eq!(
            Simulation::new(cfg).unwrap_err(),
            ConfigError::SnapshotIntervalZero
        );
    }

    #[test]
    fn step_advances_time_and_keeps_boundaries() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let report = sim.step().unwrap();
        assert_eq!(report.step, 1);
        assert!((report.time - 0.04).abs() < 1e-15);
        assert!((report.max_courant - 0.4).abs() < 1e-12);
        assert_eq!(report.clamped_cells, 0);
        assert_eq!(sim.density()[0], 0.0);
        assert_eq!(sim.density()[39], 0.0);
    }

    #[test]
    fn velocity_follows_momentum_over_density() {
        let mut sim = Simulation::new(small_config()).unwrap();
        for _ in 0..3 {
            sim.step().unwrap();
        }
        for i in 0..40 {
            let rho = sim.density()[i];
            let v = sim.velocity()[i];
            if rho > 0.0 {
                assert!((v - sim.momentum()[i] / rho).abs() < 1e-12);
            } else {
                assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn mass_and_momentum_are_conserved_per_step() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let mass = sim.mass();
        let momentum = sim.total_momentum();
        for _ in 0..10 {
            let report = sim.step().unwrap();
            assert!((report.mass - mass).abs() < 1e-9);
            assert!((report.momentum - momentum).abs() < 1e-8);
        }
    }

    fn fast_pulse(policy: CourantPolicy) -> SimulationConfig {
        SimulationConfig {
            courant_max: 1.0,
            courant_policy: policy,
            pulse: PulseConfig {
                cells: 5..15,
                density: 1.0,
                velocity: 30.0,
            },
            ..small_config()
        }
    }

    #[test]
    fn reject_policy_refuses_step_and_keeps_state() {
        let mut sim = Simulation::new(fast_pulse(CourantPolicy::Reject)).unwrap();
        let density = sim.density().to_vec();
        let err = sim.step().unwrap_err();
        match err {
            StepError::CourantExceeded {
                step,
                courant,
                limit,
                ..
            } => {
                assert_eq!(step, 1);
                assert!((courant - 3.0).abs() < 1e-12);
                assert_eq!(limit, COURANT_LIMIT);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.time(), 0.0);
        assert_eq!(sim.density(), density.as_slice());
    }

    #[test]
    fn warn_and_ignore_policies_take_the_step() {
        for policy in [CourantPolicy::Warn, CourantPolicy::Ignore] {
            let mut sim = Simulation::new(fast_pulse(policy)).unwrap();
            let report = sim.step().unwrap();
            assert!(report.max_courant > COURANT_LIMIT);
            assert_eq!(sim.step_count(), 1);
        }
    }

    #[test]
    fn clamping_keeps_density_nonnegative() {
        let mut sim = Simulation::new(fast_pulse(CourantPolicy::Ignore)).unwrap();
        let mut clamped = 0;
        for _ in 0..5 {
            clamped += sim.step().unwrap().clamped_cells;
            assert!(sim.density().iter().all(|&rho| rho >= 0.0));
        }
        assert!(clamped > 0);
    }

    #[test]
    fn unclamped_density_may_go_negative() {
        let mut sim = Simulation::new(SimulationConfig {
            clamp_negative_density: false,
            ..fast_pulse(CourantPolicy::Ignore)
        })
        .unwrap();
        let report = sim.step().unwrap();
        assert_eq!(report.clamped_cells, 0);
        assert!(sim.density().iter().any(|&rho| rho < 0.0));
    }

    #[test]
    fn steps_are_counted_from_zero() {
        let mut sim = Simulation::new(small_config()).unwrap();
        for _ in 0..5 {
            sim.step().unwrap();
        }
        assert_eq!(sim.step_count(), 5);
        assert!((sim.time() - 5.0 * sim.dt()).abs() < 1e-12);
    }

    #[test]
    fn run_emits_initial_and_every_step() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let mut sink = MemorySink::new();
        let summary = sim.run(&mut sink).unwrap();
        assert_eq!(summary.steps, 10);
        assert_eq!(summary.snapshots_written, 11);
        assert_eq!(sink.snapshots().len(), 11);
        assert!(sink.is_finished());
        let steps: Vec<u64> = sink.snapshots().iter().map(|s| s.step).collect();
        assert_eq!(steps, (0..=10).collect::<Vec<_>>());
        assert_eq!(sink.snapshots()[0].time, 0.0);
        assert!((summary.final_time - 0.4).abs() < 1e-12);
        assert!((summary.final_mass - summary.initial_mass).abs() < 1e-9);
    }

    #[test]
    fn run_respects_snapshot_interval_and_final_step() {
        let mut sim = Simulation::new(SimulationConfig {
            snapshot_interval: 3,
            ..small_config()
        })
        .unwrap();
        let mut sink = MemorySink::new();
        let summary = sim.run(&mut sink).unwrap();
        let steps: Vec<u64> = sink.snapshots().iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![0, 3, 6, 9, 10]);
        assert_eq!(summary.snapshots_written, 5);
    }

    #[test]
    fn sink_failure_aborts_run() {
        let mut sim = Simulation::new(small_config()).unwrap();
        let mut sink = FailingSink::new(3);
        let err = sim.run(&mut sink).unwrap_err();
        assert!(matches!(err, RunError::Sink(_)));
        assert_eq!(sink.calls(), 4);
        // Initial snapshot plus steps 1 and 2 succeeded; step 3's write failed.
        assert_eq!(sim.step_count(), 3);
    }

    #[test]
    fn snapshot_borrows_current_state() {
        let sim = Simulation::new(small_config()).unwrap();
        let snap = sim.snapshot();
        assert_eq!(snap.cell_count(), 40);
        assert!(snap.check_shape().is_ok());
        assert_eq!(snap.positions[7], 7.0);
        assert_eq!(snap.density[7], 25.0);
    }
}
