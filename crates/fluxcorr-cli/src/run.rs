//! The `fluxcorr` command: run a simulation and write its snapshot log.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use fluxcorr_core::SnapshotSink;
use fluxcorr_engine::{CourantPolicy, RunSummary, Simulation, SimulationConfig};
use fluxcorr_log::CsvSnapshotWriter;
use tracing::info;

/// Snapshot log written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "wave-output.csv";

/// Courant diagnostic choices on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CourantArg {
    /// Step anyway, silently.
    Ignore,
    /// Step anyway and log a warning.
    Warn,
    /// Stop with an error.
    Reject,
}

impl From<CourantArg> for CourantPolicy {
    fn from(arg: CourantArg) -> Self {
        match arg {
            CourantArg::Ignore => CourantPolicy::Ignore,
            CourantArg::Warn => CourantPolicy::Warn,
            CourantArg::Reject => CourantPolicy::Reject,
        }
    }
}

/// Simulation parameters. Anything left unset keeps the reference-run
/// default.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of grid cells [default: 1000]
    #[arg(long)]
    pub cells: Option<usize>,

    /// Cell width [m] [default: 1]
    #[arg(long)]
    pub cell_width: Option<f64>,

    /// Number of time steps [default: 250]
    #[arg(short = 'n', long)]
    pub steps: Option<u64>,

    /// Courant number bound used to derive dt [default: 0.4]
    #[arg(long)]
    pub courant_max: Option<f64>,

    /// Velocity scale used to derive dt [m/s] [default: 10]
    #[arg(long)]
    pub characteristic_velocity: Option<f64>,

    /// First pulse cell [default: 50]
    #[arg(long)]
    pub pulse_start: Option<usize>,

    /// One past the last pulse cell [default: 150]
    #[arg(long)]
    pub pulse_end: Option<usize>,

    /// Pulse density [kg/m^3] [default: 25]
    #[arg(long)]
    pub pulse_density: Option<f64>,

    /// Pulse velocity [m/s] [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub pulse_velocity: Option<f64>,

    /// What to do when a step's Courant number exceeds 1 [default: warn]
    #[arg(long, value_enum)]
    pub courant_policy: Option<CourantArg>,

    /// Keep negative densities instead of clamping them to zero
    #[arg(long)]
    pub no_clamp: bool,

    /// Write a snapshot every N steps [default: 1]
    #[arg(long)]
    pub snapshot_interval: Option<u64>,
}

impl Default for RunArgs {
    /// The same values the command line yields with no flags.
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            cells: None,
            cell_width: None,
            steps: None,
            courant_max: None,
            characteristic_velocity: None,
            pulse_start: None,
            pulse_end: None,
            pulse_density: None,
            pulse_velocity: None,
            courant_policy: None,
            no_clamp: false,
            snapshot_interval: None,
        }
    }
}

impl RunArgs {
    /// Overlay the given flags on [`SimulationConfig::default()`].
    pub fn to_config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        if let Some(cells) = self.cells {
            config.cell_count = cells;
        }
        if let Some(width) = self.cell_width {
            config.cell_width = width;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(c) = self.courant_max {
            config.courant_max = c;
        }
        if let Some(v) = self.characteristic_velocity {
            config.characteristic_velocity = v;
        }
        if let Some(start) = self.pulse_start {
            config.pulse.cells.start = start;
        }
        if let Some(end) = self.pulse_end {
            config.pulse.cells.end = end;
        }
        if let Some(density) = self.pulse_density {
            config.pulse.density = density;
        }
        if let Some(velocity) = self.pulse_velocity {
            config.pulse.velocity = velocity;
        }
        if let Some(policy) = self.courant_policy {
            config.courant_policy = policy.into();
        }
        if self.no_clamp {
            config.clamp_negative_density = false;
        }
        if let Some(interval) = self.snapshot_interval {
            config.snapshot_interval = interval;
        }
        config
    }
}

/// Run the simulation into any sink.
pub fn simulate(config: SimulationConfig, sink: &mut dyn SnapshotSink) -> Result<RunSummary> {
    let mut sim = Simulation::new(config).context("invalid simulation configuration")?;
    let summary = sim.run(sink).context("simulation failed")?;
    Ok(summary)
}

/// Execute the `fluxcorr` command.
///
/// The configuration is validated before the output file is created, so
/// a bad flag never truncates an existing log.
pub fn execute(args: &RunArgs) -> Result<RunSummary> {
    let config = args.to_config();
    config
        .validate()
        .context("invalid simulation configuration")?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to open {}", args.output.display()))?;
    let mut writer = CsvSnapshotWriter::new(BufWriter::new(file));
    let summary = simulate(config, &mut writer)
        .with_context(|| format!("while writing {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        records = writer.records_written(),
        snapshots = writer.snapshots_written(),
        "snapshot log written"
    );
    Ok(summary)
}
