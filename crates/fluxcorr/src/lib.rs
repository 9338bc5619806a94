//! fluxcorr: 1-D flux-corrected transport (Boris & Book, 1976).
//!
//! This is the top-level facade crate that re-exports the public API from
//! all fluxcorr sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use fluxcorr::prelude::*;
//!
//! let config = SimulationConfig {
//!     cell_count: 100,
//!     steps: 20,
//!     pulse: PulseConfig { cells: 10..30, ..PulseConfig::default() },
//!     ..SimulationConfig::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let mut writer = CsvSnapshotWriter::new(Vec::new());
//! let summary = sim.run(&mut writer).unwrap();
//! assert_eq!(summary.snapshots_written, 21);
//! assert!((summary.final_mass - summary.initial_mass).abs() < 1e-9);
//!
//! let log = writer.into_inner();
//! let same = compare_logs(log.as_slice(), log.as_slice(), DEFAULT_TOLERANCE).unwrap();
//! assert!(same.is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fluxcorr-core` | `Snapshot`, `SnapshotSink`, `SinkError` |
//! | [`grid`] | `fluxcorr-grid` | `UniformGrid` |
//! | [`transport`] | `fluxcorr-transport` | The FCT kernel, limiter and scratch buffers |
//! | [`engine`] | `fluxcorr-engine` | `Simulation` and its configuration |
//! | [`log`] | `fluxcorr-log` | CSV snapshot writer, reader and comparison |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Snapshots and the sink trait (`fluxcorr-core`).
pub use fluxcorr_core as types;

/// Uniform 1-D grids (`fluxcorr-grid`).
pub use fluxcorr_grid as grid;

/// The flux-corrected transport kernel (`fluxcorr-transport`).
///
/// [`transport::fct_transport`] for one-off steps,
/// [`transport::FctTransport`] to reuse scratch buffers.
pub use fluxcorr_transport as transport;

/// The simulation driver (`fluxcorr-engine`).
pub use fluxcorr_engine as engine;

/// CSV snapshot logs (`fluxcorr-log`).
pub use fluxcorr_log as log;

/// Common imports for typical fluxcorr usage.
pub mod prelude {
    // Core
    pub use fluxcorr_core::{SinkError, Snapshot, SnapshotSink};

    // Grid
    pub use fluxcorr_grid::UniformGrid;

    // Kernel
    pub use fluxcorr_transport::{fct_transport, FctTransport, TransportError, TransportStats};

    // Engine
    pub use fluxcorr_engine::{
        ConfigError, CourantPolicy, PulseConfig, RunError, RunSummary, Simulation,
        SimulationConfig, StepError, StepReport,
    };

    // Logs
    pub use fluxcorr_log::{
        compare_logs, CsvSnapshotReader, CsvSnapshotWriter, DivergenceReport, LogError,
        DEFAULT_TOLERANCE,
    };
}
