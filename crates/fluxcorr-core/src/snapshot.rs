//! Borrowed simulation snapshots and the sink trait that consumes them.

use crate::error::SinkError;

/// Read-only view of the simulation state at one instant.
///
/// All slices are cell-indexed and borrow from the driver, so a snapshot
/// is only valid until the next step. Sinks that need to retain data must
/// copy it.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    /// Number of completed steps (0 for the initial condition).
    pub step: u64,
    /// Simulation time in seconds.
    pub time: f64,
    /// Cell centre positions in metres.
    pub positions: &'a [f64],
    /// Cell velocities in m s⁻¹.
    pub velocity: &'a [f64],
    /// Cell densities in kg m⁻³.
    pub density: &'a [f64],
    /// Cell momenta in kg m⁻² s⁻¹.
    pub momentum: &'a [f64],
}

/// State of a single cell, as yielded by [`Snapshot::cells`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellState {
    /// Cell centre position.
    pub position: f64,
    /// Cell velocity.
    pub velocity: f64,
    /// Cell density.
    pub density: f64,
    /// Cell momentum.
    pub momentum: f64,
}

impl<'a> Snapshot<'a> {
    /// Number of cells in the snapshot.
    pub fn cell_count(&self) -> usize {
        self.positions.len()
    }

    /// Check that every per-cell slice has the same length as `positions`.
    pub fn check_shape(&self) -> Result<(), SinkError> {
        let n = self.positions.len();
        for (name, len) in [
            ("velocity", self.velocity.len()),
            ("density", self.density.len()),
            ("momentum", self.momentum.len()),
        ] {
            if len != n {
                return Err(SinkError::ShapeMismatch {
                    detail: format!("{name} has {len} cells, positions has {n}"),
                });
            }
        }
        Ok(())
    }

    /// Iterate over cells in grid order.
    ///
    /// Stops at the shortest slice; call [`check_shape`](Self::check_shape)
    /// first when the lengths are not known to agree.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + 'a {
        let Snapshot {
            positions,
            velocity,
            density,
            momentum,
            ..
        } = *self;
        positions
            .iter()
            .zip(velocity)
            .zip(density)
            .zip(momentum)
            .map(|(((&position, &velocity), &density), &momentum)| CellState {
                position,
                velocity,
                density,
                momentum,
            })
    }
}

/// A consumer of simulation snapshots.
///
/// The driver calls [`write_snapshot`](SnapshotSink::write_snapshot) once
/// per emitted snapshot and [`finish`](SnapshotSink::finish) once after the
/// last one. Implementations own whatever resource they write to and must
/// release it on drop, so that early exits never leak it.
pub trait SnapshotSink {
    /// Consume one snapshot.
    fn write_snapshot(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError>;

    /// Flush any buffered output. The default does nothing.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn write_snapshot(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        (**self).write_snapshot(snapshot)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        (**self).finish()
    }
}
