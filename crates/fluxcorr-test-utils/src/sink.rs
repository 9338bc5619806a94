//! Snapshot sinks for tests.

use std::io;

use fluxcorr_core::{SinkError, Snapshot, SnapshotSink};

/// Owned copy of a [`Snapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSnapshot {
    pub step: u64,
    pub time: f64,
    pub positions: Vec<f64>,
    pub velocity: Vec<f64>,
    pub density: Vec<f64>,
    pub momentum: Vec<f64>,
}

impl RecordedSnapshot {
    /// Copy a borrowed snapshot.
    pub fn capture(snapshot: &Snapshot<'_>) -> Self {
        Self {
            step: snapshot.step,
            time: snapshot.time,
            positions: snapshot.positions.to_vec(),
            velocity: snapshot.velocity.to_vec(),
            density: snapshot.density.to_vec(),
            momentum: snapshot.momentum.to_vec(),
        }
    }

    /// Σ density over all cells, times `dx`.
    pub fn mass(&self, dx: f64) -> f64 {
        self.density.iter().sum::<f64>() * dx
    }
}

/// Records every snapshot in memory.
///
/// Inspect with [`snapshots`](MemorySink::snapshots) after the run.
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: Vec<RecordedSnapshot>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded snapshots in arrival order.
    pub fn snapshots(&self) -> &[RecordedSnapshot] {
        &self.snapshots
    }

    /// Whether `finish()` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The most recent snapshot, if any.
    pub fn last(&self) -> Option<&RecordedSnapshot> {
        self.snapshots.last()
    }
}

impl SnapshotSink for MemorySink {
    fn write_snapshot(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        snapshot.check_shape()?;
        self.snapshots.push(RecordedSnapshot::capture(snapshot));
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }
}

/// Accepts a fixed number of snapshots, then fails with an I/O error.
///
/// Useful for testing that sink failures abort a run.
#[derive(Debug)]
pub struct FailingSink {
    succeed_count: usize,
    calls: usize,
}

impl FailingSink {
    /// Create a sink that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }

    /// How many times `write_snapshot()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl SnapshotSink for FailingSink {
    fn write_snapshot(&mut self, _snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        self.calls += 1;
        if self.calls > self.succeed_count {
            return Err(SinkError::Io(io::Error::other(format!(
                "deliberate failure after {} successful writes",
                self.succeed_count
            ))));
        }
        Ok(())
    }
}
