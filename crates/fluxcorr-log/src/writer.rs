//! CSV snapshot writer.
//!
//! [`CsvSnapshotWriter`] streams snapshots to any `Write` sink, one
//! `time,position,velocity,density` line per cell.

use std::io::Write;

use fluxcorr_core::{SinkError, Snapshot, SnapshotSink};

use crate::format::Scientific;

/// Writes snapshots as CSV lines to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`. The stream is released when the writer
/// is dropped; call [`finish`](SnapshotSink::finish) first to surface
/// flush errors.
///
/// # Examples
///
/// ```
/// use fluxcorr_core::{Snapshot, SnapshotSink};
/// use fluxcorr_log::{CsvSnapshotReader, CsvSnapshotWriter};
///
/// let snap = Snapshot {
///     step: 0,
///     time: 0.0,
///     positions: &[0.0, 1.0],
///     velocity: &[10.0, 0.0],
///     density: &[25.0, 0.0],
///     momentum: &[250.0, 0.0],
/// };
/// let mut writer = CsvSnapshotWriter::new(Vec::new());
/// writer.write_snapshot(&snap).unwrap();
/// writer.finish().unwrap();
/// assert_eq!(writer.records_written(), 2);
/// let bytes = writer.into_inner();
///
/// let mut reader = CsvSnapshotReader::new(bytes.as_slice());
/// let first = reader.next_record().unwrap().unwrap();
/// assert_eq!(first.density, 25.0);
/// ```
#[derive(Debug)]
pub struct CsvSnapshotWriter<W: Write> {
    writer: W,
    records_written: u64,
    snapshots_written: u64,
}

impl<W: Write> CsvSnapshotWriter<W> {
    /// Wrap a byte stream. Nothing is written until the first snapshot.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
            snapshots_written: 0,
        }
    }

    /// Lines written so far.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Snapshots written so far.
    pub fn snapshots_written(&self) -> u64 {
        self.snapshots_written
    }

    /// Unwrap the underlying stream without flushing.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SnapshotSink for CsvSnapshotWriter<W> {
    fn write_snapshot(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        snapshot.check_shape()?;
        let time = Scientific(snapshot.time);
        for cell in snapshot.cells() {
            writeln!(
                self.writer,
                "{time},{},{},{}",
                Scientific(cell.position),
                Scientific(cell.velocity),
                Scientific(cell.density)
            )?;
            self.records_written += 1;
        }
        self.snapshots_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn snapshot<'a>(time: f64, density: &'a [f64], positions: &'a [f64]) -> Snapshot<'a> {
        Snapshot {
            step: 1,
            time,
            positions,
            velocity: density,
            density,
            momentum: density,
        }
    }

    #[test]
    fn writes_one_line_per_cell() {
        let mut w = CsvSnapshotWriter::new(Vec::new());
        w.write_snapshot(&snapshot(0.04, &[25.0, 0.0], &[0.0, 1.0]))
            .unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            text,
            "4.000000e-02,0.000000e+00,2.500000e+01,2.500000e+01\n\
             4.000000e-02,1.000000e+00,0.000000e+00,0.000000e+00\n"
        );
    }

    #[test]
    fn counts_records_and_snapshots() {
        let mut w = CsvSnapshotWriter::new(Vec::new());
        for t in [0.0, 0.1, 0.2] {
            w.write_snapshot(&snapshot(t, &[1.0; 5], &[0.0; 5])).unwrap();
        }
        assert_eq!(w.records_written(), 15);
        assert_eq!(w.snapshots_written(), 3);
        assert_eq!(w.into_inner().iter().filter(|&&b| b == b'\n').count(), 15);
    }

    #[test]
    fn rejects_ragged_snapshot_before_writing() {
        let mut w = CsvSnapshotWriter::new(Vec::new());
        let snap = Snapshot {
            step: 0,
            time: 0.0,
            positions: &[0.0, 1.0],
            velocity: &[0.0],
            density: &[0.0, 0.0],
            momentum: &[0.0, 0.0],
        };
        assert!(matches!(
            w.write_snapshot(&snap),
            Err(SinkError::ShapeMismatch { .. })
        ));
        assert_eq!(w.records_written(), 0);
        assert!(w.into_inner().is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn io_errors_surface_as_sink_errors() {
        let mut w = CsvSnapshotWriter::new(BrokenPipe);
        let err = w
            .write_snapshot(&snapshot(0.0, &[1.0], &[0.0]))
            .unwrap_err();
        assert!(matches!(err, SinkError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(matches!(w.finish(), Err(SinkError::Io(_))));
    }
}
