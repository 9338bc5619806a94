//! CSV snapshot reader.
//!
//! [`CsvSnapshotReader`] reads records from any `BufRead` source, line by
//! line; [`group_frames`] regroups a record stream into per-time frames.

use std::io::BufRead;

use crate::error::LogError;
use crate::record::{parse_record, SnapshotRecord};

/// Reads snapshot records from a text stream.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`. Parse errors carry the reader's
/// [`name`](Self::name) and the 1-based line number.
#[derive(Debug)]
pub struct CsvSnapshotReader<R: BufRead> {
    reader: R,
    name: String,
    lines_read: usize,
    line: String,
}

impl<R: BufRead> CsvSnapshotReader<R> {
    /// Wrap a text stream, named `"log"` in error messages.
    pub fn new(reader: R) -> Self {
        Self::with_name(reader, "log")
    }

    /// Wrap a text stream with a name for error messages (usually a path).
    pub fn with_name(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
            lines_read: 0,
            line: String::new(),
        }
    }

    /// Name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Read the next record, or `None` at end of input.
    pub fn next_record(&mut self) -> Result<Option<SnapshotRecord>, LogError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        parse_record(&self.line)
            .map(Some)
            .map_err(|error| LogError::Malformed {
                log: self.name.clone(),
                line: self.lines_read,
                error,
            })
    }

    /// Convert into a record iterator.
    pub fn records(self) -> Records<R> {
        Records {
            reader: self,
            done: false,
        }
    }
}

/// Iterator adapter over snapshot records. Stops after the first error.
#[derive(Debug)]
pub struct Records<R: BufRead> {
    reader: CsvSnapshotReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<SnapshotRecord, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// All cells sharing one snapshot time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotFrame {
    /// Simulation time of the frame.
    pub time: f64,
    /// Cell positions in file order.
    pub positions: Vec<f64>,
    /// Cell velocities.
    pub velocity: Vec<f64>,
    /// Cell densities.
    pub density: Vec<f64>,
}

impl SnapshotFrame {
    fn start(record: &SnapshotRecord) -> Self {
        let mut frame = Self {
            time: record.time,
            ..Self::default()
        };
        frame.push(record);
        frame
    }

    fn push(&mut self, record: &SnapshotRecord) {
        self.positions.push(record.position);
        self.velocity.push(record.velocity);
        self.density.push(record.density);
    }

    /// Number of cells in the frame.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the frame has no cells.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Group consecutive records with equal time into frames.
pub fn group_frames<I>(records: I) -> Vec<SnapshotFrame>
where
    I: IntoIterator<Item = SnapshotRecord>,
{
    let mut frames: Vec<SnapshotFrame> = Vec::new();
    for record in records {
        match frames.last_mut() {
            Some(frame) if frame.time == record.time => frame.push(&record),
            _ => frames.push(SnapshotFrame::start(&record)),
        }
    }
    frames
}

/// Read a whole log and group it into frames.
pub fn read_frames<R: BufRead>(reader: CsvSnapshotReader<R>) -> Result<Vec<SnapshotFrame>, LogError> {
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok(group_frames(records))
}
