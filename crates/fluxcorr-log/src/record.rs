//! One line of a snapshot log.

use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;
use crate::format::Scientific;

/// The four columns of a snapshot log, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// Simulation time.
    Time,
    /// Cell centre position.
    Position,
    /// Cell velocity.
    Velocity,
    /// Cell density.
    Density,
}

impl RecordField {
    /// Every field in column order.
    pub const ALL: [RecordField; 4] = [
        RecordField::Time,
        RecordField::Position,
        RecordField::Velocity,
        RecordField::Density,
    ];

    /// Lower-case column name.
    pub fn name(self) -> &'static str {
        match self {
            RecordField::Time => "time",
            RecordField::Position => "position",
            RecordField::Velocity => "velocity",
            RecordField::Density => "density",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single `time,position,velocity,density` line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapshotRecord {
    /// Simulation time in seconds.
    pub time: f64,
    /// Cell centre in metres.
    pub position: f64,
    /// Velocity in m s⁻¹.
    pub velocity: f64,
    /// Density in kg m⁻³.
    pub density: f64,
}

impl SnapshotRecord {
    /// Value of one column.
    pub fn get(&self, field: RecordField) -> f64 {
        match field {
            RecordField::Time => self.time,
            RecordField::Position => self.position,
            RecordField::Velocity => self.velocity,
            RecordField::Density => self.density,
        }
    }
}

/// Writes the record as a log line without the trailing newline.
impl fmt::Display for SnapshotRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            Scientific(self.time),
            Scientific(self.position),
            Scientific(self.velocity),
            Scientific(self.density)
        )
    }
}

impl FromStr for SnapshotRecord {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_record(line)
    }
}

/// Parse one log line. A trailing `\n` or `\r\n` is ignored, and so is
/// whitespace around each value.
pub fn parse_record(line: &str) -> Result<SnapshotRecord, RecordError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let found = line.split(',').count();
    if found != 4 {
        return Err(RecordError::WrongTokenCount { found });
    }
    let mut values = [0.0; 4];
    for (i, (slot, token)) in values.iter_mut().zip(line.split(',')).enumerate() {
        let column = i + 1;
        let token = token.trim();
        if token.is_empty() {
            return Err(RecordError::EmptyToken { column });
        }
        *slot = token.parse().map_err(|_| RecordError::InvalidNumber {
            column,
            token: token.to_string(),
        })?;
    }
    let [time, position, velocity, density] = values;
    Ok(SnapshotRecord {
        time,
        position,
        velocity,
        density,
    })
}
