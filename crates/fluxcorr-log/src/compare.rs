//! Tolerance comparison of two snapshot logs.
//!
//! Logs are compared line by line. The first line on which any column
//! differs by more than the tolerance ends the comparison and is reported
//! with every diverging column; format errors and unequal lengths are
//! errors rather than divergences.

use std::fmt;
use std::io::BufRead;

use smallvec::SmallVec;

use crate::error::LogError;
use crate::format::Scientific;
use crate::reader::CsvSnapshotReader;
use crate::record::{RecordField, SnapshotRecord};

/// Absolute tolerance used when none is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// A single column that differs between the two logs.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDivergence {
    /// Which column diverged.
    pub field: RecordField,
    /// Value in the first log.
    pub left: f64,
    /// Value in the second log.
    pub right: f64,
}

/// The first diverging line and every column that differs on it.
#[derive(Clone, Debug, PartialEq)]
pub struct DivergenceReport {
    /// 1-based line number.
    pub line: usize,
    /// Diverging columns, in column order. Never empty.
    pub divergences: SmallVec<[FieldDivergence; 4]>,
}

impl fmt::Display for DivergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.divergences.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "line {}: {} differs ({} != {})",
                self.line,
                d.field,
                Scientific(d.left),
                Scientific(d.right)
            )?;
        }
        Ok(())
    }
}

/// Whether two values agree within `tolerance`.
///
/// Equal infinities agree; NaN agrees only with NaN.
pub fn within_tolerance(left: f64, right: f64, tolerance: f64) -> bool {
    if left.is_nan() || right.is_nan() {
        return left.is_nan() && right.is_nan();
    }
    left == right || (left - right).abs() <= tolerance
}

/// Columns of `left` and `right` that differ by more than `tolerance`.
pub fn compare_records(
    left: &SnapshotRecord,
    right: &SnapshotRecord,
    tolerance: f64,
) -> SmallVec<[FieldDivergence; 4]> {
    RecordField::ALL
        .iter()
        .filter_map(|&field| {
            let (l, r) = (left.get(field), right.get(field));
            (!within_tolerance(l, r, tolerance)).then_some(FieldDivergence {
                field,
                left: l,
                right: r,
            })
        })
        .collect()
}

/// Compare two readers line by line.
///
/// Returns `Ok(None)` if every line agrees, or `Ok(Some(report))` at the
/// first diverging line.
///
/// # Errors
///
/// [`LogError::Malformed`] for a line that is not a valid record,
/// [`LogError::LineCountMismatch`] if one log ends first,
/// [`LogError::InvalidTolerance`] for a NaN or negative tolerance, and
/// [`LogError::Io`] for read failures.
pub fn compare_readers<A: BufRead, B: BufRead>(
    mut left: CsvSnapshotReader<A>,
    mut right: CsvSnapshotReader<B>,
    tolerance: f64,
) -> Result<Option<DivergenceReport>, LogError> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(LogError::InvalidTolerance { value: tolerance });
    }
    loop {
        let a = left.next_record()?;
        let b = right.next_record()?;
        match (a, b) {
            (None, None) => return Ok(None),
            (Some(_), None) => {
                return Err(LogError::LineCountMismatch {
                    shorter: right.name().to_string(),
                    lines: right.lines_read(),
                })
            }
            (None, Some(_)) => {
                return Err(LogError::LineCountMismatch {
                    shorter: left.name().to_string(),
                    lines: left.lines_read(),
                })
            }
            (Some(a), Some(b)) => {
                let divergences = compare_records(&a, &b, tolerance);
                if !divergences.is_empty() {
                    return Ok(Some(DivergenceReport {
                        line: left.lines_read(),
                        divergences,
                    }));
                }
            }
        }
    }
}

/// Compare two logs, naming them `"log 1"` and `"log 2"` in errors.
///
/// # Examples
///
/// ```
/// use fluxcorr_log::{compare_logs, DEFAULT_TOLERANCE};
///
/// let a = "0,0,10,25\n0,1,0,0\n";
/// let b = "0,0,10,25.000001\n0,1,0,0.5\n";
/// let report = compare_logs(a.as_bytes(), b.as_bytes(), DEFAULT_TOLERANCE)
///     .unwrap()
///     .unwrap();
/// assert_eq!(report.line, 2);
/// assert_eq!(report.divergences[0].right, 0.5);
/// ```
pub fn compare_logs<A: BufRead, B: BufRead>(
    left: A,
    right: B,
    tolerance: f64,
) -> Result<Option<DivergenceReport>, LogError> {
    compare_readers(
        CsvSnapshotReader::with_name(left, "log 1"),
        CsvSnapshotReader::with_name(right, "log 2"),
        tolerance,
    )
}
