//! CSV snapshot logs for fluxcorr simulations.
//!
//! A log is a sequence of `time,position,velocity,density` lines, one per
//! cell per snapshot, every value in C `%e` notation. This crate writes
//! logs ([`CsvSnapshotWriter`], a [`SnapshotSink`](fluxcorr_core::SnapshotSink)),
//! reads them back ([`CsvSnapshotReader`], [`group_frames`]) and compares
//! two logs within an absolute tolerance ([`compare_logs`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod format;
pub mod reader;
pub mod record;
pub mod writer;

pub use compare::{
    compare_logs, compare_readers, compare_records, within_tolerance, DivergenceReport,
    FieldDivergence, DEFAULT_TOLERANCE,
};
pub use error::{LogError, RecordError};
pub use format::Scientific;
pub use reader::{group_frames, read_frames, CsvSnapshotReader, Records, SnapshotFrame};
pub use record::{parse_record, RecordField, SnapshotRecord};
pub use writer::CsvSnapshotWriter;
