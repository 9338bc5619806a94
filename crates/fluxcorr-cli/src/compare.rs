//! The `compare-logs` command.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use fluxcorr_log::{compare_readers, CsvSnapshotReader, DivergenceReport, DEFAULT_TOLERANCE};

/// Paths and tolerance for a comparison.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First log
    pub log1: PathBuf,

    /// Second log
    pub log2: PathBuf,

    /// Absolute tolerance per value
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

fn open(path: &Path) -> Result<CsvSnapshotReader<BufReader<File>>> {
    let file =
        File::open(path).with_context(|| format!("could not open log {}", path.display()))?;
    Ok(CsvSnapshotReader::with_name(
        BufReader::new(file),
        path.display().to_string(),
    ))
}

/// Compare the two logs. `Ok(None)` means they match.
pub fn execute(args: &CompareArgs) -> Result<Option<DivergenceReport>> {
    let left = open(&args.log1)?;
    let right = open(&args.log2)?;
    let report = compare_readers(left, right, args.tolerance)?;
    Ok(report)
}
