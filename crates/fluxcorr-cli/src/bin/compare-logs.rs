//! Compare two snapshot logs within an absolute tolerance.
//!
//! Exits 0 when the logs match. Otherwise prints the first diverging line
//! (or the error) to stderr and exits 1.

use std::process::ExitCode;

use clap::Parser;
use fluxcorr_cli::{compare, CompareArgs};

/// Snapshot log comparison
#[derive(Parser)]
#[command(name = "compare-logs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare two fluxcorr snapshot logs", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: CompareArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match compare::execute(&cli.args) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(report)) => {
            eprintln!("{report}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
