//! Run a 1-D flux-corrected transport simulation and write its snapshot log.

use clap::Parser;
use fluxcorr_cli::{logging, run, RunArgs};

/// 1-D flux-corrected transport simulation
#[derive(Parser)]
#[command(name = "fluxcorr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Advect a density pulse with flux-corrected transport", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(flatten)]
    run: RunArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    run::execute(&cli.run)?;
    Ok(())
}
