mod cli; // Declare the cli module

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;

/// Route `log` records from the core library into a tracing fmt subscriber.
///
/// `RUST_LOG` wins over the `--verbose` default.
fn init_logging(verbose: bool) {
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to bridge log records: {}", e);
    }
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Failed to install log subscriber: {}", e);
    }
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = CliArgs::parse();
    init_logging(args.verbose);
    tracing::debug!(?args, "Parsed arguments");

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
