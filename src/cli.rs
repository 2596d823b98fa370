//! Process entry point for the `narrative-validate` binary.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use crate::config::{Args, Config};
use crate::runner::{RunSummary, run};

/// Exit status when any file has a problem
pub const EXIT_INVALID: u8 = 1;

/// Exit status when the run itself could not complete
pub const EXIT_FATAL: u8 = 2;

/// Parse arguments, set up logging and run the validator
pub fn main_entry() -> ExitCode {
    let args = Args::parse();
    init_logger(&args.log_level);

    match execute(args) {
        Ok(summary) if summary.is_valid() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_INVALID),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Resolve configuration and validate, writing the report to stdout
pub fn execute(args: Args) -> Result<RunSummary> {
    let config = Config::from_args(args)?;
    let request = config.request();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &request, &mut out)
}

// RUST_LOG takes precedence over --log-level
fn init_logger(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
