//! calc: command-line calculator.
//!
//! Exits 0 on success and 1 when the calculation fails (division by zero,
//! square root outside the real domain).

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use calc::{exit_status, logging, run, Args, CliConfig, Output};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = CliConfig::from_env().with_args(&args);

    logging::init_logging(&config).context("Failed to set up logging")?;

    let (output, ok) = run(&args, &config).context("Failed to render result")?;
    match output {
        Output::Stdout(text) => println!("{text}"),
        Output::Stderr(text) => eprintln!("{text}"),
    }

    Ok(ExitCode::from(exit_status(ok)))
}
