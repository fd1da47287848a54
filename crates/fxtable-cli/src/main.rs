mod cli;
mod error;
mod output;

use clap::Parser;
use fxtable_core::{RateRequest, SystemClock};

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let request = RateRequest::from_args(&cli.tokens, &SystemClock)?;
    output::render(&request, cli.format, cli.pretty)?;

    Ok(())
}
