//! CLI entry point for generating generalized Petersen graphs.
//!
//! Parses arguments with clap, generates and exports the requested graphs,
//! writes them to stdout and maps errors to a failing exit code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use petersen_gen::cli::{run_cli, write_rendered, Cli};
use petersen_gen::logging::{self, LoggingError};

fn try_main(cli: Cli) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut prompt = io::stderr();
    let rendered = run_cli(cli, &mut input, &mut prompt).context("failed to generate graph")?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_rendered(&rendered, &mut writer).context("failed to write output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.verbose) {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main(cli) {
        error!(error = %format!("{:#}", err), "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {}", err);
}
