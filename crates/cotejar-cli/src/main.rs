//! Cotejador: command-line harness for quote divergence validation.
//!
//! ## Usage
//!
//! ```bash
//! cotejador check --before dolar.json --after euro.json --label blue
//! cotejador inspect --snapshot dolar.json --label blue
//! ```
//!
//! Snapshots are JSON text-node trees as materialized by a page driver.
//! Exit codes: 0 quotes within tolerance, 1 tolerance exceeded, 2 any other
//! failure (extraction, fixture loading, usage).

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use cotejar::{locate, resolve_quote, run_validation, CotejarError, FixtureDriver, TextNode};
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod output;

use cli::{CheckArgs, Cli, Commands, InspectArgs};
use error::{CliError, CliResult};
use output::{print_inspection, print_report};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ToleranceExceeded) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Inspect(args) => run_inspect(args),
    }
}

fn run_check(args: &CheckArgs) -> CliResult<()> {
    let before = load_snapshot(&args.before)?;
    let after = load_snapshot(&args.after)?;
    let config = args.tuning.to_config();
    let mut driver = FixtureDriver::new(before).with_view(args.view.clone(), after);

    match run_validation(
        &mut driver,
        "fixture://snapshot",
        &args.label,
        &args.view,
        &config,
    ) {
        Ok(report) => {
            print_report(&report, args.json)?;
            Ok(())
        }
        Err(CotejarError::ToleranceExceeded { report }) => {
            print_report(&report, args.json)?;
            Err(CliError::ToleranceExceeded)
        }
        Err(err) => Err(err.into()),
    }
}

fn run_inspect(args: &InspectArgs) -> CliResult<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let config = args.tuning.to_config();
    let candidates = locate(&snapshot, &args.label, &config)?;
    let quote = resolve_quote(&candidates).ok();
    print_inspection(&candidates, quote.as_ref());
    Ok(())
}

fn load_snapshot(path: &Path) -> CliResult<TextNode> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
