//! `glucopath` command-line entry point.
//!
//! Exit status: 0 when a path was found, 2 when the search ended without
//! one, 1 on any error.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;

use glucopath_harness::config::PlanConfig;
use glucopath_harness::logging::{init_logging, LogConfig, LogFormat};
use glucopath_harness::render::render_plan_text;
use glucopath_harness::runner::run_plan;
use glucopath_kernel::state::HealthStateV1;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, PlanArgs};

const EXIT_NO_PATH: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Command::Plan(args) => plan(args),
    };
    match result {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(%error, "plan failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn plan(args: &PlanArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let base = match &args.config {
        Some(path) => PlanConfig::from_json_file(path)?,
        None => PlanConfig::default(),
    };
    let merged = base.overlay(&args.overrides());

    let start = HealthStateV1::new(args.bmi, args.age, args.activity, args.blood_sugar);
    let outcome = run_plan(start, &merged.glycemic(), &merged.search_policy())?;

    let mut stdout = io::stdout().lock();
    if args.json {
        stdout.write_all(&outcome.report.bytes)?;
        stdout.write_all(b"\n")?;
    } else {
        stdout.write_all(render_plan_text(outcome.path.as_deref()).as_bytes())?;
    }
    stdout.flush()?;

    Ok(if outcome.is_path_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO_PATH)
    })
}
