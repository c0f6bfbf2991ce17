//! Command-line argument definitions for `glucopath`.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use glucopath_harness::config::{CostAccounting, PlanConfig};

#[derive(Parser)]
#[command(
    name = "glucopath",
    version,
    about = "Search for a sequence of lifestyle adjustments that brings blood sugar to target"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plan a path from a starting health state.
    Plan(PlanArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// Starting body-mass index.
    #[arg(long, allow_negative_numbers = true)]
    pub bmi: f64,

    /// Age in years. Carried through unchanged.
    #[arg(long)]
    pub age: u32,

    /// Starting activity score.
    #[arg(long, allow_negative_numbers = true)]
    pub activity: f64,

    /// Starting blood sugar level.
    #[arg(long = "blood-sugar", allow_negative_numbers = true)]
    pub blood_sugar: f64,

    /// JSON file with constant and policy overrides. Flags win over it.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// BMI sensitivity.
    #[arg(long, allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// Activity sensitivity.
    #[arg(long, allow_negative_numbers = true)]
    pub beta: Option<f64>,

    /// Goal blood sugar threshold.
    #[arg(long, allow_negative_numbers = true)]
    pub target: Option<f64>,

    /// Stop after this many expansions.
    #[arg(long = "max-expansions")]
    pub max_expansions: Option<u64>,

    /// Do not create nodes deeper than this.
    #[arg(long = "max-depth")]
    pub max_depth: Option<u32>,

    /// Accumulate path cost along the path instead of scoring the last step only.
    #[arg(long = "cumulative-cost")]
    pub cumulative_cost: bool,

    /// Print the canonical plan report instead of text lines.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    /// Flag layer of the configuration overlay.
    pub fn overrides(&self) -> PlanConfig {
        PlanConfig {
            alpha: self.alpha,
            beta: self.beta,
            target: self.target,
            floor: None,
            max_expansions: self.max_expansions,
            max_depth: self.max_depth,
            cost_accounting: self.cumulative_cost.then_some(CostAccounting::Cumulative),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
