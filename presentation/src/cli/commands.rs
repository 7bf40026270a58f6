//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for answers and experiment summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for petdesk_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => petdesk_domain::OutputFormat::Text,
            OutputFormat::Json => petdesk_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for petdesk
#[derive(Parser, Debug)]
#[command(name = "petdesk")]
#[command(author, version, about = "Pet-food customer-service answer pipeline and evaluation harness")]
#[command(long_about = r#"
petdesk answers pet-food customer questions by classifying them onto a fixed
intent catalog and personalizing the intent's prepared answer. It can also
replay a labeled dataset and fail the run when the success rate drops below a
threshold.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./petdesk.toml         Project-level config
3. ~/.config/petdesk/config.toml   Global config

Environment variables PETDESK_<SECTION>__<KEY>, EXPERIMENT_NAME and
SUCCESS_THRESHOLD override file settings.

Example:
  petdesk ask "Hi, I'm Sam. When will Rex's food arrive?"
  petdesk experiment --name nightly --threshold 0.9
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Fail at startup when an intent has no prepared answer
    #[arg(long, global = true)]
    pub strict_catalog: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a single customer question
    Ask(AskArgs),
    /// Replay a labeled dataset and gate the success rate
    Experiment(ExperimentArgs),
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The customer question
    pub question: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[derive(Args, Debug)]
pub struct ExperimentArgs {
    /// Experiment (run) name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Dataset to replay
    #[arg(long, value_name = "DATASET")]
    pub dataset: Option<String>,

    /// Minimum success rate in [0, 1]
    #[arg(long, value_name = "RATE")]
    pub threshold: Option<f64>,

    /// Number of items processed concurrently
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}
