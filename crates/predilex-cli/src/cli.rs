//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Predilex - Extract gender and injury dates from French court decisions.
#[derive(Debug, Parser)]
#[command(name = "predilex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PREDILEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log per-document details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract gender and dates, write the comparison table and print metrics
    Extract(ExtractArgs),

    /// Build the feature table
    Features(FeaturesArgs),

    /// Score a previously written extraction table
    Evaluate(EvaluateArgs),

    /// Print the effective configuration
    Config,
}

/// Input selection shared by the pipelines.
#[derive(Debug, Default, Args)]
pub struct InputArgs {
    /// Directory holding the document text files
    #[arg(long)]
    pub text_dir: Option<PathBuf>,

    /// CSV with ID and filename columns
    #[arg(long)]
    pub ids: Option<PathBuf>,

    /// CSV with ID, sexe, date_accident and date_consolidation columns
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// Only read the first N rows of each table
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Process documents one at a time
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the metrics as JSON to this path
    #[arg(short, long)]
    pub metrics: Option<PathBuf>,

    /// Date assignment strategy
    #[arg(long, value_enum)]
    pub dates: Option<DateAssignmentArg>,

    /// Date scoring mode
    #[arg(long, value_enum)]
    pub scoring: Option<DateScoringArg>,
}

/// Arguments for the features command.
#[derive(Debug, Args)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the evaluate command.
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Extraction CSV written by `predilex extract`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Also write the metrics as JSON to this path
    #[arg(short, long)]
    pub metrics: Option<PathBuf>,

    /// Date scoring mode
    #[arg(long, value_enum)]
    pub scoring: Option<DateScoringArg>,
}

/// Date assignment argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DateAssignmentArg {
    /// Keywords near each date decide its role
    Contextual,
    /// First date is the accident, second the consolidation
    Positional,
}

/// Date scoring argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DateScoringArg {
    /// Any date on both sides counts as correct
    Detection,
    /// Dates must be equal
    ExactMatch,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<DateAssignmentArg> for predilex_extractor::DateAssignment {
    fn from(arg: DateAssignmentArg) -> Self {
        match arg {
            DateAssignmentArg::Contextual => predilex_extractor::DateAssignment::Contextual,
            DateAssignmentArg::Positional => predilex_extractor::DateAssignment::Positional,
        }
    }
}

impl From<DateScoringArg> for predilex_evaluator::DateScoring {
    fn from(arg: DateScoringArg) -> Self {
        match arg {
            DateScoringArg::Detection => predilex_evaluator::DateScoring::Detection,
            DateScoringArg::ExactMatch => predilex_evaluator::DateScoring::ExactMatch,
        }
    }
}

impl Cli {
    /// Log filter directive implied by `-v` / `-q`
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
