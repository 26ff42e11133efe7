//! Configuration management for the CLI.

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use predilex_evaluator::EvaluationConfig;
use predilex_extractor::ExtractionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "predilex.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Only read the first N rows of each input table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Fan documents out across threads
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Input locations
    #[serde(default)]
    pub paths: Paths,

    /// Output locations
    #[serde(default)]
    pub output: OutputPaths,

    /// Display settings
    #[serde(default)]
    pub settings: Settings,

    /// Scoring settings
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Extraction heuristics
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Input locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Directory holding one text file per document
    pub text_dir: PathBuf,

    /// Identifier table (`ID`, `filename`)
    pub ids_csv: PathBuf,

    /// Ground-truth table (`ID`, `sexe`, `date_accident`, `date_consolidation`)
    pub labels_csv: PathBuf,

    /// Extension of eligible text files, without the dot
    pub text_extension: String,
}

/// Output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// Table written by `extract`
    pub extraction_csv: PathBuf,

    /// Table written by `features`
    pub features_csv: PathBuf,

    /// Metrics JSON, written only when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_json: Option<PathBuf>,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Path of the per-user configuration file, if the platform has one.
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("predilex").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `predilex.toml` in the working
    /// directory is tried, then the per-user file, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Config file '{}' does not exist",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE)).chain(Self::user_path());
        for path in candidates {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        if self.paths.text_extension.is_empty() {
            return Err(CliError::Config("text_extension must not be empty".to_string()));
        }
        if self.limit == Some(0) {
            return Err(CliError::Config("limit must be at least 1".to_string()));
        }
        self.extraction.validate()?;
        self.evaluation.validate()?;
        Ok(())
    }

    /// Apply command-line input overrides.
    pub fn apply_input(&mut self, args: &InputArgs) {
        if let Some(dir) = &args.text_dir {
            self.paths.text_dir = dir.clone();
        }
        if let Some(ids) = &args.ids {
            self.paths.ids_csv = ids.clone();
        }
        if let Some(labels) = &args.labels {
            self.paths.labels_csv = labels.clone();
        }
        if args.limit.is_some() {
            self.limit = args.limit;
        }
        if args.sequential {
            self.parallel = false;
        }
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: None,
            parallel: true,
            paths: Paths::default(),
            output: OutputPaths::default(),
            settings: Settings::default(),
            evaluation: EvaluationConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            text_dir: PathBuf::from("txt_files"),
            ids_csv: PathBuf::from("x_train_ids.csv"),
            labels_csv: PathBuf::from("y_train.csv"),
            text_extension: "txt".to_string(),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            extraction_csv: PathBuf::from("extraction_results.csv"),
            features_csv: PathBuf::from("features.csv"),
            metrics_json: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
