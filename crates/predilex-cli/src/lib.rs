//! Predilex CLI library.
//!
//! This library provides the batch side of Predilex: configuration, CSV and
//! text loading, the extraction and feature pipelines, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod writer;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
