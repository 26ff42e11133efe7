//! Evaluator error types

use thiserror::Error;

/// Errors that can occur while configuring an evaluation
#[derive(Error, Debug)]
pub enum EvaluatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
