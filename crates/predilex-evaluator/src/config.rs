//! Evaluator configuration

use crate::error::EvaluatorError;
use serde::{Deserialize, Serialize};

/// What counts as a correct date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateScoring {
    /// A date is correct when both sides have one, whatever its value
    #[default]
    Detection,
    /// A date is correct only when it equals the ground-truth value
    ExactMatch,
}

/// Configuration for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Date scoring mode
    pub date_scoring: DateScoring,

    /// Score used when a metric's denominator is zero (0.0-1.0)
    pub zero_division: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            date_scoring: DateScoring::Detection,
            zero_division: 1.0,
        }
    }
}

impl EvaluationConfig {
    /// Score dates by exact value rather than by detection
    pub fn exact_match() -> Self {
        Self {
            date_scoring: DateScoring::ExactMatch,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EvaluatorError> {
        if !(0.0..=1.0).contains(&self.zero_division) {
            return Err(EvaluatorError::Config(format!(
                "zero_division must be between 0.0 and 1.0, got {}",
                self.zero_division
            )));
        }
        Ok(())
    }
}
