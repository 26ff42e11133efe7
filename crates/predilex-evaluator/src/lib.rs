//! Predilex Evaluator
//!
//! Scores extraction results against labeled ground truth.
//!
//! The Evaluator provides:
//! - Weighted multi-class precision/recall/F1 for gender
//! - Binary precision/recall/F1 for accident and consolidation date detection
//! - An opt-in exact-match mode for dates
//! - Zero-division safety through a configured default score
//!
//! # Examples
//!
//! ```
//! use predilex_domain::{ExtractionResult, Gender};
//! use predilex_evaluator::{EvaluationConfig, Evaluator};
//!
//! let evaluator = Evaluator::new(EvaluationConfig::default());
//! let extracted = ExtractionResult { gender: Gender::Male, ..Default::default() };
//! let truth = extracted.clone();
//!
//! let report = evaluator.score(&[(extracted, truth)]);
//! assert_eq!(report.get("gender_f1_score"), Some(1.0));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod evaluator;
mod report;

pub mod metrics;

pub use config::{DateScoring, EvaluationConfig};
pub use error::EvaluatorError;
pub use evaluator::Evaluator;
pub use metrics::{Confusion, Scores};
pub use report::{MetricsReport, METRIC_NAMES};
