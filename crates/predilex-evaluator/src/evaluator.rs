//! Core Evaluator implementation

use crate::config::{DateScoring, EvaluationConfig};
use crate::metrics::{self, Confusion, Scores};
use crate::report::MetricsReport;
use predilex_domain::{CanonicalDate, ExtractionResult};
use tracing::{debug, info};

/// Scores extraction results against ground truth
pub struct Evaluator {
    config: EvaluationConfig,
}

impl Evaluator {
    /// Create a new Evaluator
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Score `(extracted, ground truth)` pairs
    ///
    /// An empty slice yields the zero-division value for every metric.
    pub fn score(&self, results: &[(ExtractionResult, ExtractionResult)]) -> MetricsReport {
        let zero_division = self.config.zero_division;

        let gender = metrics::weighted(
            results
                .iter()
                .map(|(extracted, truth)| (truth.gender, extracted.gender)),
            zero_division,
        );
        let accident_date = self.score_dates(
            results
                .iter()
                .map(|(extracted, truth)| (truth.accident_date.as_ref(), extracted.accident_date.as_ref())),
        );
        let consolidation_date = self.score_dates(results.iter().map(|(extracted, truth)| {
            (
                truth.consolidation_date.as_ref(),
                extracted.consolidation_date.as_ref(),
            )
        }));

        info!(
            "Scored {} results: gender F1 {:.3}, accident date F1 {:.3}, consolidation date F1 {:.3}",
            results.len(),
            gender.f1,
            accident_date.f1,
            consolidation_date.f1
        );

        MetricsReport::new(gender, accident_date, consolidation_date)
    }

    fn score_dates<'r, I>(&self, pairs: I) -> Scores
    where
        I: Iterator<Item = (Option<&'r CanonicalDate>, Option<&'r CanonicalDate>)>,
    {
        match self.config.date_scoring {
            DateScoring::Detection => metrics::binary(
                pairs.map(|(truth, extracted)| (truth.is_some(), extracted.is_some())),
                self.config.zero_division,
            ),
            DateScoring::ExactMatch => {
                let mut confusion = Confusion::default();
                for (truth, extracted) in pairs {
                    match (truth, extracted) {
                        (Some(t), Some(e)) if t == e => confusion.tp += 1,
                        (Some(t), Some(e)) => {
                            debug!("Date mismatch: expected {}, extracted {}", t, e);
                            confusion.fp += 1;
                            confusion.fn_ += 1;
                        }
                        (Some(_), None) => confusion.fn_ += 1,
                        (None, Some(_)) => confusion.fp += 1,
                        (None, None) => {}
                    }
                }
                confusion.scores(self.config.zero_division)
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluationConfig::default())
    }
}
