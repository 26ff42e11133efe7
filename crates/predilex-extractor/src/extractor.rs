//! Core Extractor implementation

use crate::config::{DateAssignment, ExtractionConfig};
use crate::dates::{assign_positionally, ContextualDateExtractor};
use crate::gender::GenderInferer;
use crate::normalizer::is_plausible;
use crate::types::ExtractionRow;
use predilex_domain::traits::Annotator;
use predilex_domain::{CanonicalDate, Document, ExtractionResult, PersonRecord};
use tracing::debug;

/// The Extractor recovers gender and the two dates from a document
///
/// Gender comes from the title-first heuristic; dates are assigned according
/// to [`ExtractionConfig::date_assignment`].
pub struct Extractor<'a, A> {
    config: &'a ExtractionConfig,
    annotator: A,
}

impl<'a, A> Extractor<'a, A>
where
    A: Annotator,
{
    /// Create a new Extractor
    pub fn new(config: &'a ExtractionConfig, annotator: A) -> Self {
        Self { config, annotator }
    }

    /// Extract gender and dates from text
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let tokens = self.annotator.annotate(text);
        let gender = GenderInferer::new(&self.config.vocabulary).infer_by_title(text, &tokens);

        let slots = match self.config.date_assignment {
            DateAssignment::Contextual => ContextualDateExtractor::new(
                self.config.context_window,
                &self.config.accident_keyword,
                &self.config.consolidation_keyword,
            )
            .extract(text),
            DateAssignment::Positional => assign_positionally(text),
        };

        let max_year = self.config.plausible_year_limit();
        flag_implausible("accident", slots.accident.as_ref(), max_year);
        flag_implausible("consolidation", slots.consolidation.as_ref(), max_year);

        ExtractionResult {
            gender,
            accident_date: slots.accident,
            consolidation_date: slots.consolidation,
        }
    }

    /// Extract from a document and pair the result with its ground truth
    pub fn extract_row(&self, document: &Document, record: &PersonRecord) -> ExtractionRow {
        let extracted = self.extract(&document.text);
        debug!(
            "Extracted from '{}': gender={}, accident={}, consolidation={}",
            document.filename,
            extracted.gender,
            CanonicalDate::to_cell(extracted.accident_date.as_ref()),
            CanonicalDate::to_cell(extracted.consolidation_date.as_ref()),
        );
        ExtractionRow {
            record: record.clone(),
            extracted,
        }
    }
}

/// Log a date that does not look like a real date in the expected range
pub(crate) fn flag_implausible(slot: &str, date: Option<&CanonicalDate>, max_year: i32) {
    if let Some(date) = date {
        if !is_plausible(date, max_year) {
            debug!("Implausible {} date '{}' (expected 1900..={})", slot, date, max_year);
        }
    }
}
