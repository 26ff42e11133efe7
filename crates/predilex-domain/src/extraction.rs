//! Extraction results

use crate::{CanonicalDate, Gender};

/// Facts recovered from a single document
///
/// Produced fresh per extraction call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResult {
    /// Inferred gender
    pub gender: Gender,

    /// Accident date, `None` when not found
    pub accident_date: Option<CanonicalDate>,

    /// Consolidation date, `None` when not found
    pub consolidation_date: Option<CanonicalDate>,
}

impl ExtractionResult {
    /// View a ground-truth record through the same shape
    pub fn from_record(record: &crate::PersonRecord) -> Self {
        Self {
            gender: record.gender,
            accident_date: record.accident_date.clone(),
            consolidation_date: record.consolidation_date.clone(),
        }
    }
}
