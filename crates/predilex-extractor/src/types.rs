//! Output rows pairing ground truth with what was extracted

use predilex_domain::{CanonicalDate, ExtractionResult, FeatureVector, PersonRecord, FEATURE_COLUMNS};

/// Ground-truth columns, in output order
pub const RECORD_COLUMNS: [&str; 5] = ["ID", "filename", "sexe", "date_accident", "date_consolidation"];

/// One row of the extraction pipeline output
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRow {
    /// Ground truth for the document
    pub record: PersonRecord,

    /// Values extracted from the document
    pub extracted: ExtractionResult,
}

impl ExtractionRow {
    /// Column names, in output order
    pub const COLUMNS: [&'static str; 8] = [
        "ID",
        "filename",
        "real_gender",
        "gender_extracted",
        "real_accident_date",
        "accident_date_extracted",
        "real_consolidation_date",
        "consolidation_date_extracted",
    ];

    /// Values rendered as strings, aligned with [`Self::COLUMNS`]
    pub fn values(&self) -> Vec<String> {
        vec![
            self.record.id.to_string(),
            self.record.filename.clone(),
            self.record.gender.as_french().to_string(),
            self.extracted.gender.as_french().to_string(),
            CanonicalDate::to_cell(self.record.accident_date.as_ref()),
            CanonicalDate::to_cell(self.extracted.accident_date.as_ref()),
            CanonicalDate::to_cell(self.record.consolidation_date.as_ref()),
            CanonicalDate::to_cell(self.extracted.consolidation_date.as_ref()),
        ]
    }

    /// The ground truth viewed as an extraction result, for scoring
    pub fn truth(&self) -> ExtractionResult {
        ExtractionResult::from_record(&self.record)
    }
}

/// One row of the feature pipeline output
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Ground truth for the document
    pub record: PersonRecord,

    /// Features computed from the document
    pub features: FeatureVector,
}

impl FeatureRow {
    /// Column names: ground-truth columns followed by the feature columns
    pub fn columns() -> Vec<&'static str> {
        RECORD_COLUMNS.iter().chain(FEATURE_COLUMNS.iter()).copied().collect()
    }

    /// Values rendered as strings, aligned with [`Self::columns`]
    pub fn values(&self) -> Vec<String> {
        let mut values = vec![
            self.record.id.to_string(),
            self.record.filename.clone(),
            self.record.gender.as_french().to_string(),
            CanonicalDate::to_cell(self.record.accident_date.as_ref()),
            CanonicalDate::to_cell(self.record.consolidation_date.as_ref()),
        ];
        values.extend(self.features.values());
        values
    }
}
