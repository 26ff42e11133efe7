//! The per-document batch pipelines.
//!
//! Each record is paired with its document and processed independently, so
//! records fan out across the rayon pool when `parallel` is set. Output rows
//! keep the record order either way.

use predilex_domain::{Document, PersonRecord};
use predilex_extractor::{
    ExtractionConfig, ExtractionRow, Extractor, FeatureBuilder, FeatureRow, LexiconSentiment,
    RuleBasedAnnotator,
};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{info, warn};

/// Run the extraction pipeline over every record whose document is present
/// and non-empty.
pub fn run_extraction(
    records: &[PersonRecord],
    texts: &HashMap<String, String>,
    config: &ExtractionConfig,
    parallel: bool,
) -> Vec<ExtractionRow> {
    let extractor = Extractor::new(config, RuleBasedAnnotator::default());
    let rows = process(records, parallel, |record| {
        let text = match texts.get(&record.filename) {
            Some(text) if !text.is_empty() => text,
            Some(_) => {
                warn!("Skipping ID {}: document '{}' is empty", record.id, record.filename);
                return None;
            }
            None => {
                warn!("Skipping ID {}: document '{}' not found", record.id, record.filename);
                return None;
            }
        };
        let document = Document::new(record.id, record.filename.as_str(), text.as_str());
        Some(extractor.extract_row(&document, record))
    });
    info!("Extracted {} of {} records", rows.len(), records.len());
    rows
}

/// Run the feature pipeline over every record.
///
/// A missing document is read as empty text, which yields the default row.
pub fn run_features(
    records: &[PersonRecord],
    texts: &HashMap<String, String>,
    config: &ExtractionConfig,
    parallel: bool,
) -> Vec<FeatureRow> {
    let builder = FeatureBuilder::new(config, RuleBasedAnnotator::default(), LexiconSentiment::default());
    let rows = process(records, parallel, |record| {
        let text = match texts.get(&record.filename) {
            Some(text) => text.as_str(),
            None => {
                warn!("Document '{}' not found for ID {}, using empty text", record.filename, record.id);
                ""
            }
        };
        let document = Document::new(record.id, record.filename.as_str(), text);
        Some(builder.build(&document, record))
    });
    info!("Built features for {} records", rows.len());
    rows
}

fn process<T, F>(records: &[PersonRecord], parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&PersonRecord) -> Option<T> + Sync + Send,
{
    if parallel {
        records.par_iter().filter_map(f).collect()
    } else {
        records.iter().filter_map(f).collect()
    }
}
