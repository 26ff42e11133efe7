//! Integration tests for predilex-extractor
//!
//! These tests drive the public API the way the batch pipelines do.

use predilex_domain::{CanonicalDate, Document, Gender, PersonRecord, FEATURE_COLUMNS};
use predilex_extractor::normalizer::normalize;
use predilex_extractor::{
    ExtractionConfig, Extractor, FeatureBuilder, FeatureRow, LexiconSentiment, RuleBasedAnnotator,
};

fn record(id: i64, filename: &str) -> PersonRecord {
    PersonRecord {
        id,
        filename: filename.to_string(),
        gender: Gender::Unknown,
        accident_date: None,
        consolidation_date: None,
    }
}

#[test]
fn test_normalizer_examples() {
    assert_eq!(normalize("3 mars 1999"), Some(CanonicalDate::from_raw("1999-03-03")));
    assert_eq!(normalize("12/05/2020"), Some(CanonicalDate::from_raw("2020-05-12")));
    assert_eq!(normalize("not a date"), None);
    assert_eq!(normalize(""), None);
}

#[test]
fn test_title_precedence() {
    let config = ExtractionConfig::default();
    let extractor = Extractor::new(&config, RuleBasedAnnotator::default());

    assert_eq!(extractor.extract("Marie et Monsieur Durand").gender, Gender::Male);
    assert_eq!(extractor.extract("Madame Jean").gender, Gender::Female);
    assert_eq!(extractor.extract("Le tribunal statue").gender, Gender::Unknown);
}

#[test]
fn test_reference_document() {
    let config = ExtractionConfig::default();
    let extractor = Extractor::new(&config, RuleBasedAnnotator::default());

    let result = extractor.extract(
        "Monsieur Jean Dupont, accident survenu le 1 janvier 2020, consolidation le 15 mars 2021",
    );
    assert_eq!(result.gender.as_french(), "homme");
    assert_eq!(CanonicalDate::to_cell(result.accident_date.as_ref()), "2020-01-01");
    assert_eq!(CanonicalDate::to_cell(result.consolidation_date.as_ref()), "2021-03-15");
}

#[test]
fn test_feature_rows_share_one_schema() {
    let config = ExtractionConfig::default();
    let builder = FeatureBuilder::new(&config, RuleBasedAnnotator::default(), LexiconSentiment::default());

    let texts = [
        "",
        "Madame Sophie Leroy est tombée le 02/03/2018. Elle souffre d'une fracture.",
        "Il est établi que la consolidation est acquise au 4 avril 2019 !",
    ];
    for (idx, text) in texts.iter().enumerate() {
        let id = idx as i64 + 1;
        let filename = format!("doc{}.txt", id);
        let row = builder.build(&Document::new(id, filename.as_str(), *text), &record(id, &filename));

        assert_eq!(row.values().len(), FeatureRow::columns().len());
        assert_eq!(row.features.values().len(), FEATURE_COLUMNS.len());
        assert!(row.values().iter().all(|v| !v.is_empty()));
    }
}
