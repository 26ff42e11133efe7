//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        DateAssignment, ExtractionConfig, Extractor, FeatureBuilder, LexiconSentiment,
        RuleBasedAnnotator,
    };
    use predilex_domain::traits::{Annotator, SentimentScorer};
    use predilex_domain::{CanonicalDate, Document, Gender, PartOfSpeech, PersonRecord, Token};

    /// Tags every word as a verb whose lemma is the word itself
    struct EchoAnnotator;

    impl Annotator for EchoAnnotator {
        fn annotate(&self, text: &str) -> Vec<Token> {
            text.split_whitespace()
                .map(|w| Token::new(w, w, PartOfSpeech::Verb))
                .collect()
        }
    }

    struct FixedSentiment(f64);

    impl SentimentScorer for FixedSentiment {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn record(id: i64, filename: &str) -> PersonRecord {
        PersonRecord {
            id,
            filename: filename.to_string(),
            gender: Gender::Male,
            accident_date: Some(CanonicalDate::from_raw("2020-01-01")),
            consolidation_date: None,
        }
    }

    #[test]
    fn test_full_extraction_row() {
        let config = ExtractionConfig::default();
        let extractor = Extractor::new(&config, RuleBasedAnnotator::default());
        let document = Document::new(
            1,
            "a.txt",
            "Monsieur Jean Dupont, accident survenu le 1 janvier 2020, consolidation le 15 mars 2021",
        );

        let row = extractor.extract_row(&document, &record(1, "a.txt"));
        assert_eq!(
            row.values(),
            vec![
                "1", "a.txt", "homme", "homme", "2020-01-01", "2020-01-01", "n.c.", "2021-03-15",
            ]
        );
        assert_eq!(row.truth().accident_date, row.record.accident_date);
    }

    #[test]
    fn test_builder_uses_injected_capabilities() {
        let config = ExtractionConfig::default();
        let builder = FeatureBuilder::new(&config, EchoAnnotator, FixedSentiment(0.25));
        let f = builder.features("tomber consolider");

        assert!(f.contains_verb_tomber);
        assert!(f.contains_verb_consolider);
        assert_eq!(f.sentiment_polarity, 0.25);
    }

    #[test]
    fn test_builder_accepts_borrowed_capabilities() {
        let config = ExtractionConfig::default();
        let annotator = RuleBasedAnnotator::default();
        let scorer = LexiconSentiment::default();
        let builder = FeatureBuilder::new(&config, &annotator, &scorer);
        assert_eq!(builder.features("").num_words, 0);
    }

    #[test]
    fn test_features_ignore_date_assignment_setting() {
        let config = ExtractionConfig {
            date_assignment: DateAssignment::Positional,
            ..ExtractionConfig::default()
        };
        let builder = FeatureBuilder::new(&config, EchoAnnotator, FixedSentiment(0.0));
        let f = builder.features("audience du 01/02/2019, consolidation au 03/04/2020");
        assert_eq!(f.accident_date, None);
        assert_eq!(f.consolidation_date, Some(CanonicalDate::from_raw("2020-04-03")));
    }

    #[test]
    fn test_custom_vocabulary() {
        let mut config = ExtractionConfig::default();
        config.vocabulary.male_names = vec!["Bernard".to_string()];
        let extractor = Extractor::new(&config, RuleBasedAnnotator::default());
        assert_eq!(extractor.extract("Bernard témoigne").gender, Gender::Male);
        assert_eq!(extractor.extract("Jean témoigne").gender, Gender::Unknown);
    }
}
