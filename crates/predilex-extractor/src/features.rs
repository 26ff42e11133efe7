//! Per-document feature rows

use crate::config::ExtractionConfig;
use crate::dates::ContextualDateExtractor;
use crate::extractor::flag_implausible;
use crate::gender::GenderInferer;
use crate::types::FeatureRow;
use predilex_domain::traits::{Annotator, SentimentScorer};
use predilex_domain::{Document, FeatureVector, PersonRecord};
use tracing::debug;

/// Verb lemma behind `contains_verb_tomber`
pub const FALL_VERB: &str = "tomber";

/// Verb lemma behind `contains_verb_consolider`
pub const CONSOLIDATE_VERB: &str = "consolider";

/// Builds one [`FeatureVector`] per document
///
/// Holds no per-document state; rows can be built in any order or in
/// parallel when the annotator and scorer are `Sync`.
pub struct FeatureBuilder<'a, A, S> {
    config: &'a ExtractionConfig,
    annotator: A,
    scorer: S,
}

impl<'a, A, S> FeatureBuilder<'a, A, S>
where
    A: Annotator,
    S: SentimentScorer,
{
    /// Create a builder
    pub fn new(config: &'a ExtractionConfig, annotator: A, scorer: S) -> Self {
        Self {
            config,
            annotator,
            scorer,
        }
    }

    /// Compute the features of a text
    pub fn features(&self, text: &str) -> FeatureVector {
        let inferer = GenderInferer::new(&self.config.vocabulary);
        let markers = inferer.count_markers(text);

        let tokens = self.annotator.annotate(text);
        let (contains_male_name, contains_female_name) = inferer.name_flags(&tokens);
        let has_verb = |lemma: &str| tokens.iter().any(|t| t.is_verb() && t.lemma == lemma);

        let dates = ContextualDateExtractor::new(
            self.config.context_window,
            &self.config.accident_keyword,
            &self.config.consolidation_keyword,
        )
        .extract(text);
        let max_year = self.config.plausible_year_limit();
        flag_implausible("accident", dates.accident.as_ref(), max_year);
        flag_implausible("consolidation", dates.consolidation.as_ref(), max_year);

        let lower = text.to_lowercase();
        let keyword_count: usize = self
            .config
            .keywords
            .iter()
            .map(|k| lower.matches(k.to_lowercase().as_str()).count())
            .sum();

        FeatureVector {
            il_count: markers.male_pronouns,
            elle_count: markers.female_pronouns,
            monsieur_count: markers.male_title_mentions,
            madame_count: markers.female_title_mentions,
            pronoun_gender: markers.pronoun_gender(),
            title_gender: markers.title_gender(),
            contains_male_name,
            contains_female_name,
            contains_verb_tomber: has_verb(FALL_VERB),
            contains_verb_consolider: has_verb(CONSOLIDATE_VERB),
            accident_date: dates.accident,
            consolidation_date: dates.consolidation,
            keyword_count,
            sentiment_polarity: self.scorer.polarity(text),
            text_length: text.chars().count(),
            num_words: text.split_whitespace().count(),
            num_sentences: count_sentences(text),
        }
    }

    /// Build the output row for a document and its ground truth
    pub fn build(&self, document: &Document, record: &PersonRecord) -> FeatureRow {
        let features = self.features(&document.text);
        debug!(
            "Features for '{}': {} words, {} keyword hits",
            document.filename, features.num_words, features.keyword_count
        );
        FeatureRow {
            record: record.clone(),
            features,
        }
    }
}

/// Pieces left after splitting on sentence terminators; zero for empty text
fn count_sentences(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.split(|c: char| matches!(c, '.' | '!' | '?')).count()
}
