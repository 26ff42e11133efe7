//! Fixed-schema feature rows

use crate::{CanonicalDate, Gender};

/// Column names of a [`FeatureVector`], in output order
pub const FEATURE_COLUMNS: [&str; 17] = [
    "il_count",
    "elle_count",
    "monsieur_count",
    "madame_count",
    "pronoun_gender",
    "title_gender",
    "contains_male_name",
    "contains_female_name",
    "contains_verb_tomber",
    "contains_verb_consolider",
    "accident_date",
    "consolidation_date",
    "keyword_count",
    "sentiment_polarity",
    "text_length",
    "num_words",
    "num_sentences",
];

/// Engineered signals for one document
///
/// Every field is always present. `Default` is the row produced for an empty
/// text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    /// Isolated occurrences of ` il `
    pub il_count: usize,
    /// Isolated occurrences of ` elle `
    pub elle_count: usize,
    /// Occurrences of `monsieur`
    pub monsieur_count: usize,
    /// Occurrences of `madame`
    pub madame_count: usize,
    /// Dominant gender by pronoun counts
    pub pronoun_gender: Gender,
    /// Dominant gender by all title markers (monsieur, mr, m. / madame, mme, mme.)
    pub title_gender: Gender,
    /// Any male first name among the tokens
    pub contains_male_name: bool,
    /// Any female first name among the tokens
    pub contains_female_name: bool,
    /// A verb lemmatized to `tomber`
    pub contains_verb_tomber: bool,
    /// A verb lemmatized to `consolider`
    pub contains_verb_consolider: bool,
    /// Accident date found by contextual extraction
    pub accident_date: Option<CanonicalDate>,
    /// Consolidation date found by contextual extraction
    pub consolidation_date: Option<CanonicalDate>,
    /// Summed case-insensitive keyword hits
    pub keyword_count: usize,
    /// Sentiment polarity in `[-1, 1]`
    pub sentiment_polarity: f64,
    /// Length in characters
    pub text_length: usize,
    /// Whitespace-delimited word count
    pub num_words: usize,
    /// Pieces after splitting on `.`, `!`, `?`
    pub num_sentences: usize,
}

impl FeatureVector {
    /// Values rendered as strings, aligned with [`FEATURE_COLUMNS`]
    ///
    /// Gender labels use the English vocabulary, flags are `0`/`1`, missing
    /// dates are `n.c.`.
    pub fn values(&self) -> Vec<String> {
        vec![
            self.il_count.to_string(),
            self.elle_count.to_string(),
            self.monsieur_count.to_string(),
            self.madame_count.to_string(),
            self.pronoun_gender.as_english().to_string(),
            self.title_gender.as_english().to_string(),
            flag(self.contains_male_name),
            flag(self.contains_female_name),
            flag(self.contains_verb_tomber),
            flag(self.contains_verb_consolider),
            CanonicalDate::to_cell(self.accident_date.as_ref()),
            CanonicalDate::to_cell(self.consolidation_date.as_ref()),
            self.keyword_count.to_string(),
            self.sentiment_polarity.to_string(),
            self.text_length.to_string(),
            self.num_words.to_string(),
            self.num_sentences.to_string(),
        ]
    }

    /// Column/value pairs in output order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        FEATURE_COLUMNS.iter().copied().zip(self.values()).collect()
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
