//! Rule-based gender inference

use crate::config::GenderVocabulary;
use predilex_domain::{Gender, Token};

/// Raw marker counts for the marker-counting heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderMarkers {
    /// Isolated male pronoun occurrences
    pub male_pronouns: usize,
    /// Isolated female pronoun occurrences
    pub female_pronouns: usize,
    /// Occurrences of the male title alone (`monsieur`)
    pub male_title_mentions: usize,
    /// Occurrences of the female title alone (`madame`)
    pub female_title_mentions: usize,
    /// All male title marker occurrences
    pub male_titles: usize,
    /// All female title marker occurrences
    pub female_titles: usize,
}

impl GenderMarkers {
    /// Dominant gender by pronoun counts
    pub fn pronoun_gender(&self) -> Gender {
        Gender::from_counts(self.male_pronouns, self.female_pronouns)
    }

    /// Dominant gender by title counts
    pub fn title_gender(&self) -> Gender {
        Gender::from_counts(self.male_titles, self.female_titles)
    }
}

/// Infers gender from titles, pronouns and first names
pub struct GenderInferer<'a> {
    vocabulary: &'a GenderVocabulary,
}

impl<'a> GenderInferer<'a> {
    /// Create an inferer over a vocabulary
    pub fn new(vocabulary: &'a GenderVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Title-first heuristic
    ///
    /// The male title anywhere in the text wins, then the female title. Failing
    /// both, the first token matching a first name decides, checking the male
    /// list before the female list for each token.
    pub fn infer_by_title(&self, text: &str, tokens: &[Token]) -> Gender {
        if text.contains(&self.vocabulary.male_title) {
            return Gender::Male;
        }
        if text.contains(&self.vocabulary.female_title) {
            return Gender::Female;
        }

        for token in tokens {
            if contains_name(&self.vocabulary.male_names, &token.text) {
                return Gender::Male;
            }
            if contains_name(&self.vocabulary.female_names, &token.text) {
                return Gender::Female;
            }
        }

        Gender::Unknown
    }

    /// Count pronoun and title markers, case-insensitively
    ///
    /// Pronouns only count when surrounded by single spaces. Title markers are
    /// plain substring counts; the title mentions count the configured titles
    /// only, while the totals sum every marker.
    pub fn count_markers(&self, text: &str) -> GenderMarkers {
        let lower = text.to_lowercase();
        let v = self.vocabulary;

        GenderMarkers {
            male_pronouns: count_isolated(&lower, &v.male_pronoun),
            female_pronouns: count_isolated(&lower, &v.female_pronoun),
            male_title_mentions: lower.matches(v.male_title.to_lowercase().as_str()).count(),
            female_title_mentions: lower.matches(v.female_title.to_lowercase().as_str()).count(),
            male_titles: count_all(&lower, &v.male_title_markers),
            female_titles: count_all(&lower, &v.female_title_markers),
        }
    }

    /// Whether any male / female first name appears among the tokens
    pub fn name_flags(&self, tokens: &[Token]) -> (bool, bool) {
        let has = |names: &[String]| tokens.iter().any(|t| contains_name(names, &t.text));
        (has(&self.vocabulary.male_names), has(&self.vocabulary.female_names))
    }
}

fn contains_name(names: &[String], candidate: &str) -> bool {
    names.iter().any(|n| n == candidate)
}

fn count_isolated(lower: &str, word: &str) -> usize {
    let padded = format!(" {} ", word.trim().to_lowercase());
    lower.matches(padded.as_str()).count()
}

fn count_all(lower: &str, markers: &[String]) -> usize {
    markers
        .iter()
        .map(|m| lower.matches(m.to_lowercase().as_str()).count())
        .sum()
}
