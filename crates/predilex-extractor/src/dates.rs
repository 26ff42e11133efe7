//! Date discovery and role assignment

use crate::normalizer::normalize;
use once_cell::sync::Lazy;
use predilex_domain::CanonicalDate;
use regex::Regex;
use tracing::trace;

/// `D/M/Y`, `D <mois> Y` and `Y-M-D` shapes, leftmost alternative first
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d{1,2}/\d{1,2}/\d{2,4}|\d{1,2} [a-zéû]+ \d{4}|\d{4}-\d{2}-\d{2})\b")
        .expect("date pattern is valid")
});

/// A date-shaped substring and its byte span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Matched text
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset past the last character
    pub end: usize,
}

/// Dates assigned to the two roles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateSlots {
    /// Accident date
    pub accident: Option<CanonicalDate>,
    /// Consolidation date
    pub consolidation: Option<CanonicalDate>,
}

/// Every non-overlapping date-shaped substring, in document order
pub fn find_dates(text: &str) -> Vec<DateMatch> {
    DATE_PATTERN
        .find_iter(text)
        .map(|m| DateMatch {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Assigns dates to roles by looking for keywords around them
pub struct ContextualDateExtractor<'a> {
    window: usize,
    accident_keyword: &'a str,
    consolidation_keyword: &'a str,
}

impl<'a> ContextualDateExtractor<'a> {
    /// Create an extractor with a word window and the two role keywords
    pub fn new(window: usize, accident_keyword: &'a str, consolidation_keyword: &'a str) -> Self {
        Self {
            window,
            accident_keyword,
            consolidation_keyword,
        }
    }

    /// Assign each date whose context mentions a role keyword to that role
    ///
    /// The accident keyword is checked before the consolidation keyword, and a
    /// later date overwrites an earlier one in the same slot, including with
    /// `None` when the later date does not normalize.
    pub fn extract(&self, text: &str) -> DateSlots {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut slots = DateSlots::default();

        for m in find_dates(text) {
            let context = self.context(text, &words, &m);
            trace!(date = %m.text, context = %context, "date context");

            if context.contains(self.accident_keyword) {
                slots.accident = normalize(&m.text);
            } else if context.contains(self.consolidation_keyword) {
                slots.consolidation = normalize(&m.text);
            }
        }

        slots
    }

    /// Words around a match, `window` words on each side, clamped to the text
    fn context(&self, text: &str, words: &[&str], m: &DateMatch) -> String {
        let before = text[..m.start].split_whitespace().count();
        let through = text[..m.end].split_whitespace().count();

        let end = (through + self.window).min(words.len());
        let start = before.saturating_sub(self.window).min(end);

        words[start..end].join(" ")
    }
}

/// First date to the accident slot, second to the consolidation slot
pub fn assign_positionally(text: &str) -> DateSlots {
    let mut dates = find_dates(text).into_iter();
    DateSlots {
        accident: dates.next().and_then(|m| normalize(&m.text)),
        consolidation: dates.next().and_then(|m| normalize(&m.text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Option<CanonicalDate> {
        Some(CanonicalDate::from_raw(s))
    }

    #[test]
    fn test_find_all_shapes_in_order() {
        let text = "Le 3 mars 1999 puis le 12/05/20 et enfin 2021-06-30.";
        let found: Vec<String> = find_dates(text).into_iter().map(|m| m.text).collect();
        assert_eq!(found, vec!["3 mars 1999", "12/05/20", "2021-06-30"]);
    }

    #[test]
    fn test_month_word_must_be_lowercase() {
        assert!(find_dates("le 3 Mars 1999").is_empty());
    }

    #[test]
    fn test_keyword_gating() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        let slots = extractor.extract("L'accident a eu lieu le 12/05/2020 sans autre incident.");
        assert_eq!(slots.accident, date("2020-05-12"));
        assert_eq!(slots.consolidation, None);
    }

    #[test]
    fn test_consolidation_slot() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        let slots = extractor.extract("La consolidation est fixée au 1 juin 2021.");
        assert_eq!(slots.accident, None);
        assert_eq!(slots.consolidation, date("2021-06-01"));
    }

    #[test]
    fn test_last_match_wins() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        let slots = extractor.extract("accident du 01/02/2019 puis rechute le 03/04/2019");
        assert_eq!(slots.accident, date("2019-04-03"));
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        let slots = extractor.extract("ACCIDENT survenu le 01/02/2019");
        assert_eq!(slots, DateSlots::default());
    }

    #[test]
    fn test_accident_checked_before_consolidation() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        let slots = extractor.extract("consolidation de l'accident au 05/06/2020");
        assert_eq!(slots.accident, date("2020-06-05"));
        assert_eq!(slots.consolidation, None);
    }

    #[test]
    fn test_window_bounds_context() {
        let extractor = ContextualDateExtractor::new(2, "accident", "consolidation");
        let text = "accident un deux trois quatre cinq le 01/02/2019";
        assert_eq!(extractor.extract(text), DateSlots::default());

        let wide = ContextualDateExtractor::new(10, "accident", "consolidation");
        assert_eq!(wide.extract(text).accident, date("2019-02-01"));
    }

    #[test]
    fn test_no_dates() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        assert_eq!(extractor.extract("accident et consolidation"), DateSlots::default());
        assert_eq!(extractor.extract(""), DateSlots::default());
    }

    #[test]
    fn test_dates_without_keywords() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        assert_eq!(extractor.extract("audience du 01/02/2019"), DateSlots::default());
    }

    #[test]
    fn test_malformed_later_date_clears_slot() {
        let extractor = ContextualDateExtractor::new(10, "accident", "consolidation");
        let slots = extractor.extract("accident le 01/02/2019 et le 3 foo 2019");
        assert_eq!(slots.accident, None);
    }

    #[test]
    fn test_positional_assignment() {
        let slots = assign_positionally("Faits du 1 janvier 2020, jugement le 15 mars 2021, appel 02/02/2022");
        assert_eq!(slots.accident, date("2020-01-01"));
        assert_eq!(slots.consolidation, date("2021-03-15"));

        let single = assign_positionally("le 12/05/2020");
        assert_eq!(single.accident, date("2020-05-12"));
        assert_eq!(single.consolidation, None);
    }
}
