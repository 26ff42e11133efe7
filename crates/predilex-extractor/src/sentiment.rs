//! Lexicon-based polarity scoring for French text

use predilex_domain::traits::SentimentScorer;
use std::collections::HashMap;

const LEXICON: &[(&str, f64)] = &[
    ("bon", 0.7),
    ("bonne", 0.7),
    ("bien", 0.5),
    ("favorable", 0.6),
    ("satisfaisant", 0.5),
    ("amélioration", 0.5),
    ("guérison", 0.7),
    ("guéri", 0.6),
    ("rétabli", 0.6),
    ("stable", 0.3),
    ("léger", 0.2),
    ("légère", 0.2),
    ("indemnisé", 0.3),
    ("réparation", 0.2),
    ("heureusement", 0.5),
    ("mauvais", -0.7),
    ("mauvaise", -0.7),
    ("mal", -0.5),
    ("grave", -0.7),
    ("graves", -0.7),
    ("sévère", -0.6),
    ("douleur", -0.6),
    ("douleurs", -0.6),
    ("souffrance", -0.7),
    ("souffrances", -0.7),
    ("blessure", -0.5),
    ("blessures", -0.5),
    ("blessé", -0.5),
    ("fracture", -0.6),
    ("traumatisme", -0.7),
    ("choc", -0.4),
    ("séquelles", -0.6),
    ("handicap", -0.6),
    ("invalidité", -0.6),
    ("préjudice", -0.5),
    ("décès", -0.9),
    ("mort", -0.9),
    ("accident", -0.4),
    ("aggravation", -0.6),
    ("difficile", -0.4),
    ("pénible", -0.5),
    ("angoisse", -0.6),
    ("rejet", -0.3),
    ("faute", -0.4),
];

const NEGATIONS: &[&str] = &["pas", "jamais", "aucun", "aucune", "sans", "ni", "guère"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("très", 1.3),
    ("extrêmement", 1.5),
    ("particulièrement", 1.3),
    ("gravement", 1.4),
    ("peu", 0.5),
];

/// Negation scales the polarity of the word it precedes
const NEGATION_FACTOR: f64 = -0.5;

/// How many preceding words may hold a negation or intensifier
const MODIFIER_REACH: usize = 2;

/// Averages the polarity of lexicon words, adjusted by nearby negations and
/// intensifiers
pub struct LexiconSentiment {
    lexicon: HashMap<String, f64>,
}

impl LexiconSentiment {
    /// Build a scorer over a custom lexicon of `word -> polarity` entries
    pub fn with_lexicon<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(word, score)| (word.into().to_lowercase(), score.clamp(-1.0, 1.0)))
            .collect();
        Self { lexicon }
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::with_lexicon(LEXICON.iter().copied())
    }
}

impl SentimentScorer for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();

        let mut total = 0.0;
        let mut hits = 0usize;
        for (idx, word) in words.iter().enumerate() {
            let Some(&base) = self.lexicon.get(word) else {
                continue;
            };

            let mut score = base;
            for prev in &words[idx.saturating_sub(MODIFIER_REACH)..idx] {
                if NEGATIONS.contains(&prev.as_str()) {
                    score *= NEGATION_FACTOR;
                } else if let Some((_, factor)) = INTENSIFIERS.iter().find(|(w, _)| *w == prev.as_str()) {
                    score *= *factor;
                }
            }

            total += score.clamp(-1.0, 1.0);
            hits += 1;
        }

        if hits == 0 {
            return 0.0;
        }
        (total / hits as f64).clamp(-1.0, 1.0)
    }
}
