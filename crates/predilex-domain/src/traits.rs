//! Trait definitions for external linguistic capabilities
//!
//! These traits define the boundaries between extraction logic and the
//! language tooling it delegates to. Implementations live in other crates.

use crate::Token;

/// Tokenization, lemmatization and part-of-speech tagging
///
/// Implemented by `predilex-extractor` (`RuleBasedAnnotator`)
pub trait Annotator {
    /// Annotate text, returning tokens in document order
    fn annotate(&self, text: &str) -> Vec<Token>;
}

/// Sentiment polarity scoring
///
/// Implemented by `predilex-extractor` (`LexiconSentiment`)
pub trait SentimentScorer {
    /// Polarity in `[-1.0, 1.0]`; `0.0` for neutral or empty text
    fn polarity(&self, text: &str) -> f64;
}

impl<T: Annotator + ?Sized> Annotator for &T {
    fn annotate(&self, text: &str) -> Vec<Token> {
        (**self).annotate(text)
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn polarity(&self, text: &str) -> f64 {
        (**self).polarity(text)
    }
}
