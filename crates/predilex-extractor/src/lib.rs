//! Predilex Extractor
//!
//! Recovers gender, accident date and consolidation date from French
//! legal/medical narratives, and turns each document into a fixed-schema
//! feature row.
//!
//! # Overview
//!
//! Everything here is rule-based and pure: each call depends only on the
//! text it is given and on an [`ExtractionConfig`] built once per run.
//!
//! # Architecture
//!
//! ```text
//! text ──► normalizer   raw date token → YYYY-MM-DD
//!      ├─► gender       title-first heuristic / marker counts
//!      ├─► dates        pattern matches → accident / consolidation slots
//!      ├─► Extractor    ExtractionResult per document
//!      └─► FeatureBuilder  FeatureVector per document
//! ```
//!
//! # Example Usage
//!
//! ```
//! use predilex_extractor::{Extractor, ExtractionConfig, RuleBasedAnnotator};
//! use predilex_domain::Gender;
//!
//! let config = ExtractionConfig::default();
//! let extractor = Extractor::new(&config, RuleBasedAnnotator::default());
//!
//! let result = extractor.extract("Madame Durand, accident du 12/05/2020");
//! assert_eq!(result.gender, Gender::Female);
//! assert_eq!(result.accident_date.unwrap().as_str(), "2020-05-12");
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod annotator;
mod sentiment;
mod extractor;
mod features;

pub mod dates;
pub mod gender;
pub mod normalizer;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::{DateAssignment, ExtractionConfig, GenderVocabulary};
pub use types::{ExtractionRow, FeatureRow, RECORD_COLUMNS};
pub use annotator::RuleBasedAnnotator;
pub use sentiment::LexiconSentiment;
pub use extractor::Extractor;
pub use features::{FeatureBuilder, CONSOLIDATE_VERB, FALL_VERB};
pub use dates::{ContextualDateExtractor, DateSlots};
pub use gender::{GenderInferer, GenderMarkers};
