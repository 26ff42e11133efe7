//! Predilex Domain Layer
//!
//! Core vocabulary shared by every Predilex crate: documents, ground-truth
//! records, extraction results, feature vectors, and the trait interfaces for
//! the linguistic capabilities the extractor relies on.
//!
//! ## Key Concepts
//!
//! - **Document**: a narrative text identified by its file name
//! - **PersonRecord**: the labeled ground truth attached to a document
//! - **ExtractionResult**: gender and the two dates recovered from a document
//! - **FeatureVector**: the fixed-schema row of engineered signals for a document
//! - **Gender**: a single tagged enum, mapped to French or English labels only
//!   when serialized
//!
//! ## Architecture
//!
//! This crate has no external dependencies. Rule-based implementations of the
//! capability traits live in `predilex-extractor`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod date;
pub mod document;
pub mod extraction;
pub mod features;
pub mod gender;
pub mod traits;

// Re-exports for convenience
pub use annotation::{PartOfSpeech, Token};
pub use date::{CanonicalDate, NOT_DETERMINED};
pub use document::{Document, PersonRecord};
pub use extraction::ExtractionResult;
pub use features::{FeatureVector, FEATURE_COLUMNS};
pub use gender::Gender;
