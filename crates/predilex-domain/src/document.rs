//! Documents and their ground-truth records

use crate::{CanonicalDate, Gender};

/// A narrative text to extract from
///
/// Owned by the caller and passed by reference into extraction calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Record identifier the document belongs to
    pub id: i64,

    /// File name the text was loaded from
    pub filename: String,

    /// Raw text content
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(id: i64, filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// Ground truth for one document
///
/// Produced by joining the identifier table with the label table on `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Record identifier (join key)
    pub id: i64,

    /// File name of the associated document
    pub filename: String,

    /// Labeled gender
    pub gender: Gender,

    /// Labeled accident date, `None` when not determined
    pub accident_date: Option<CanonicalDate>,

    /// Labeled consolidation date, `None` when not determined
    pub consolidation_date: Option<CanonicalDate>,
}
