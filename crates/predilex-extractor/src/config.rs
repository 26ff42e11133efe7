//! Configuration for the Extractor

use crate::error::ExtractorError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// How discovered dates are assigned to the accident / consolidation slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateAssignment {
    /// Role keywords within a word window around each date decide the slot
    Contextual,
    /// First date is the accident, second the consolidation
    #[default]
    Positional,
}

/// Words and names used to infer gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderVocabulary {
    /// Literal male title checked first by the title-first heuristic
    pub male_title: String,

    /// Literal female title checked by the title-first heuristic
    pub female_title: String,

    /// Lowercase male title markers counted by the marker heuristic
    pub male_title_markers: Vec<String>,

    /// Lowercase female title markers counted by the marker heuristic
    pub female_title_markers: Vec<String>,

    /// Male subject pronoun, counted only as an isolated word
    pub male_pronoun: String,

    /// Female subject pronoun, counted only as an isolated word
    pub female_pronoun: String,

    /// Male first names, checked in list order
    pub male_names: Vec<String>,

    /// Female first names, checked in list order
    pub female_names: Vec<String>,
}

impl Default for GenderVocabulary {
    fn default() -> Self {
        Self {
            male_title: "Monsieur".to_string(),
            female_title: "Madame".to_string(),
            male_title_markers: strings(&["monsieur", "mr", "m."]),
            female_title_markers: strings(&["madame", "mme", "mme."]),
            male_pronoun: "il".to_string(),
            female_pronoun: "elle".to_string(),
            male_names: strings(&[
                "Jean", "Pierre", "Paul", "Jacques", "Michel", "Louis", "André", "Henri",
                "Robert", "Georges", "Philippe",
            ]),
            female_names: strings(&[
                "Marie", "Jeanne", "Marguerite", "Paulette", "Simone", "Lucie", "Yvonne",
                "Madeleine", "Hélène", "Marcelle", "Sophie",
            ]),
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Words on each side of a date inspected for role keywords
    pub context_window: usize,

    /// Keyword marking an accident date (case-sensitive)
    pub accident_keyword: String,

    /// Keyword marking a consolidation date (case-sensitive)
    pub consolidation_keyword: String,

    /// Slot assignment strategy for the extraction pipeline (the feature
    /// builder always assigns contextually)
    pub date_assignment: DateAssignment,

    /// Keywords summed into `keyword_count` (case-insensitive)
    pub keywords: Vec<String>,

    /// Latest year considered plausible; the current year when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_plausible_year: Option<i32>,

    /// Gender vocabulary
    pub vocabulary: GenderVocabulary,
}

impl Default for ExtractionConfig {
    /// Default configuration matching the reference heuristics
    fn default() -> Self {
        Self {
            context_window: 10,
            accident_keyword: "accident".to_string(),
            consolidation_keyword: "consolidation".to_string(),
            date_assignment: DateAssignment::Positional,
            keywords: strings(&["accident", "consolidation", "blessure", "choc", "fracture"]),
            max_plausible_year: None,
            vocabulary: GenderVocabulary::default(),
        }
    }
}

impl ExtractionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.accident_keyword.is_empty() {
            return Err(ExtractorError::Config("accident_keyword must not be empty".to_string()));
        }
        if self.consolidation_keyword.is_empty() {
            return Err(ExtractorError::Config(
                "consolidation_keyword must not be empty".to_string(),
            ));
        }
        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err(ExtractorError::Config("keywords must not contain empty entries".to_string()));
        }

        let v = &self.vocabulary;
        if v.male_title.is_empty() || v.female_title.is_empty() {
            return Err(ExtractorError::Config("titles must not be empty".to_string()));
        }
        if v.male_pronoun.trim().is_empty() || v.female_pronoun.trim().is_empty() {
            return Err(ExtractorError::Config("pronouns must not be empty".to_string()));
        }
        if v.male_title_markers.iter().chain(&v.female_title_markers).any(|m| m.is_empty()) {
            return Err(ExtractorError::Config(
                "title markers must not contain empty entries".to_string(),
            ));
        }
        if let Some(year) = self.max_plausible_year {
            if year < 1900 {
                return Err(ExtractorError::Config(format!(
                    "max_plausible_year {} is before 1900",
                    year
                )));
            }
        }
        Ok(())
    }

    /// Latest plausible year, defaulting to the current year
    pub fn plausible_year_limit(&self) -> i32 {
        self.max_plausible_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
