//! Loading the identifier table, the ground truth and the document texts.

use crate::error::{CliError, Result};
use predilex_domain::{CanonicalDate, ExtractionResult, Gender, PersonRecord};
use predilex_extractor::ExtractionRow;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// A row of the identifier table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdRow {
    /// Record identifier
    #[serde(rename = "ID")]
    pub id: i64,

    /// Document file name
    pub filename: String,
}

/// A row of the ground-truth table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelRow {
    /// Record identifier
    #[serde(rename = "ID")]
    pub id: i64,

    /// Gender label (`homme`, `femme` or `n.c.`)
    pub sexe: String,

    /// Accident date, `n.c.` when unknown
    #[serde(default)]
    pub date_accident: String,

    /// Consolidation date, `n.c.` when unknown
    #[serde(default)]
    pub date_consolidation: String,
}

const ID_COLUMNS: [&str; 2] = ["ID", "filename"];
const LABEL_COLUMNS: [&str; 4] = ["ID", "sexe", "date_accident", "date_consolidation"];

/// Read the identifier table.
pub fn read_ids(path: &Path, limit: Option<usize>) -> Result<Vec<IdRow>> {
    read_table(path, &ID_COLUMNS, limit)
}

/// Read the ground-truth table.
pub fn read_labels(path: &Path, limit: Option<usize>) -> Result<Vec<LabelRow>> {
    read_table(path, &LABEL_COLUMNS, limit)
}

fn read_table<T: DeserializeOwned>(path: &Path, required: &[&str], limit: Option<usize>) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    check_columns(path, &headers, required)?;

    let rows = reader
        .deserialize()
        .take(limit.unwrap_or(usize::MAX))
        .collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn check_columns(path: &Path, headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(CliError::MissingColumn {
                file: path.display().to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Inner join of the two tables on `ID`, in identifier-table order.
///
/// An `ID` repeated in either table is an error.
pub fn merge(ids: Vec<IdRow>, labels: Vec<LabelRow>) -> Result<Vec<PersonRecord>> {
    let mut by_id: HashMap<i64, LabelRow> = HashMap::with_capacity(labels.len());
    for label in labels {
        let id = label.id;
        if by_id.insert(id, label).is_some() {
            return Err(CliError::InvalidInput(format!("Duplicate ID {} in ground truth", id)));
        }
    }

    let mut seen = HashSet::with_capacity(ids.len());
    let mut records = Vec::with_capacity(ids.len());
    for row in ids {
        if !seen.insert(row.id) {
            return Err(CliError::InvalidInput(format!("Duplicate ID {} in identifier table", row.id)));
        }
        let Some(label) = by_id.get(&row.id) else {
            debug!("ID {} has no ground truth, dropped by merge", row.id);
            continue;
        };
        records.push(PersonRecord {
            id: row.id,
            filename: row.filename,
            gender: parse_gender(&label.sexe, row.id)?,
            accident_date: CanonicalDate::parse_cell(&label.date_accident),
            consolidation_date: CanonicalDate::parse_cell(&label.date_consolidation),
        });
    }
    Ok(records)
}

fn parse_gender(label: &str, id: i64) -> Result<Gender> {
    Gender::parse(label)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown gender label '{}' for ID {}", label, id)))
}

/// Read the merged ground truth described by the two tables.
pub fn load_records(ids_csv: &Path, labels_csv: &Path, limit: Option<usize>) -> Result<Vec<PersonRecord>> {
    let ids = read_ids(ids_csv, limit)?;
    let labels = read_labels(labels_csv, limit)?;
    let records = merge(ids, labels)?;
    info!("Loaded {} ground-truth records", records.len());
    Ok(records)
}

/// Read every file with the given extension directly under `dir`.
///
/// Returns file name to content. Files must be valid UTF-8.
pub async fn load_texts(dir: &Path, extension: &str) -> Result<HashMap<String, String>> {
    let mut texts = HashMap::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let content = fs::read_to_string(&path).await.map_err(|e| {
            CliError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
        })?;
        texts.insert(name.to_string(), content);
    }

    info!("Loaded {} documents from {}", texts.len(), dir.display());
    Ok(texts)
}

/// A saved row of the extraction table.
#[derive(Debug, Deserialize)]
struct SavedExtraction {
    #[serde(rename = "ID")]
    id: i64,
    real_gender: String,
    gender_extracted: String,
    real_accident_date: String,
    accident_date_extracted: String,
    real_consolidation_date: String,
    consolidation_date_extracted: String,
}

/// Read an extraction table back as `(extracted, ground truth)` pairs.
pub fn read_extraction_csv(path: &Path) -> Result<Vec<(ExtractionResult, ExtractionResult)>> {
    let rows: Vec<SavedExtraction> = read_table(path, &ExtractionRow::COLUMNS, None)?;

    rows.into_iter()
        .map(|row| {
            let extracted = ExtractionResult {
                gender: parse_gender(&row.gender_extracted, row.id)?,
                accident_date: CanonicalDate::parse_cell(&row.accident_date_extracted),
                consolidation_date: CanonicalDate::parse_cell(&row.consolidation_date_extracted),
            };
            let truth = ExtractionResult {
                gender: parse_gender(&row.real_gender, row.id)?,
                accident_date: CanonicalDate::parse_cell(&row.real_accident_date),
                consolidation_date: CanonicalDate::parse_cell(&row.real_consolidation_date),
            };
            Ok((extracted, truth))
        })
        .collect()
}
