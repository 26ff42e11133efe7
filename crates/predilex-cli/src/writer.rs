//! Persisting output tables and metrics.

use crate::error::Result;
use predilex_evaluator::MetricsReport;
use predilex_extractor::{ExtractionRow, FeatureRow};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write a header and string rows as CSV.
pub fn write_csv<W, I>(writer: W, columns: &[&str], rows: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(columns)?;
    for row in rows {
        csv.write_record(&row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the extraction table.
pub fn write_extraction_rows(path: &Path, rows: &[ExtractionRow]) -> Result<()> {
    let file = fs::File::create(path)?;
    write_csv(file, &ExtractionRow::COLUMNS, rows.iter().map(ExtractionRow::values))?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the feature table.
pub fn write_feature_rows(path: &Path, rows: &[FeatureRow]) -> Result<()> {
    let file = fs::File::create(path)?;
    write_csv(file, &FeatureRow::columns(), rows.iter().map(FeatureRow::values))?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write the metrics as pretty JSON.
pub fn write_metrics(path: &Path, report: &MetricsReport) -> Result<()> {
    fs::write(path, report.to_json()?)?;
    info!("Wrote metrics to {}", path.display());
    Ok(())
}
