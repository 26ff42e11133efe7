//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use predilex_evaluator::MetricsReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an evaluation report.
    pub fn format_metrics(&self, report: &MetricsReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(report.to_json()?),
            OutputFormat::Table => Ok(self.format_metrics_table(report)),
            OutputFormat::Quiet => Ok(Self::format_metrics_quiet(report)),
        }
    }

    /// One row per field, one column per score.
    fn format_metrics_table(&self, report: &MetricsReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Precision", "Recall", "F1"]);

        for field in ["gender", "accident_date", "consolidation_date"] {
            let cell = |metric: &str| {
                report
                    .get(&format!("{}_{}", field, metric))
                    .map(|value| self.score(value))
                    .unwrap_or_default()
            };
            builder.push_record([
                field.to_string(),
                cell("precision"),
                cell("recall"),
                cell("f1_score"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// `name value` lines.
    fn format_metrics_quiet(report: &MetricsReport) -> String {
        report
            .iter()
            .map(|(name, value)| format!("{} {:.4}", name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether messages other than the requested data should be printed.
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet | OutputFormat::Json)
    }

    fn score(&self, value: f64) -> String {
        let text = format!("{:.4}", value);
        let color = if value >= 0.9 {
            "green"
        } else if value >= 0.5 {
            "yellow"
        } else {
            "red"
        };
        self.colorize(&text, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
