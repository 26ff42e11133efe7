//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::output::Formatter;
use crate::pipeline;
use crate::writer;
use predilex_domain::ExtractionResult;
use predilex_evaluator::Evaluator;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, mut config: Config, formatter: &Formatter) -> Result<()> {
    config.apply_input(&args.input);
    if let Some(dates) = args.dates {
        config.extraction.date_assignment = dates.into();
    }
    if let Some(scoring) = args.scoring {
        config.evaluation.date_scoring = scoring.into();
    }
    config.validate()?;
    let output = args.output.unwrap_or_else(|| config.output.extraction_csv.clone());
    let metrics_path = args.metrics.or_else(|| config.output.metrics_json.clone());

    let records = loader::load_records(&config.paths.ids_csv, &config.paths.labels_csv, config.limit)?;
    let texts = loader::load_texts(&config.paths.text_dir, &config.paths.text_extension).await?;

    let rows = pipeline::run_extraction(&records, &texts, &config.extraction, config.parallel);
    writer::write_extraction_rows(&output, &rows)?;

    let pairs: Vec<(ExtractionResult, ExtractionResult)> =
        rows.iter().map(|row| (row.extracted.clone(), row.truth())).collect();
    let report = Evaluator::new(config.evaluation.clone()).score(&pairs);

    if let Some(path) = &metrics_path {
        writer::write_metrics(path, &report)?;
    }

    if !formatter.is_quiet() {
        let skipped = records.len() - rows.len();
        println!(
            "{}",
            formatter.success(&format!("Processed {} document(s), results in {}", rows.len(), output.display()))
        );
        if skipped > 0 {
            println!("{}", formatter.warning(&format!("{} record(s) had a missing or empty document", skipped)));
        }
    }
    println!("{}", formatter.format_metrics(&report)?);

    Ok(())
}
