//! Features command implementation.

use crate::cli::FeaturesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::output::Formatter;
use crate::pipeline;
use crate::writer;

/// Execute the features command.
pub async fn execute_features(args: FeaturesArgs, mut config: Config, formatter: &Formatter) -> Result<()> {
    config.apply_input(&args.input);
    config.validate()?;
    let output = args.output.unwrap_or_else(|| config.output.features_csv.clone());

    let records = loader::load_records(&config.paths.ids_csv, &config.paths.labels_csv, config.limit)?;
    let texts = loader::load_texts(&config.paths.text_dir, &config.paths.text_extension).await?;

    let rows = pipeline::run_features(&records, &texts, &config.extraction, config.parallel);
    writer::write_feature_rows(&output, &rows)?;

    if !formatter.is_quiet() {
        println!(
            "{}",
            formatter.success(&format!("Wrote {} feature row(s) to {}", rows.len(), output.display()))
        );
    }

    Ok(())
}
