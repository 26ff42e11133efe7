//! Evaluate command implementation.

use crate::cli::EvaluateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::output::Formatter;
use crate::writer;
use predilex_evaluator::Evaluator;

/// Execute the evaluate command.
pub fn execute_evaluate(args: EvaluateArgs, mut config: Config, formatter: &Formatter) -> Result<()> {
    if let Some(scoring) = args.scoring {
        config.evaluation.date_scoring = scoring.into();
    }

    let pairs = loader::read_extraction_csv(&args.input)?;
    let report = Evaluator::new(config.evaluation).score(&pairs);

    if let Some(path) = args.metrics.or(config.output.metrics_json) {
        writer::write_metrics(&path, &report)?;
    }
    println!("{}", formatter.format_metrics(&report)?);

    Ok(())
}
