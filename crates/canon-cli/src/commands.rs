use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info_span;

use canon_ingest::{IngestOptions, load_name_dataset};
use canon_model::PipelineOptions;
use canon_output::{write_canonical_csv, write_report_json};
use canon_transform::canonicalize;

use crate::types::{CanonicalizeArgs, RunOutcome};

/// Load, canonicalize and write one file of company names.
///
/// The output file is only touched once the pipeline has finished.
pub fn run_canonicalize(args: &CanonicalizeArgs) -> Result<RunOutcome> {
    let span = info_span!(
        "run",
        input = %args.filepath_in.display(),
        output = %args.filepath_out.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let ingest = IngestOptions::new()
        .with_column(args.column.clone())
        .with_null_values(args.null_values.clone());
    let dataset = load_name_dataset(&args.filepath_in, &ingest)
        .with_context(|| format!("read {}", args.filepath_in.display()))?;

    let options = PipelineOptions::new()
        .with_suffix_mode(args.suffix_mode)
        .with_metrics(args.wants_metrics());
    let output = canonicalize(&dataset, options).context("canonicalize company names")?;

    write_canonical_csv(&args.filepath_out, &output.result)
        .with_context(|| format!("write {}", args.filepath_out.display()))?;

    if let (Some(path), Some(report)) = (&args.metrics_out, &output.report) {
        write_report_json(path, report)
            .with_context(|| format!("write metrics {}", path.display()))?;
    }

    tracing::info!(
        rows = output.result.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunOutcome {
        output: args.filepath_out.clone(),
        rows: output.result.len(),
        report: output.report,
        metrics_out: args.metrics_out.clone(),
    })
}
