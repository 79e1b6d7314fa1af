//! Pipeline driver.
//!
//! Threads the name column through [`CANONICAL_STAGES`] and, when metrics are
//! enabled, measures the distinct-count change around each stage. Stages never
//! see the options that control reporting. Stages with named sub-steps get a
//! per-sub-step breakdown measured the same way.
//!
//! With [`SuffixMode::Converge`] the whole stage list is repeated per name
//! until it stops changing, so a suffix exposed by a later stage (alias
//! truncation, whitespace collapsing) is still removed.

use std::time::Instant;

use tracing::{debug, debug_span, info, info_span};

use canon_model::{
    CanonicalizationResult, NameDataset, PipelineOptions, PipelineReport, StageMetric,
    SuffixMode, distinct_count,
};

use crate::error::TransformError;
use crate::stage::{CANONICAL_STAGES, Stage};

/// Output of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Raw names paired with canonical names, in input order.
    pub result: CanonicalizationResult,
    /// Per-stage diagnostics; present when metrics were requested.
    pub report: Option<PipelineReport>,
}

const CONVERGE_ID: &str = "converge";
const CONVERGE_DESCRIPTION: &str = "Repeating all stages until names stop changing";

/// The canonicalization pipeline with its fixed stage order.
#[derive(Debug, Clone)]
pub struct CanonicalPipeline {
    stages: Vec<Stage>,
    options: PipelineOptions,
}

impl Default for CanonicalPipeline {
    fn default() -> Self {
        Self::new(PipelineOptions::default())
    }
}

impl CanonicalPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            stages: CANONICAL_STAGES.to_vec(),
            options,
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Canonicalize a single name.
    pub fn canonicalize_name(&self, raw: &str) -> String {
        self.settle(self.apply_stages(raw))
    }

    fn apply_stages(&self, raw: &str) -> String {
        self.stages
            .iter()
            .fold(raw.to_string(), |value, stage| stage.apply(&value, &self.options))
    }

    /// Repeat full passes until the value is stable. Single-pass mode
    /// returns the value as is.
    fn settle(&self, mut value: String) -> String {
        if self.options.suffix_mode != SuffixMode::Converge {
            return value;
        }
        // Passes after the first only remove text, so this terminates.
        loop {
            let next = self.apply_stages(&value);
            if next == value {
                return value;
            }
            value = next;
        }
    }

    /// Run every stage over the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::RowCountChanged`] if a stage breaks the
    /// fixed row count.
    pub fn run(&self, dataset: &NameDataset) -> Result<PipelineOutput, TransformError> {
        let rows = dataset.len();
        let span = info_span!(
            "canonicalize",
            rows,
            source_column = dataset.source_column.as_deref().unwrap_or("-")
        );
        let _guard = span.enter();
        let start = Instant::now();

        let mut column: Vec<String> = dataset.names().map(str::to_string).collect();
        let mut report = self.options.collect_metrics.then(|| {
            let initial_distinct = distinct_count(column.iter().map(String::as_str));
            info!(
                distinct = initial_distinct,
                "Number of unique company names: {initial_distinct}"
            );
            PipelineReport {
                source_column: dataset.source_column.clone(),
                rows,
                initial_distinct,
                ..PipelineReport::default()
            }
        });

        for &stage in &self.stages {
            let _stage_guard = debug_span!("stage", stage = stage.id()).entered();
            debug_assert!(
                column.iter().all(|value| stage.precondition().holds(value)),
                "precondition of stage {} violated",
                stage.id()
            );

            let next = stage.apply_column(&column, &self.options);
            if next.len() != column.len() {
                return Err(TransformError::RowCountChanged {
                    stage: stage.id(),
                    before: column.len(),
                    after: next.len(),
                });
            }

            if let Some(report) = report.as_mut() {
                let mut metric = measure_stage(
                    stage.id(),
                    stage.description(),
                    previous_distinct(report),
                    &column,
                    &next,
                );
                metric.substeps = measure_substeps(stage, metric.distinct_before, &column);
                info!(
                    stage = stage.id(),
                    before = metric.distinct_before,
                    after = metric.distinct_after,
                    delta = metric.delta(),
                    rows_changed = metric.rows_changed,
                    "{} modified {} company names",
                    metric.description,
                    metric.delta()
                );
                report.stages.push(metric);
            }
            column = next;
        }

        if self.options.suffix_mode == SuffixMode::Converge {
            let next: Vec<String> = column
                .iter()
                .map(|value| self.settle(value.clone()))
                .collect();
            if let Some(report) = report.as_mut() {
                let metric = measure_stage(
                    CONVERGE_ID,
                    CONVERGE_DESCRIPTION,
                    previous_distinct(report),
                    &column,
                    &next,
                );
                info!(
                    stage = CONVERGE_ID,
                    delta = metric.delta(),
                    rows_changed = metric.rows_changed,
                    "{} modified {} company names",
                    metric.description,
                    metric.delta()
                );
                report.stages.push(metric);
            }
            column = next;
        }

        let canonical_len = column.len();
        let result = CanonicalizationResult::zip(dataset, column).ok_or(
            TransformError::RowCountChanged {
                stage: "pipeline",
                before: rows,
                after: canonical_len,
            },
        )?;

        if let Some(report) = report.as_mut() {
            report.final_raw_distinct = result.raw_distinct();
            report.final_canonical_distinct = result.canonical_distinct();
            info!(
                raw = report.final_raw_distinct,
                canonical = report.final_canonical_distinct,
                "From {} unique company names, there are now {} Canonical names",
                report.final_raw_distinct,
                report.final_canonical_distinct
            );
        }
        debug!(
            rows,
            duration_ms = start.elapsed().as_millis(),
            "canonicalization complete"
        );

        Ok(PipelineOutput { result, report })
    }
}

/// Run the canonical pipeline with the given options.
pub fn canonicalize(
    dataset: &NameDataset,
    options: PipelineOptions,
) -> Result<PipelineOutput, TransformError> {
    CanonicalPipeline::new(options).run(dataset)
}

fn previous_distinct(report: &PipelineReport) -> usize {
    report
        .stages
        .last()
        .map_or(report.initial_distinct, |metric| metric.distinct_after)
}

fn measure_stage(
    id: &str,
    description: &str,
    distinct_before: usize,
    before: &[String],
    after: &[String],
) -> StageMetric {
    let rows_changed = before.iter().zip(after).filter(|(a, b)| a != b).count();
    StageMetric {
        stage: id.to_string(),
        description: description.to_string(),
        distinct_before,
        distinct_after: distinct_count(after.iter().map(String::as_str)),
        rows_changed,
        substeps: Vec::new(),
    }
}

/// Measure each named sub-step of `stage` applied in order to `column`.
///
/// Covers one round of sub-steps; under [`SuffixMode::Converge`] the stage
/// total may exceed their sum.
fn measure_substeps(stage: Stage, distinct_before: usize, column: &[String]) -> Vec<StageMetric> {
    let mut current = column.to_vec();
    let mut previous = distinct_before;
    let mut metrics = Vec::with_capacity(stage.substeps().len());
    for (index, pattern) in stage.substeps().iter().enumerate() {
        let next: Vec<String> = current
            .iter()
            .map(|value| stage.apply_substep(value, index))
            .collect();
        let metric = measure_stage(
            &format!("{}:{}", stage.id(), pattern.trim()),
            &format!("Removing '{pattern}'"),
            previous,
            &current,
            &next,
        );
        debug!(
            stage = stage.id(),
            pattern = *pattern,
            delta = metric.delta(),
            rows_changed = metric.rows_changed,
            "{} modified {} company names",
            metric.description,
            metric.delta()
        );
        previous = metric.distinct_after;
        metrics.push(metric);
        current = next;
    }
    metrics
}
