//! Diagnostics collected around pipeline stages.
//!
//! Metrics are reporting-only. Nothing in the pipeline reads them back.

use serde::{Deserialize, Serialize};

/// Distinct-count change attributed to one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMetric {
    /// Stable stage identifier (e.g. `strip_punctuation`).
    pub stage: String,
    /// Human-readable description used in console diagnostics.
    pub description: String,
    /// Distinct values in the column before the stage ran.
    pub distinct_before: usize,
    /// Distinct values in the column after the stage ran.
    pub distinct_after: usize,
    /// Rows whose value was changed by the stage.
    pub rows_changed: usize,
    /// Breakdown for stages made of several patterns, in application order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substeps: Vec<StageMetric>,
}

impl StageMetric {
    /// `distinct_before - distinct_after`. Negative if the stage split names apart.
    pub fn delta(&self) -> i64 {
        self.distinct_before as i64 - self.distinct_after as i64
    }
}

/// Full diagnostics for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub source_column: Option<String>,
    pub rows: usize,
    /// Distinct raw names after missing-value substitution.
    pub initial_distinct: usize,
    pub stages: Vec<StageMetric>,
    pub final_raw_distinct: usize,
    pub final_canonical_distinct: usize,
}

impl PipelineReport {
    /// Sum of all stage deltas.
    pub fn total_delta(&self) -> i64 {
        self.stages.iter().map(StageMetric::delta).sum()
    }
}
