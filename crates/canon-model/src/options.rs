//! Configuration options for the canonicalization pipeline.

use serde::{Deserialize, Serialize};

/// How the generic-expression stage treats stacked suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SuffixMode {
    /// Try every pattern once, in list order.
    ///
    /// A suffix revealed by removing a later-listed one is left in place
    /// ("acme group inc" becomes "acme group").
    #[default]
    SinglePass,
    /// Repeat the pattern list, and then the whole stage list, until the
    /// value stops changing. Canonical names become fixed points.
    Converge,
}

/// Options controlling a pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Suffix stripping strategy.
    pub suffix_mode: SuffixMode,

    /// Compute per-stage distinct-count metrics.
    ///
    /// Costs one distinct count per stage; has no effect on the output.
    pub collect_metrics: bool,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_suffix_mode(mut self, mode: SuffixMode) -> Self {
        self.suffix_mode = mode;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, enable: bool) -> Self {
        self.collect_metrics = enable;
        self
    }
}
