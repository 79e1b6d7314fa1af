use std::path::PathBuf;

use canon_model::{PipelineReport, SuffixMode};

/// Default input file when no path is given.
pub const DEFAULT_INPUT: &str = "company-names.csv";

/// Default output file when no path is given.
pub const DEFAULT_OUTPUT: &str = "company-canonical-names.csv";

/// How verbose diagnostics are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per stage.
    #[default]
    Lines,
    /// A comfy-table summary.
    Table,
    /// The full report as JSON.
    Json,
}

/// Everything one canonicalization run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct CanonicalizeArgs {
    pub filepath_in: PathBuf,
    pub filepath_out: PathBuf,
    pub verbose: bool,
    pub column: Option<String>,
    pub null_values: Vec<String>,
    pub suffix_mode: SuffixMode,
    pub report_format: ReportFormat,
    pub metrics_out: Option<PathBuf>,
}

impl CanonicalizeArgs {
    pub fn new(filepath_in: impl Into<PathBuf>, filepath_out: impl Into<PathBuf>) -> Self {
        Self {
            filepath_in: filepath_in.into(),
            filepath_out: filepath_out.into(),
            verbose: false,
            column: None,
            null_values: Vec::new(),
            suffix_mode: SuffixMode::default(),
            report_format: ReportFormat::default(),
            metrics_out: None,
        }
    }

    /// Metrics are needed for console diagnostics or the JSON export.
    pub fn wants_metrics(&self) -> bool {
        self.verbose || self.metrics_out.is_some()
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub output: PathBuf,
    pub rows: usize,
    pub report: Option<PipelineReport>,
    pub metrics_out: Option<PathBuf>,
}
