//! Pipeline report JSON export.

use std::path::Path;

use canon_model::PipelineReport;

use crate::common::write_atomic;
use crate::error::{OutputError, Result};

/// Write the report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &PipelineReport) -> Result<()> {
    write_atomic(path, |file| {
        serde_json::to_writer_pretty(file.as_file_mut(), report).map_err(|source| {
            OutputError::Json {
                path: path.to_path_buf(),
                source,
            }
        })
    })?;
    tracing::debug!(path = %path.display(), stages = report.stages.len(), "wrote metrics");
    Ok(())
}
