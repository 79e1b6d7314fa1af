use thiserror::Error;

/// Errors raised by the pipeline driver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A stage returned a column of a different length than it was given.
    #[error("stage {stage} changed the row count from {before} to {after}")]
    RowCountChanged {
        stage: &'static str,
        before: usize,
        after: usize,
    },
}
