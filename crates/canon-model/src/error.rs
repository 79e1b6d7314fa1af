use thiserror::Error;

/// The input does not expose exactly one usable text column.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputShapeError {
    /// The source has no columns at all.
    #[error("input has no columns")]
    NoColumns,

    /// More than one column and no column was named explicitly.
    #[error("input has {} columns ({}); choose one with --column", .columns.len(), .columns.join(", "))]
    AmbiguousColumns { columns: Vec<String> },

    /// The requested column is not present.
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// The column could not be read as text.
    #[error("column '{column}' is not a text column: {reason}")]
    NotText { column: String, reason: String },
}

pub type Result<T> = std::result::Result<T, InputShapeError>;
