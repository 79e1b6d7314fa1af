//! Name column selection and missing-value handling.

use polars::prelude::{DataFrame, DataType};
use serde::{Deserialize, Serialize};

use canon_model::{InputShapeError, NameDataset};

use crate::error::Result;

/// Options controlling how the name column is picked from a frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Source column holding the names. When unset the input must have
    /// exactly one column.
    pub column: Option<String>,

    /// Cell values treated as missing in addition to empty cells
    /// (e.g. `"NA"`, `"N/A"`). Compared exactly.
    #[serde(default)]
    pub null_values: Vec<String>,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column(mut self, column: Option<String>) -> Self {
        self.column = column;
        self
    }

    #[must_use]
    pub fn with_null_values(mut self, values: Vec<String>) -> Self {
        self.null_values = values;
        self
    }

    fn is_null_value(&self, value: &str) -> bool {
        self.null_values.iter().any(|token| token == value)
    }
}

fn clean_header(name: &str) -> &str {
    name.trim_start_matches('\u{feff}').trim()
}

/// Pick the source column from the available headers.
///
/// A requested column matches exactly first, then case-insensitively after
/// trimming. Without a request there must be exactly one column.
pub fn resolve_name_column(
    headers: &[String],
    requested: Option<&str>,
) -> std::result::Result<String, InputShapeError> {
    if headers.is_empty() {
        return Err(InputShapeError::NoColumns);
    }
    match requested {
        Some(requested) => {
            if let Some(exact) = headers.iter().find(|header| header.as_str() == requested) {
                return Ok(exact.clone());
            }
            let wanted = requested.trim();
            headers
                .iter()
                .find(|header| clean_header(header).eq_ignore_ascii_case(wanted))
                .cloned()
                .ok_or_else(|| InputShapeError::ColumnNotFound {
                    column: requested.to_string(),
                    available: headers.to_vec(),
                })
        }
        None if headers.len() == 1 => Ok(headers[0].clone()),
        None => Err(InputShapeError::AmbiguousColumns {
            columns: headers.to_vec(),
        }),
    }
}

/// Extract the name column from a frame as a [`NameDataset`].
///
/// Nulls and configured null values become the empty string.
pub fn select_name_column(df: &DataFrame, options: &IngestOptions) -> Result<NameDataset> {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    let column_name = resolve_name_column(&headers, options.column.as_deref())?;

    let column = df.column(&column_name)?;
    let text = column
        .cast(&DataType::String)
        .map_err(|e| InputShapeError::NotText {
            column: column_name.clone(),
            reason: e.to_string(),
        })?;
    let values = text.str()?;

    let dataset = NameDataset::from_values(
        values
            .iter()
            .map(|value| value.filter(|value| !options.is_null_value(value))),
    )
    .with_source_column(clean_header(&column_name));

    tracing::debug!(
        column = %column_name,
        rows = dataset.len(),
        missing = values.null_count(),
        "selected name column"
    );
    Ok(dataset)
}
