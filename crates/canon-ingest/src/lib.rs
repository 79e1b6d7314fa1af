//! Company-name ingestion utilities.
//!
//! This crate loads a CSV file into a Polars DataFrame and extracts the single
//! text column the canonicalization pipeline works on.
//!
//! # Features
//!
//! - **CSV Loading**: Read CSV files with every column as text
//! - **Column Selection**: Enforce the one-text-column input shape, by name or
//!   by elimination
//! - **Missing Values**: Empty cells and configured null tokens become `""`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use canon_ingest::{IngestOptions, load_name_dataset};
//!
//! let options = IngestOptions::new().with_column(Some("Skillbox".to_string()));
//! let dataset = load_name_dataset(Path::new("company-names.csv"), &options)?;
//! ```

use std::path::Path;

mod column;
mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_frame, validate_encoding};

// === Column Selection ===
pub use column::{IngestOptions, resolve_name_column, select_name_column};

use canon_model::NameDataset;

/// Read a CSV file and extract its name column.
pub fn load_name_dataset(path: &Path, options: &IngestOptions) -> Result<NameDataset> {
    let df = read_csv_frame(path)?;
    let dataset = select_name_column(&df, options)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        column = dataset.source_column.as_deref().unwrap_or("-"),
        "loaded company names"
    );
    Ok(dataset)
}
