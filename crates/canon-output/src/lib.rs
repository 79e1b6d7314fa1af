//! Output writers for canonicalization results.
//!
//! Every file is written to a temporary sibling and renamed into place, so a
//! failed run never leaves a truncated destination behind.

mod common;
mod csv_writer;
mod error;
mod json;

pub use common::ensure_parent_dir;
pub use csv_writer::write_canonical_csv;
pub use error::{OutputError, Result};
pub use json::write_report_json;
