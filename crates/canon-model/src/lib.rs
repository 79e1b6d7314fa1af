//! Data model for company-name canonicalization.
//!
//! This crate holds the types shared by the ingest, transform and output
//! crates:
//!
//! - **dataset**: the name column flowing through the pipeline and the
//!   raw/canonical pairs it produces
//! - **metrics**: per-stage distinct-count diagnostics
//! - **options**: pipeline configuration
//! - **error**: input shape failures

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod options;

pub use dataset::{
    CANONICAL_NAME_COLUMN, CanonicalPair, CanonicalizationResult, NameDataset, NameRecord,
    RAW_NAME_COLUMN, distinct_count,
};
pub use error::{InputShapeError, Result};
pub use metrics::{PipelineReport, StageMetric};
pub use options::{PipelineOptions, SuffixMode};
