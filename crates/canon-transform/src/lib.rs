//! Company-name canonicalization pipeline.
//!
//! This crate provides the normalization stages and the driver that applies
//! them in a fixed order:
//!
//! - **normalization**: per-name text transforms (punctuation, whitespace,
//!   case, generic expressions, alias markers)
//! - **stage**: the [`Stage`] enum and [`CANONICAL_STAGES`] order
//! - **pipeline**: [`CanonicalPipeline`], which threads a
//!   [`NameDataset`](canon_model::NameDataset) through every stage and
//!   collects per-stage metrics on request
//!
//! # Example
//!
//! ```
//! use canon_model::{NameDataset, PipelineOptions};
//! use canon_transform::canonicalize;
//!
//! let dataset: NameDataset = ["Acme, Inc.", "ACME INC"].into_iter().collect();
//! let output = canonicalize(&dataset, PipelineOptions::default()).unwrap();
//! assert_eq!(output.result.canonical_distinct(), 1);
//! ```

mod error;
pub mod normalization;
pub mod pipeline;
pub mod stage;

pub use error::TransformError;
pub use pipeline::{CanonicalPipeline, PipelineOutput, canonicalize};
pub use stage::{CANONICAL_STAGES, Precondition, Stage};
