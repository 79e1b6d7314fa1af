//! Name column types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Column name for the original, pre-pipeline value in the output.
pub const RAW_NAME_COLUMN: &str = "RAW_NAME";

/// Column name for the canonical value in the output.
pub const CANONICAL_NAME_COLUMN: &str = "CANONICAL_NAME";

/// One input row. Identity is the row position inside its [`NameDataset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Company name as read from the source; empty when the value was missing.
    pub raw_name: String,
}

impl NameRecord {
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
        }
    }
}

/// Ordered sequence of names. The row count never changes once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDataset {
    /// Name of the source column the values were taken from, if known.
    pub source_column: Option<String>,
    records: Vec<NameRecord>,
}

impl NameDataset {
    /// Build a dataset from raw values. `None` values become the empty string.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let records = values
            .into_iter()
            .map(|value| NameRecord::new(value.map(Into::into).unwrap_or_default()))
            .collect();
        Self {
            source_column: None,
            records,
        }
    }

    /// Record which source column the names came from.
    #[must_use]
    pub fn with_source_column(mut self, column: impl Into<String>) -> Self {
        self.source_column = Some(column.into());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    /// Iterate over the raw names in row order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.raw_name.as_str())
    }

    /// Number of distinct raw names.
    pub fn distinct_count(&self) -> usize {
        distinct_count(self.names())
    }
}

impl<S: Into<String>> FromIterator<S> for NameDataset {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_values(iter.into_iter().map(Some))
    }
}

/// One output row: the original value and its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPair {
    pub raw_name: String,
    pub canonical_name: String,
}

/// Raw names zipped with their canonical names, in input row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalizationResult {
    pairs: Vec<CanonicalPair>,
}

impl CanonicalizationResult {
    /// Zip a dataset with the canonical column produced for it.
    ///
    /// Returns `None` when the lengths differ; callers treat that as a broken
    /// row-count invariant.
    pub fn zip(dataset: &NameDataset, canonical: Vec<String>) -> Option<Self> {
        if dataset.len() != canonical.len() {
            return None;
        }
        let pairs = dataset
            .names()
            .zip(canonical)
            .map(|(raw, canonical_name)| CanonicalPair {
                raw_name: raw.to_string(),
                canonical_name,
            })
            .collect();
        Some(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[CanonicalPair] {
        &self.pairs
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.canonical_name.as_str())
    }

    pub fn raw_names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.raw_name.as_str())
    }

    pub fn raw_distinct(&self) -> usize {
        distinct_count(self.raw_names())
    }

    pub fn canonical_distinct(&self) -> usize {
        distinct_count(self.canonical_names())
    }
}

/// Count distinct values in a column.
pub fn distinct_count<'a>(values: impl IntoIterator<Item = &'a str>) -> usize {
    values.into_iter().collect::<HashSet<_>>().len()
}
