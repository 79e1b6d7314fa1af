//! Pipeline stages and their fixed order.
//!
//! Later stages rely on invariants established by earlier ones; generic
//! expression removal matches lower-case literals and expects punctuation to be
//! gone. The order lives in [`CANONICAL_STAGES`] and nowhere else.

use serde::{Deserialize, Serialize};

use canon_model::PipelineOptions;

use crate::normalization::{
    ALIAS_MARKER, GENERIC_EXPRESSIONS, POWERED_BY_MARKER, case::has_ascii_uppercase,
    collapse_whitespace, has_ascii_punctuation, strip_generic_expression,
    strip_generic_expressions, strip_punctuation, strip_whitespace, to_lower_case,
    truncate_at_marker,
};

/// One atomic, per-row text transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    StripPunctuation,
    StripWhitespace,
    LowerCase,
    StripGenericExpressions,
    RemoveAliasMarker,
    RemovePoweredByMarker,
    CollapseWhitespace,
}

/// Stage order applied to every name.
pub const CANONICAL_STAGES: [Stage; 8] = [
    Stage::StripPunctuation,
    Stage::StripWhitespace,
    Stage::LowerCase,
    Stage::StripGenericExpressions,
    // Suffix removal can leave edge whitespace behind.
    Stage::StripWhitespace,
    Stage::RemoveAliasMarker,
    Stage::RemovePoweredByMarker,
    Stage::CollapseWhitespace,
];

/// Input condition a stage relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Accepts any string.
    Any,
    /// No ASCII punctuation and no uppercase ASCII letters.
    LowerCaseWithoutPunctuation,
}

impl Precondition {
    /// Check the condition against one value.
    pub fn holds(self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::LowerCaseWithoutPunctuation => {
                !has_ascii_uppercase(value) && !has_ascii_punctuation(value)
            }
        }
    }
}

impl Stage {
    /// Stable identifier used in metrics and log fields.
    pub fn id(self) -> &'static str {
        match self {
            Self::StripPunctuation => "strip_punctuation",
            Self::StripWhitespace => "strip_whitespace",
            Self::LowerCase => "lower_case",
            Self::StripGenericExpressions => "strip_generic_expressions",
            Self::RemoveAliasMarker => "remove_alias_marker",
            Self::RemovePoweredByMarker => "remove_powered_by_marker",
            Self::CollapseWhitespace => "collapse_whitespace",
        }
    }

    /// Description used in the "<description> modified <N> company names" line.
    pub fn description(self) -> &'static str {
        match self {
            Self::StripPunctuation => "Removing punctuation",
            Self::StripWhitespace => "Removing leading and trailing whitespace",
            Self::LowerCase => "Making text lower case operation",
            Self::StripGenericExpressions => "Removing generic expressions",
            Self::RemoveAliasMarker => "Removing alias expressions",
            Self::RemovePoweredByMarker => "Removing 'powered by' expressions",
            Self::CollapseWhitespace => "Removing multiple whitespaces",
        }
    }

    pub fn precondition(self) -> Precondition {
        match self {
            Self::StripGenericExpressions => Precondition::LowerCaseWithoutPunctuation,
            _ => Precondition::Any,
        }
    }

    /// Apply the stage to one name.
    pub fn apply(self, value: &str, options: &PipelineOptions) -> String {
        match self {
            Self::StripPunctuation => strip_punctuation(value),
            Self::StripWhitespace => strip_whitespace(value),
            Self::LowerCase => to_lower_case(value),
            Self::StripGenericExpressions => strip_generic_expressions(value, options.suffix_mode),
            Self::RemoveAliasMarker => truncate_at_marker(value, ALIAS_MARKER),
            Self::RemovePoweredByMarker => truncate_at_marker(value, POWERED_BY_MARKER),
            Self::CollapseWhitespace => collapse_whitespace(value),
        }
    }

    /// Named patterns the stage applies one after another, if it has any.
    ///
    /// Applying [`Stage::apply_substep`] for each index in order equals one
    /// single-pass [`Stage::apply`].
    pub fn substeps(self) -> &'static [&'static str] {
        match self {
            Self::StripGenericExpressions => GENERIC_EXPRESSIONS,
            _ => &[],
        }
    }

    /// Apply only the sub-step at `index`. Stages without sub-steps return
    /// the value unchanged.
    pub fn apply_substep(self, value: &str, index: usize) -> String {
        match self {
            Self::StripGenericExpressions => strip_generic_expression(value, index),
            _ => value.to_string(),
        }
    }

    /// Apply the stage to every name in a column, returning a new column.
    pub fn apply_column(self, values: &[String], options: &PipelineOptions) -> Vec<String> {
        values
            .iter()
            .map(|value| self.apply(value, options))
            .collect()
    }
}
