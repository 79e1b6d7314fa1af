//! Name normalization functions.
//!
//! Each function maps one name to one name and never looks at other rows:
//! - **punctuation**: ASCII punctuation removal
//! - **whitespace**: edge trimming and run collapsing
//! - **case**: lower-casing
//! - **generic**: legal suffix and filler-word removal
//! - **markers**: "aka" and "powered by" truncation

pub mod case;
pub mod generic;
pub mod markers;
pub mod punctuation;
pub mod whitespace;

pub use case::to_lower_case;
pub use generic::{GENERIC_EXPRESSIONS, strip_generic_expression, strip_generic_expressions};
pub use markers::{ALIAS_MARKER, POWERED_BY_MARKER, truncate_at_marker};
pub use punctuation::{has_ascii_punctuation, strip_punctuation};
pub use whitespace::{collapse_whitespace, strip_whitespace};
