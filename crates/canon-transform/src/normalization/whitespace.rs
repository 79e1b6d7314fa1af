//! Whitespace normalization.

/// Removes leading and trailing whitespace. Internal whitespace is untouched.
pub fn strip_whitespace(value: &str) -> String {
    value.trim().to_string()
}

/// Replaces every whitespace run with a single space.
///
/// Leading and trailing whitespace disappears as a side effect.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
