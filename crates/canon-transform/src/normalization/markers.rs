//! Truncation at alias-style markers.

/// Introduces an alternative name: "foo aka bar".
pub const ALIAS_MARKER: &str = " aka ";

/// Introduces a platform or vendor: "foo powered by bar".
pub const POWERED_BY_MARKER: &str = " powered by ";

/// Cuts the value at the leftmost occurrence of `marker`, dropping the marker
/// and everything after it. Returns the value unchanged when the marker is absent.
pub fn truncate_at_marker(value: &str, marker: &str) -> String {
    match value.find(marker) {
        Some(start) => value[..start].to_string(),
        None => value.to_string(),
    }
}
