/// Lower-cases every character with simple, locale-independent folding.
pub fn to_lower_case(value: &str) -> String {
    value.to_lowercase()
}

/// Returns true if the value contains an uppercase ASCII letter.
pub(crate) fn has_ascii_uppercase(value: &str) -> bool {
    value.bytes().any(|byte| byte.is_ascii_uppercase())
}
