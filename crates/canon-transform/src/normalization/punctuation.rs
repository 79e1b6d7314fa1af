//! ASCII punctuation removal.

/// Removes every ASCII punctuation character without inserting whitespace.
///
/// The removed set is the 32 printable punctuation characters
/// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``. Non-ASCII symbols are kept.
pub fn strip_punctuation(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_ascii_punctuation()).collect()
}

/// Returns true if the value still contains ASCII punctuation.
pub fn has_ascii_punctuation(value: &str) -> bool {
    value.chars().any(|ch| ch.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_full_ascii_set() {
        let all = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
        assert_eq!(all.len(), 32);
        assert_eq!(strip_punctuation(all), "");
    }

    #[test]
    fn joins_without_spaces() {
        assert_eq!(strip_punctuation("Acme, Inc."), "Acme Inc");
        assert_eq!(strip_punctuation("A.B.C. Co."), "ABC Co");
        assert_eq!(strip_punctuation("Smith-Jones"), "SmithJones");
    }

    #[test]
    fn keeps_non_ascii_symbols() {
        assert_eq!(strip_punctuation("Café «Noir»"), "Café «Noir»");
    }

    #[test]
    fn detects_remaining_punctuation() {
        assert!(has_ascii_punctuation("a.b"));
        assert!(!has_ascii_punctuation("ab"));
    }
}
