//! Generic legal-entity and filler expression removal.
//!
//! Names are expected lower-case and punctuation-free. Patterns are applied in
//! list order, each as a global replace. End-anchored patterns carry a leading
//! space so they only match a whole final token: "capital group of companies"
//! keeps both "capital" and "group". That includes `inc`, so "zinc" and
//! "acmeinc" are left intact rather than losing a trailing "inc".

use std::sync::LazyLock;

use regex::Regex;

use canon_model::SuffixMode;

/// Patterns removed by [`strip_generic_expressions`], in application order.
pub const GENERIC_EXPRESSIONS: &[&str] = &[
    "the ",
    " and associates",
    " llc$",
    " llp$",
    " lp$",
    " ltd$",
    " group$",
    " partners$",
    " ventures$",
    " inc$",
    " company$",
    " incorporated$",
    " limited$",
    " capital$",
    " consulting$",
    " gmbh$",
    " advisors$",
    " consultants$",
    " labs$",
    " investments$",
    " technologies$",
    " co$",
    " associates$",
    " pllc$",
    " technology$",
    " solutions$",
    " services$",
    " pc$",
    " international$",
    " corporation$",
    " partnership$",
    " corp$",
    " holdings$",
    "llc ",
];

static GENERIC_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    GENERIC_EXPRESSIONS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid generic expression regex"))
        .collect()
});

/// Removes generic expressions from a lower-case, punctuation-free name.
///
/// With [`SuffixMode::SinglePass`] each pattern is tried once, so a suffix
/// exposed by removing a later-listed one survives. [`SuffixMode::Converge`]
/// trims trailing whitespace and repeats the list until nothing changes.
pub fn strip_generic_expressions(value: &str, mode: SuffixMode) -> String {
    match mode {
        SuffixMode::SinglePass => apply_once(value),
        SuffixMode::Converge => {
            let mut current = value.to_string();
            loop {
                // Every round either shortens the value or returns it unchanged.
                let next = apply_once(current.trim_end());
                if next == current {
                    return next;
                }
                current = next;
            }
        }
    }
}

/// Removes every match of the pattern at `index` in [`GENERIC_EXPRESSIONS`].
///
/// Applying each index in order is one single-pass round. Out-of-range
/// indices leave the value unchanged.
pub fn strip_generic_expression(value: &str, index: usize) -> String {
    match GENERIC_REGEXES.get(index) {
        Some(regex) => regex.replace_all(value, "").into_owned(),
        None => value.to_string(),
    }
}

fn apply_once(value: &str) -> String {
    (0..GENERIC_EXPRESSIONS.len())
        .fold(value.to_string(), |current, index| {
            strip_generic_expression(&current, index)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(value: &str) -> String {
        strip_generic_expressions(value, SuffixMode::SinglePass)
    }

    #[test]
    fn all_patterns_compile() {
        assert_eq!(GENERIC_REGEXES.len(), GENERIC_EXPRESSIONS.len());
    }

    #[test]
    fn removes_trailing_legal_suffix() {
        assert_eq!(strip("acme inc"), "acme");
        assert_eq!(strip("acme llc"), "acme");
        assert_eq!(strip("acme gmbh"), "acme");
        assert_eq!(strip("beta   tech   solutions"), "beta   tech  ");
    }

    #[test]
    fn suffix_must_be_final_token() {
        assert_eq!(strip("capital group of companies"), "capital group of companies");
        assert_eq!(strip("group partners corp"), "group partners");
        assert_eq!(strip("corpus"), "corpus");
        assert_eq!(strip("zinc"), "zinc");
        assert_eq!(strip("inc"), "inc");
        assert_eq!(strip("acmeinc"), "acmeinc");
    }

    #[test]
    fn patterns_in_order_match_single_pass() {
        let value = "the acme holdings inc";
        let stepped = (0..GENERIC_EXPRESSIONS.len())
            .fold(value.to_string(), |current, index| {
                strip_generic_expression(&current, index)
            });
        assert_eq!(stepped, strip(value));
        assert_eq!(strip_generic_expression("acme inc", GENERIC_EXPRESSIONS.len()), "acme inc");
    }

    #[test]
    fn removes_the_anywhere() {
        assert_eq!(strip("the widget group"), "widget");
        assert_eq!(strip("bank of the west"), "bank of west");
    }

    #[test]
    fn removes_and_associates() {
        assert_eq!(strip("smith and associates design"), "smith design");
    }

    #[test]
    fn removes_llc_prefix_token() {
        assert_eq!(strip("llc acme"), "acme");
    }

    #[test]
    fn single_pass_leaves_revealed_suffix() {
        // "group" is tried before "inc", so the exposed "group" stays.
        assert_eq!(strip("acme group inc"), "acme group");
        // "inc" is tried before "holdings", so both go in one pass.
        assert_eq!(strip("acme holdings inc"), "acme");
    }

    #[test]
    fn converge_strips_stacked_suffixes() {
        assert_eq!(
            strip_generic_expressions("acme group inc", SuffixMode::Converge),
            "acme"
        );
        assert_eq!(
            strip_generic_expressions("acme group  inc", SuffixMode::Converge),
            "acme"
        );
        assert_eq!(strip("acme llc inc"), "acme llc");
        assert_eq!(
            strip_generic_expressions("acme llc inc", SuffixMode::Converge),
            "acme"
        );
    }

    #[test]
    fn empty_is_noop() {
        assert_eq!(strip(""), "");
    }
}
