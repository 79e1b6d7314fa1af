//! End-to-end canonicalization scenarios.

use canon_model::{NameDataset, PipelineOptions, SuffixMode};
use canon_transform::{CanonicalPipeline, canonicalize};

fn canonical(raw: &str) -> String {
    CanonicalPipeline::default().canonicalize_name(raw)
}

#[test]
fn strips_punctuation_and_legal_suffix() {
    assert_eq!(canonical("Acme, Inc."), "acme");
}

#[test]
fn strips_article_group_and_edges() {
    assert_eq!(canonical("  The Widget Group  "), "widget");
}

#[test]
fn suffixes_are_stripped_before_alias_truncation() {
    // Only the final "llc" is a suffix when suffix removal runs; "corp" is
    // mid-string until the alias is cut off afterwards.
    assert_eq!(canonical("Foo Corp aka Bar LLC"), "foo corp");
    assert_eq!(canonical("Foo aka Bar Corp"), "foo");
}

#[test]
fn collapses_internal_whitespace() {
    assert_eq!(canonical("Beta   Tech   Solutions"), "beta tech");
}

#[test]
fn missing_value_stays_empty() {
    assert_eq!(canonical(""), "");
}

#[test]
fn truncates_powered_by() {
    assert_eq!(canonical("XYZ Powered By SomeEngine"), "xyz");
}

#[test]
fn variants_collapse_to_one_name() {
    let dataset: NameDataset = [
        "Acme, Inc.",
        "ACME INC",
        "acme",
        "The Acme Company",
        "Acme LLC",
        "Acme Corp.",
    ]
    .into_iter()
    .collect();
    let output = canonicalize(&dataset, PipelineOptions::default()).unwrap();
    assert!(output.result.canonical_names().all(|name| name == "acme"));
    assert_eq!(output.result.raw_distinct(), 6);
    assert_eq!(output.result.canonical_distinct(), 1);
}

#[test]
fn distinct_companies_stay_distinct() {
    let dataset: NameDataset = ["Acme Inc", "Apex Inc", "Acme Labs aka Apex"]
        .into_iter()
        .collect();
    let output = canonicalize(&dataset, PipelineOptions::default()).unwrap();
    let names: Vec<&str> = output.result.canonical_names().collect();
    assert_eq!(names, vec!["acme", "apex", "acme labs"]);
}

#[test]
fn llc_token_is_removed_anywhere() {
    assert_eq!(canonical("LLC Acme Widgets"), "acme widgets");
}

#[test]
fn single_pass_is_not_idempotent_for_stacked_suffixes() {
    let pipeline = CanonicalPipeline::default();
    let once = pipeline.canonicalize_name("Acme Group Inc");
    assert_eq!(once, "acme group");
    assert_eq!(pipeline.canonicalize_name(&once), "acme");
}

#[test]
fn converge_mode_strips_stacked_suffixes() {
    let pipeline =
        CanonicalPipeline::new(PipelineOptions::new().with_suffix_mode(SuffixMode::Converge));
    let once = pipeline.canonicalize_name("Acme Group Inc");
    assert_eq!(once, "acme");
    assert_eq!(pipeline.canonicalize_name(&once), once);
}

#[test]
fn converge_mode_revisits_suffixes_exposed_by_later_stages() {
    let pipeline =
        CanonicalPipeline::new(PipelineOptions::new().with_suffix_mode(SuffixMode::Converge));
    let cases = [
        ("Foo Inc aka Bar", "foo"),
        ("The\tAcme", "acme"),
        ("Acme\tInc", "acme"),
        ("Acme Inc powered by X", "acme"),
    ];
    for (raw, expected) in cases {
        let once = pipeline.canonicalize_name(raw);
        assert_eq!(once, expected, "{raw:?}");
        assert_eq!(pipeline.canonicalize_name(&once), once, "{raw:?}");
    }
}

#[test]
fn single_pass_keeps_suffixes_exposed_by_later_stages() {
    let pipeline = CanonicalPipeline::default();
    assert_eq!(pipeline.canonicalize_name("Foo Inc aka Bar"), "foo inc");
    assert_eq!(pipeline.canonicalize_name("The\tAcme"), "the acme");
    assert_eq!(pipeline.canonicalize_name("Acme\tInc"), "acme inc");
    assert_eq!(pipeline.canonicalize_name("Acme Inc powered by X"), "acme inc");
}

#[test]
fn verbose_report_matches_scenario_counts() {
    let dataset: NameDataset = ["Acme, Inc.", "acme inc", "Beta   Tech   Solutions", ""]
        .into_iter()
        .collect();
    let output = canonicalize(&dataset, PipelineOptions::new().with_metrics(true)).unwrap();
    let report = output.report.expect("metrics requested");

    let deltas: Vec<i64> = report.stages.iter().map(|metric| metric.delta()).collect();
    // punctuation, strip, lower, generic, strip, aka, powered by, collapse
    assert_eq!(deltas, vec![0, 0, 1, 0, 0, 0, 0, 0]);
    assert_eq!(report.initial_distinct, 4);
    assert_eq!(report.final_canonical_distinct, 3);
}
