use canon_model::{CanonicalizationResult, NameDataset, PipelineReport, StageMetric};
use canon_output::{write_canonical_csv, write_report_json};

fn result() -> CanonicalizationResult {
    let dataset: NameDataset = ["Acme Inc", "XYZ Powered By SomeEngine"].into_iter().collect();
    CanonicalizationResult::zip(&dataset, vec!["acme".to_string(), "xyz".to_string()])
        .expect("lengths match")
}

#[test]
fn creates_missing_destination_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("out.csv");

    write_canonical_csv(&path, &result()).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["RAW_NAME", "CANONICAL_NAME"]);
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][0], "XYZ Powered By SomeEngine");
    assert_eq!(&rows[1][1], "xyz");
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    std::fs::write(&path, "stale").unwrap();

    write_canonical_csv(&path, &result()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("RAW_NAME,CANONICAL_NAME\n"));
    assert!(!written.contains("stale"));
}

#[test]
fn report_json_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");
    let report = PipelineReport {
        source_column: Some("Skillbox".to_string()),
        rows: 2,
        initial_distinct: 2,
        stages: vec![StageMetric {
            stage: "lower_case".to_string(),
            description: "Making text lower case operation".to_string(),
            distinct_before: 2,
            distinct_after: 2,
            rows_changed: 2,
            substeps: Vec::new(),
        }],
        final_raw_distinct: 2,
        final_canonical_distinct: 2,
    };

    write_report_json(&path, &report).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: PipelineReport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, report);
}
