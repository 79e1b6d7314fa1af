use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use canon_model::{PipelineReport, StageMetric};

use crate::types::ReportFormat;

/// Render verbose diagnostics in the requested format.
pub fn render_report(report: &PipelineReport, format: ReportFormat, styled: bool) -> Result<String> {
    match format {
        ReportFormat::Lines => Ok(render_lines(report)),
        ReportFormat::Table => Ok(render_table(report, styled).to_string()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn print_report(report: &PipelineReport, format: ReportFormat, styled: bool) -> Result<()> {
    println!("{}", render_report(report, format, styled)?);
    Ok(())
}

/// Plain console lines, one per stage.
pub fn render_lines(report: &PipelineReport) -> String {
    let mut lines = Vec::with_capacity(report.stages.len() + 2);
    lines.push(format!(
        "Number of unique company names: {}",
        report.initial_distinct
    ));
    for stage in &report.stages {
        lines.push(format!(
            "{} modified {} company names",
            stage.description,
            stage.delta()
        ));
    }
    lines.push(format!(
        "From {} unique company names, there are now {} Canonical names",
        report.final_raw_distinct, report.final_canonical_distinct
    ));
    lines.join("\n")
}

pub fn render_table(report: &PipelineReport, styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Description"),
        header_cell("Before"),
        header_cell("After"),
        header_cell("Merged"),
        header_cell("Rows changed"),
    ]);
    apply_summary_table_style(&mut table);
    if !styled {
        table.force_no_tty();
    }
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for stage in &report.stages {
        table.add_row(stage_row(stage));
        // Only patterns that touched a row; the JSON report has all of them.
        for substep in stage.substeps.iter().filter(|substep| substep.rows_changed > 0) {
            table.add_row(substep_row(substep));
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows", report.rows))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.initial_distinct).add_attribute(Attribute::Bold),
        Cell::new(report.final_canonical_distinct).add_attribute(Attribute::Bold),
        delta_cell(report.total_delta()).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn stage_row(stage: &StageMetric) -> Vec<Cell> {
    vec![
        Cell::new(&stage.stage),
        Cell::new(&stage.description),
        Cell::new(stage.distinct_before),
        Cell::new(stage.distinct_after),
        delta_cell(stage.delta()),
        count_cell(stage.rows_changed),
    ]
}

fn substep_row(substep: &StageMetric) -> Vec<Cell> {
    vec![
        dim_cell(format!("  {}", substep.stage)),
        dim_cell(&substep.description),
        dim_cell(substep.distinct_before),
        dim_cell(substep.distinct_after),
        delta_cell(substep.delta()),
        count_cell(substep.rows_changed),
    ]
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn delta_cell(delta: i64) -> Cell {
    match delta {
        0 => dim_cell(delta),
        d if d > 0 => Cell::new(delta).fg(Color::Green).add_attribute(Attribute::Bold),
        _ => Cell::new(delta).fg(Color::Yellow),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PipelineReport {
        let stage = |id: &str, description: &str, before, after, rows_changed| StageMetric {
            stage: id.to_string(),
            description: description.to_string(),
            distinct_before: before,
            distinct_after: after,
            rows_changed,
            substeps: Vec::new(),
        };
        PipelineReport {
            source_column: Some("Skillbox".to_string()),
            rows: 5,
            initial_distinct: 5,
            stages: vec![
                stage("strip_punctuation", "Removing punctuation", 5, 5, 1),
                stage("lower_case", "Making text lower case operation", 5, 4, 3),
                StageMetric {
                    substeps: vec![
                        stage("strip_generic_expressions:the", "Removing 'the '", 4, 4, 0),
                        stage("strip_generic_expressions:inc$", "Removing ' inc$'", 4, 3, 2),
                    ],
                    ..stage("strip_generic_expressions", "Removing generic expressions", 4, 3, 2)
                },
            ],
            final_raw_distinct: 5,
            final_canonical_distinct: 3,
        }
    }

    #[test]
    fn lines_match_console_format() {
        insta::assert_snapshot!(render_lines(&sample_report()), @r"
        Number of unique company names: 5
        Removing punctuation modified 0 company names
        Making text lower case operation modified 1 company names
        Removing generic expressions modified 1 company names
        From 5 unique company names, there are now 3 Canonical names
        ");
    }

    #[test]
    fn table_lists_every_stage_and_total() {
        let rendered = render_table(&sample_report(), false).to_string();
        assert!(rendered.contains("strip_punctuation"));
        assert!(rendered.contains("Making text lower case operation"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("5 rows"));
        assert!(rendered.contains("strip_generic_expressions:inc$"));
        assert!(!rendered.contains("strip_generic_expressions:the"));
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn json_contains_report() {
        let rendered = render_report(&sample_report(), ReportFormat::Json, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["final_canonical_distinct"], 3);
        assert_eq!(parsed["stages"][1]["stage"], "lower_case");
        assert!(parsed["stages"][1].get("substeps").is_none());
        assert_eq!(
            parsed["stages"][2]["substeps"][1]["stage"],
            "strip_generic_expressions:inc$"
        );
    }
}
