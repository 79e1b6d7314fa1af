//! CLI argument definitions for the company-name canonicalizer.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use canon_cli::types::{CanonicalizeArgs, DEFAULT_INPUT, DEFAULT_OUTPUT, ReportFormat};
use canon_model::SuffixMode;

#[derive(Parser)]
#[command(
    name = "canon-names",
    version,
    about = "Canonicalize a column of company names",
    long_about = "Canonicalize a column of company names.\n\n\
                  Reads a CSV with one name column, strips punctuation, case, legal\n\
                  suffixes and alias clauses, and writes RAW_NAME,CANONICAL_NAME pairs.\n\n\
                  Positional arguments resolve right to left:\n  \
                  VERBOSE\n  FILEPATH_IN VERBOSE\n  FILEPATH_IN FILEPATH_OUT VERBOSE"
)]
pub struct Cli {
    /// [FILEPATH_IN] [FILEPATH_OUT] VERBOSE (True/False).
    #[arg(value_name = "ARGS", num_args = 1..=3, required = true)]
    pub positionals: Vec<String>,

    /// Source column holding the names (required when the CSV has several).
    #[arg(long = "column", value_name = "NAME")]
    pub column: Option<String>,

    /// Extra cell values read as missing (repeatable).
    #[arg(long = "null-value", value_name = "TOKEN")]
    pub null_values: Vec<String>,

    /// Repeat every stage until names stop changing.
    ///
    /// By default each suffix pattern is tried once, so "Acme Group Inc"
    /// becomes "acme group" and "Foo Inc aka Bar" becomes "foo inc". With
    /// this flag they become "acme" and "foo".
    #[arg(long = "converge-suffixes")]
    pub converge_suffixes: bool,

    /// Rendering of the verbose diagnostics.
    #[arg(long = "report-format", value_enum, default_value = "lines")]
    pub report_format: ReportFormatArg,

    /// Also write per-stage metrics as JSON.
    #[arg(long = "metrics-out", value_name = "PATH")]
    pub metrics_out: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve positionals and flags into run arguments.
    pub fn canonicalize_args(&self) -> Result<CanonicalizeArgs> {
        let (filepath_in, filepath_out, verbose) = resolve_positionals(&self.positionals)?;
        let mut args = CanonicalizeArgs::new(filepath_in, filepath_out);
        args.verbose = verbose;
        args.column = self.column.clone();
        args.null_values = self.null_values.clone();
        args.suffix_mode = if self.converge_suffixes {
            SuffixMode::Converge
        } else {
            SuffixMode::SinglePass
        };
        args.report_format = self.report_format.into();
        args.metrics_out = self.metrics_out.clone();
        Ok(args)
    }
}

/// Map 1..=3 positional values onto input path, output path and verbose flag.
///
/// `verbose` is always last; paths fill from the left.
fn resolve_positionals(values: &[String]) -> Result<(PathBuf, PathBuf, bool)> {
    let (filepath_in, filepath_out, verbose) = match values {
        [verbose] => (DEFAULT_INPUT, DEFAULT_OUTPUT, verbose),
        [filepath_in, verbose] => (filepath_in.as_str(), DEFAULT_OUTPUT, verbose),
        [filepath_in, filepath_out, verbose] => {
            (filepath_in.as_str(), filepath_out.as_str(), verbose)
        }
        _ => bail!("expected 1 to 3 positional arguments, got {}", values.len()),
    };
    Ok((
        PathBuf::from(filepath_in),
        PathBuf::from(filepath_out),
        parse_verbose(verbose)?,
    ))
}

/// Parse the verbose argument as a boolean.
///
/// Accepts `true`/`false`, `yes`/`no`, `1`/`0` in any case.
pub fn parse_verbose(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => bail!("invalid verbose value '{value}' (expected True or False)"),
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Lines,
    Table,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Lines => ReportFormat::Lines,
            ReportFormatArg::Table => ReportFormat::Table,
            ReportFormatArg::Json => ReportFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
