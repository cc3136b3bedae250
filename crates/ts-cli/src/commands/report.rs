//! Report command: aggregate a timesheet and render the category tree.
//!
//! Output formats: human-readable tree (default) or JSON (`--json`).
//! A report is always produced; rejected lines are appended as a
//! "Skipped lines" section rather than aborting the run.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use chrono::TimeDelta;
use serde::Serialize;
use ts_core::{CategoryNode, CategoryTree, LineError, build_entries, merge};

use crate::config::Config;
use crate::source;

/// Computed report data.
#[derive(Debug)]
pub struct ReportData {
    pub tree: CategoryTree,
    pub errors: Vec<LineError>,
}

/// Parses raw timesheet text into report data.
pub fn build_report(text: &str, config: &Config) -> ReportData {
    let options = config.to_options();
    let clean = source::strip_comments(text);
    let (entries, errors) = build_entries(source::numbered_lines(&clean), &options);
    let tree = merge(&entries, &options);
    ReportData { tree, errors }
}

// ========== Duration Formatting ==========

/// Formats a duration as `H:MM` (e.g. 6:22).
/// Negative durations are treated as 0:00 (defensive).
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

// ========== Human-Readable Output ==========

fn write_node(output: &mut String, node: &CategoryNode, depth: usize, indent: &str) {
    writeln!(
        output,
        "{}{} ({}/{})",
        indent.repeat(depth),
        node.label(),
        format_duration(node.direct()),
        format_duration(node.total())
    )
    .unwrap();
    for child in node.children() {
        write_node(output, child, depth + 1, indent);
    }
}

/// Formats the human-readable report output.
pub fn format_report(data: &ReportData, indent: &str) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "Total time: {}",
        format_duration(data.tree.grand_total())
    )
    .unwrap();

    if !data.tree.roots().is_empty() {
        output.push('\n');
    }
    for node in data.tree.roots() {
        write_node(&mut output, node, 0, indent);
    }

    if !data.errors.is_empty() {
        output.push('\n');
        writeln!(output, "Skipped lines:").unwrap();
        for error in &data.errors {
            writeln!(output, "  {error}").unwrap();
        }
    }

    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub total_minutes: i64,
    pub categories: Vec<JsonNode>,
    pub errors: Vec<JsonError>,
}

#[derive(Debug, Serialize)]
pub struct JsonNode {
    pub label: String,
    pub direct_minutes: i64,
    pub total_minutes: i64,
    pub children: Vec<JsonNode>,
}

#[derive(Debug, Serialize)]
pub struct JsonError {
    pub line: usize,
    pub text: String,
    pub message: String,
}

fn json_node(node: &CategoryNode) -> JsonNode {
    JsonNode {
        label: node.label().to_string(),
        direct_minutes: node.direct().num_minutes(),
        total_minutes: node.total().num_minutes(),
        children: node.children().iter().map(json_node).collect(),
    }
}

/// Formats report data as JSON.
pub fn format_report_json(data: &ReportData) -> Result<String> {
    let report = JsonReport {
        total_minutes: data.tree.grand_total().num_minutes(),
        categories: data.tree.roots().iter().map(json_node).collect(),
        errors: data
            .errors
            .iter()
            .map(|error| JsonError {
                line: error.line_number,
                text: error.text.clone(),
                message: error.kind.to_string(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

// ========== Public Interface ==========

/// Runs the report command.
pub fn run(path: &Path, json: bool, config: &Config) -> Result<()> {
    let text = source::read_source(path)?;
    let data = build_report(&text, config);

    if json {
        let output = format_report_json(&data)?;
        println!("{output}");
    } else {
        let output = format_report(&data, &config.indent);
        print!("{output}");
    }

    Ok(())
}
