//! End-to-end tests for the report and check commands.
//!
//! Tests the full pipeline: file → comment stripping → parsing →
//! aggregation → rendered output, through the real binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn ts_binary() -> String {
    env!("CARGO_BIN_EXE_ts").to_string()
}

/// A day's timesheet with comments, blacklisted lines, mixed time
/// formats, and an abbreviation chain.
const SAMPLE: &str = concat!(
    "// Tuesday\n",
    "09:00\t9:30\tMeeting\tStandup\n",
    "10:20\tIssue #1372\tInvestigation\n",
    "10:41\tBreak\n",
    "10:44\t10:56\tMeeting\tCode review\n",
    "11:53\t...1372\tFix\n",
    "12:47\tLunch\n",
    "/* afternoon\n",
    "   half */\n",
    "13:00\tEmail\n",
    "16:03\t...1372\tFix\n",
    "16:21\tMeeting\tRetro\n",
    "16:40\t...1372\tVerify\n",
);

fn write_sheet(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("timesheet.txt");
    std::fs::write(&path, contents).expect("failed to write timesheet");
    path
}

/// Run the binary with config lookups pointed at the temp directory so
/// a developer's real config cannot leak into the test.
fn run_ts(temp: &Path, args: &[&str]) -> Output {
    Command::new(ts_binary())
        .env("HOME", temp)
        .env("XDG_CONFIG_HOME", temp)
        .args(args)
        .output()
        .expect("failed to run ts")
}

#[test]
fn report_aggregates_the_sample_sheet() {
    let temp = TempDir::new().unwrap();
    let sheet = write_sheet(temp.path(), SAMPLE);

    let output = run_ts(temp.path(), &["report", sheet.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "report should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total time: 6:22"), "stdout: {stdout}");
    assert!(stdout.contains("Meeting (0:00/1:00)"));
    assert!(stdout.contains("    Standup (0:30/0:30)"));
    assert!(stdout.contains("Issue #1372 (0:00/5:09)"));
    assert!(stdout.contains("    Fix (4:00/4:00)"));
    assert!(stdout.contains("Email (0:13/0:13)"));

    // Blacklisted roots never appear.
    assert!(!stdout.contains("Break"));
    assert!(!stdout.contains("Lunch"));
}

#[test]
fn report_json_matches_the_tree() {
    let temp = TempDir::new().unwrap();
    let sheet = write_sheet(temp.path(), SAMPLE);

    let output = run_ts(temp.path(), &["report", "--json", sheet.to_str().unwrap()]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(value["total_minutes"], 382);
    assert_eq!(value["categories"].as_array().unwrap().len(), 3);
    assert_eq!(value["categories"][0]["label"], "Meeting");
    assert_eq!(value["categories"][1]["children"][1]["direct_minutes"], 240);
}

#[test]
fn report_survives_bad_lines() {
    let temp = TempDir::new().unwrap();
    let sheet = write_sheet(
        temp.path(),
        concat!(
            "09:00\t9:30\tMeeting\n",
            "nonsense\tEmail\n",
            "10:20\tEmail\n",
        ),
    );

    let output = run_ts(temp.path(), &["report", sheet.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total time: 1:20"));
    assert!(stdout.contains("Skipped lines:"));
    assert!(stdout.contains("line 2:"));
}

#[test]
fn check_passes_a_clean_sheet() {
    let temp = TempDir::new().unwrap();
    let sheet = write_sheet(temp.path(), SAMPLE);

    let output = run_ts(temp.path(), &["check", sheet.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No problems found (10 entries)."));
}

#[test]
fn check_fails_on_an_implicit_first_line() {
    let temp = TempDir::new().unwrap();
    let sheet = write_sheet(temp.path(), "9:30\tMeeting\n");

    let output = run_ts(temp.path(), &["check", sheet.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("line 1:"));
    assert!(stdout.contains("1 problem line(s)"));
}

#[test]
fn report_errors_on_a_missing_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.txt");

    let output = run_ts(temp.path(), &["report", missing.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read timesheet"));
}
