//! Check command: validate a timesheet without rendering a report.

use std::path::Path;

use anyhow::Result;
use ts_core::build_entries;

use crate::config::Config;
use crate::source;

/// Runs the check command. Returns false when any line was rejected.
pub fn run(path: &Path, config: &Config) -> Result<bool> {
    let text = source::read_source(path)?;
    let options = config.to_options();
    let clean = source::strip_comments(&text);
    let (entries, errors) = build_entries(source::numbered_lines(&clean), &options);

    if errors.is_empty() {
        println!("No problems found ({} entries).", entries.len());
        return Ok(true);
    }

    for error in &errors {
        println!("{error}");
    }
    println!("{} problem line(s) in {}", errors.len(), path.display());
    Ok(false)
}
