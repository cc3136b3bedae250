//! Sequential construction of task entries from tokenized lines.

use chrono::{NaiveTime, TimeDelta};

use crate::abbrev::SiblingHistory;
use crate::error::{LineError, ParseError};
use crate::line::{RawLine, tokenize};
use crate::options::Options;

/// A fully resolved timesheet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub start: NaiveTime,
    pub end: NaiveTime,

    /// Hierarchy labels, outermost first. Never empty.
    pub path: Vec<String>,
}

impl TaskEntry {
    /// Time spent on this entry. Non-negative for any entry the builder
    /// emits.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Builds entries line by line, carrying state across the sheet.
///
/// The builder owns the two pieces of sequential state a timesheet
/// depends on: the previous entry's end time (inherited by implicit
/// lines) and the sibling history used to expand abbreviated labels.
/// Lines must be fed strictly in input order.
#[derive(Debug)]
pub struct EntryBuilder<'a> {
    options: &'a Options,
    previous_end: Option<NaiveTime>,
    history: SiblingHistory,
}

impl<'a> EntryBuilder<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            previous_end: None,
            history: SiblingHistory::new(),
        }
    }

    /// Processes one comment-stripped line.
    ///
    /// Whenever the line's end-time token resolves, `previous_end`
    /// advances to it even if the line is rejected afterwards, so one bad
    /// line cannot cascade into spurious failures on the lines below it.
    pub fn push_line(&mut self, line: &str) -> Result<TaskEntry, ParseError> {
        let raw = tokenize(line, &self.options.time_formats)?;

        let (start, end, path) = match raw {
            RawLine::Explicit { start, end, path } => {
                self.previous_end = Some(end);
                (start, end, path)
            }
            RawLine::Implicit { end, path } => {
                let inherited = self.previous_end;
                self.previous_end = Some(end);
                let start = inherited.ok_or(ParseError::MissingPreviousEnd)?;
                (start, end, path)
            }
        };

        if end < start {
            return Err(ParseError::NegativeDuration { start, end });
        }

        // Times are validated first so rejected entries never pollute the
        // sibling history.
        let mut resolved = Vec::with_capacity(path.len());
        let mut parent: Vec<String> = Vec::with_capacity(path.len());
        for token in &path {
            let label = self
                .history
                .resolve(&parent, token, &self.options.elision_marker)?;
            parent.push(label.to_lowercase());
            resolved.push(label);
        }

        Ok(TaskEntry {
            start,
            end,
            path: resolved,
        })
    }
}

/// Consumes numbered lines and returns the entries that built cleanly
/// along with an error per rejected line.
///
/// Blank lines are skipped. Lines are processed independently for error
/// purposes; a failure never aborts the rest of the sheet.
pub fn build_entries<'a, I>(lines: I, options: &Options) -> (Vec<TaskEntry>, Vec<LineError>)
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut builder = EntryBuilder::new(options);
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    for (line_number, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        match builder.push_line(line) {
            Ok(entry) => entries.push(entry),
            Err(kind) => {
                tracing::debug!(line_number, error = %kind, "line rejected");
                errors.push(LineError {
                    line_number,
                    text: line.trim().to_string(),
                    kind,
                });
            }
        }
    }

    (entries, errors)
}
