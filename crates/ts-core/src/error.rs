//! Per-line error kinds surfaced while processing a timesheet.

use chrono::NaiveTime;
use thiserror::Error;

/// Reasons a single timesheet line can be rejected.
///
/// One line failing never aborts the run; the caller collects these and
/// keeps going so a report is always produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that must be a time matched no configured format.
    #[error("time token {token:?} matched no configured format")]
    InvalidTime { token: String },

    /// The line had too few fields or an empty hierarchy path.
    #[error("malformed line: {reason}")]
    MalformedLine { reason: &'static str },

    /// An elision token matched no previously seen sibling label.
    #[error("abbreviation {token:?} matched no earlier sibling label")]
    UnresolvedAbbreviation { token: String },

    /// An implicit line appeared before any entry supplied an end time.
    #[error("no start time given and no previous entry to inherit one from")]
    MissingPreviousEnd,

    /// The entry would end before it starts.
    #[error("entry ends at {end} before it starts at {start}")]
    NegativeDuration { start: NaiveTime, end: NaiveTime },
}

/// A rejected line paired with its location and original text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line_number}: {kind}")]
pub struct LineError {
    /// 1-based line number in the source file.
    pub line_number: usize,

    /// The offending line, trimmed.
    pub text: String,

    /// Why the line was rejected.
    pub kind: ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_error_display_includes_location() {
        let err = LineError {
            line_number: 4,
            text: "25:99\tMeeting".to_string(),
            kind: ParseError::InvalidTime {
                token: "25:99".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "line 4: time token \"25:99\" matched no configured format"
        );
    }
}
