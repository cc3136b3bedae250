//! Tokenizing a comment-stripped line into a classified raw line.

use chrono::NaiveTime;

use crate::error::ParseError;
use crate::time::parse_time;

/// A tokenized line, classified by how many leading time tokens it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine {
    /// Both start and end times are spelled out.
    Explicit {
        start: NaiveTime,
        end: NaiveTime,
        path: Vec<String>,
    },

    /// Only the end time is given; the start is inherited from the
    /// previous entry.
    Implicit { end: NaiveTime, path: Vec<String> },
}

/// Splits a line on runs of whitespace that contain at least one tab.
///
/// A lone space never splits, so labels may contain internal spaces.
/// Fields are trimmed and empty fields (leading indentation) dropped.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut pending_ws = String::new();
    let mut pending_has_tab = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            pending_ws.push(ch);
            pending_has_tab |= ch == '\t';
        } else {
            if pending_has_tab {
                let trimmed = field.trim();
                if !trimmed.is_empty() {
                    fields.push(trimmed.to_string());
                }
                field.clear();
            } else {
                field.push_str(&pending_ws);
            }
            pending_ws.clear();
            pending_has_tab = false;
            field.push(ch);
        }
    }

    let trimmed = field.trim();
    if !trimmed.is_empty() {
        fields.push(trimmed.to_string());
    }
    fields
}

/// Tokenizes one comment-stripped line.
///
/// The first field must resolve as a time. If the second field also
/// resolves as a time the line is explicit; otherwise the single time is
/// the entry's end and the start will be inherited.
pub fn tokenize(line: &str, formats: &[String]) -> Result<RawLine, ParseError> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(ParseError::MalformedLine {
            reason: "expected at least a time and one label",
        });
    }

    let first = parse_time(&fields[0], formats)?;

    match parse_time(&fields[1], formats) {
        Ok(second) => {
            let path = fields[2..].to_vec();
            if path.is_empty() {
                return Err(ParseError::MalformedLine {
                    reason: "no labels after the start and end times",
                });
            }
            Ok(RawLine::Explicit {
                start: first,
                end: second,
                path,
            })
        }
        Err(_) => Ok(RawLine::Implicit {
            end: first,
            path: fields[1..].to_vec(),
        }),
    }
}
