//! Abbreviated label resolution against previously seen siblings.

use std::collections::HashMap;

use crate::error::ParseError;

/// Labels previously seen at each position in the hierarchy.
///
/// A position is the lower-cased parent path, so abbreviations only
/// resolve against sibling labels at the same depth and never across
/// unrelated branches. Within a position, labels are ordered least to
/// most recent; resolution searches most-recent-first.
#[derive(Debug, Default)]
pub struct SiblingHistory {
    seen: HashMap<Vec<String>, Vec<String>>,
}

impl SiblingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves one path segment, recording it for later lines.
    ///
    /// A token without the marker is returned unchanged. A token with the
    /// marker is split on its first occurrence into a prefix and suffix
    /// and matched, case-insensitively, against the most recent sibling
    /// that starts with the prefix, ends with the suffix, and is at least
    /// as long as both combined.
    pub fn resolve(
        &mut self,
        parent: &[String],
        token: &str,
        marker: &str,
    ) -> Result<String, ParseError> {
        let labels = self.seen.entry(parent.to_vec()).or_default();

        let Some((prefix, suffix)) = token.split_once(marker) else {
            record(labels, token);
            return Ok(token.to_string());
        };

        let prefix = prefix.to_lowercase();
        let suffix = suffix.to_lowercase();
        let resolved = labels
            .iter()
            .rev()
            .find(|label| {
                let lower = label.to_lowercase();
                lower.len() >= prefix.len() + suffix.len()
                    && lower.starts_with(&prefix)
                    && lower.ends_with(&suffix)
            })
            .cloned();

        match resolved {
            Some(label) => {
                record(labels, &label);
                Ok(label)
            }
            None => Err(ParseError::UnresolvedAbbreviation {
                token: token.to_string(),
            }),
        }
    }
}

/// Records a label as the most recent at its position, deduplicating
/// case-insensitively.
fn record(labels: &mut Vec<String>, label: &str) {
    let lower = label.to_lowercase();
    if let Some(idx) = labels.iter().position(|seen| seen.to_lowercase() == lower) {
        labels.remove(idx);
    }
    labels.push(label.to_string());
}
