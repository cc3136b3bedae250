//! Processing options shared by the tokenizer, builder, and tree.

use std::collections::HashSet;

use crate::time::DEFAULT_TIME_FORMATS;

/// Default root labels excluded from totals and output.
pub const DEFAULT_BLACKLIST: &[&str] = &["break", "lunch", "errand", "ignore"];

/// Default substring marking an abbreviated label.
pub const DEFAULT_ELISION_MARKER: &str = "...";

/// Options controlling how a timesheet is parsed and aggregated.
#[derive(Debug, Clone)]
pub struct Options {
    /// Time format patterns, tried in order. Order is part of the contract:
    /// an ambiguous token resolves according to the first matching pattern.
    pub time_formats: Vec<String>,

    /// Lower-cased root labels whose subtrees are excluded entirely.
    pub blacklist: HashSet<String>,

    /// Substring signaling an abbreviated label (e.g. `...1372`).
    pub elision_marker: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            time_formats: DEFAULT_TIME_FORMATS.iter().map(ToString::to_string).collect(),
            blacklist: DEFAULT_BLACKLIST.iter().map(ToString::to_string).collect(),
            elision_marker: DEFAULT_ELISION_MARKER.to_string(),
        }
    }
}

impl Options {
    /// Returns true if a root label is excluded by the blacklist.
    pub fn is_blacklisted(&self, label: &str) -> bool {
        self.blacklist.contains(&label.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_blacklist_is_case_insensitive() {
        let options = Options::default();
        assert!(options.is_blacklisted("break"));
        assert!(options.is_blacklisted("Break"));
        assert!(options.is_blacklisted("LUNCH"));
        assert!(!options.is_blacklisted("meeting"));
    }

    #[test]
    fn default_formats_are_ordered() {
        let options = Options::default();
        assert_eq!(
            options.time_formats,
            vec!["%I:%M %p", "%H:%M", "%H.%M"]
        );
    }
}
