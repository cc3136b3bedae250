//! Reading timesheet files and stripping comments.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;

/// Pre-compiled regexes for comment stripping.
static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

/// Reads the whole timesheet into memory.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read timesheet {}", path.display()))
}

/// Removes `/* ... */` block comments and `//` end-of-line comments.
///
/// Each block comment is removed independently, and the newlines inside
/// it are kept, so later diagnostics still point at the original file's
/// line numbers.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        caps[0].matches('\n').collect::<String>()
    });
    LINE_COMMENT_RE.replace_all(&without_blocks, "").into_owned()
}

/// Yields `(line_number, line)` pairs, numbered from 1.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(idx, line)| (idx + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_comments() {
        let text = "09:00\t9:30\tMeeting // standup ran long\n10:20\tEmail\n";
        assert_eq!(
            strip_comments(text),
            "09:00\t9:30\tMeeting \n10:20\tEmail\n"
        );
    }

    #[test]
    fn comment_only_line_becomes_blank() {
        let text = "// Tuesday\n09:00\t9:30\tMeeting\n";
        assert_eq!(strip_comments(text), "\n09:00\t9:30\tMeeting\n");
    }

    #[test]
    fn block_comment_keeps_line_numbers() {
        let text = "09:00\t9:30\tMeeting\n/* two\nlines */\n10:20\tEmail\n";
        let stripped = strip_comments(text);
        assert_eq!(stripped, "09:00\t9:30\tMeeting\n\n\n10:20\tEmail\n");
        // "10:20\tEmail" must still be line 4.
        let line4 = numbered_lines(&stripped).nth(3).unwrap();
        assert_eq!(line4, (4, "10:20\tEmail"));
    }

    #[test]
    fn separate_block_comments_do_not_swallow_text_between() {
        let text = "/* a */ 09:00\t9:30\tMeeting /* b */\n";
        assert_eq!(strip_comments(text), " 09:00\t9:30\tMeeting \n");
    }

    #[test]
    fn inline_block_comment_is_removed() {
        let text = "10:20\tEmail\t/* waiting on replies */\n";
        assert_eq!(strip_comments(text), "10:20\tEmail\t\n");
    }

    #[test]
    fn numbered_lines_start_at_one() {
        let pairs: Vec<_> = numbered_lines("a\nb").collect();
        assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    }
}
