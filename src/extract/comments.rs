//! Block comment stripping
//!
//! Removes `/* ... */` spans from the raw source before any line processing
//! happens. Spans may cross line boundaries; matching is non-greedy, so each
//! span ends at the first terminator. Line comments (`//`) are not handled
//! here: the entry collector skips them per line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled regex for `/* ... */` spans, including multi-line ones
static BLOCK_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Remove every block comment span from `source`. Everything outside the
/// spans is preserved unchanged.
pub fn strip_block_comments(source: &str) -> String {
    BLOCK_COMMENT_REGEX.replace_all(source, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_span_removed() {
        assert_eq!(strip_block_comments("a /* gone */ b"), "a  b");
    }

    #[test]
    fn test_multi_line_span_removed() {
        let source = "keep\n/* one\ntwo\nthree */\nalso keep";
        assert_eq!(strip_block_comments(source), "keep\n\nalso keep");
    }

    #[test]
    fn test_non_greedy_stops_at_first_terminator() {
        assert_eq!(strip_block_comments("/* a */ mid /* b */"), " mid ");
    }

    #[test]
    fn test_unterminated_span_left_alone() {
        assert_eq!(
            strip_block_comments("before /* never closed"),
            "before /* never closed"
        );
    }

    #[test]
    fn test_line_comments_untouched() {
        assert_eq!(strip_block_comments("// stays"), "// stays");
    }
}
