//! Whole-document title scan.

use crate::heading::{is_heading_line, parse_heading};

/// Title used when a document has no usable heading.
pub const UNTITLED: &str = "Untitled";

/// Find the document title: the first heading with a non-empty title.
///
/// Unlike [`parse`](crate::parse), this looks at every heading whether or not
/// a section is opened for it. Headings inside fenced code are skipped, and a
/// trailing `{` is not part of the title.
#[must_use]
pub fn extract_title(text: &str) -> String {
    let mut in_fence = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence || !is_heading_line(trimmed) {
            continue;
        }

        let heading_text = trimmed.strip_suffix('{').unwrap_or(trimmed);
        let heading = parse_heading(heading_text);
        if !heading.title.is_empty() {
            return heading.title;
        }
    }
    UNTITLED.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_heading_wins() {
        assert_eq!(extract_title("# First\n## Second"), "First");
    }

    #[test]
    fn test_heading_outside_any_section() {
        assert_eq!(extract_title("intro\n\n## Loose heading\n"), "Loose heading");
    }

    #[test]
    fn test_nested_heading_counts() {
        assert_eq!(extract_title("text\n  ### Deep @deep {\n}"), "Deep");
    }

    #[test]
    fn test_skips_empty_titles() {
        assert_eq!(extract_title("# @meta {\n}\n# Real Title"), "Real Title");
    }

    #[test]
    fn test_kr_brace_not_in_title() {
        assert_eq!(extract_title("# Guide {\n}"), "Guide");
    }

    #[test]
    fn test_ignores_fenced_headings() {
        assert_eq!(extract_title("```\n# Code comment\n```\n# Actual"), "Actual");
    }

    #[test]
    fn test_ignores_escaped_hash() {
        assert_eq!(extract_title("\\# not it\n# It"), "It");
    }

    #[test]
    fn test_untitled_fallback() {
        assert_eq!(extract_title("just prose"), UNTITLED);
        assert_eq!(extract_title(""), UNTITLED);
    }
}
