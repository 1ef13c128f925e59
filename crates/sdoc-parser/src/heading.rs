//! Heading line recognition and `@id` extraction.

use serde::Serialize;

/// Title and optional identifier parsed from a heading line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading text with the `#` run, surrounding whitespace and `@id` removed.
    pub title: String,
    /// Identifier from a trailing `@token`, without the `@`.
    pub id: Option<String>,
}

/// Check whether a line is a heading line.
///
/// A heading starts with `#` after leading whitespace. An escaped `\#` is
/// ordinary text; unescaping is left to the renderer.
#[must_use]
pub fn is_heading_line(line: &str) -> bool {
    let stripped = line.trim_start();
    !stripped.starts_with("\\#") && stripped.starts_with('#')
}

/// Parse a heading line into its title and optional `@id`.
///
/// The leading `#` run is stripped and the rest trimmed. When the last
/// whitespace-delimited token is `@` followed by alphanumerics (hyphens and
/// underscores allowed), it becomes the id and is removed from the title.
///
/// # Examples
///
/// ```ignore
/// let heading = parse_heading("## Install guide @install");
/// assert_eq!(heading.title, "Install guide");
/// assert_eq!(heading.id.as_deref(), Some("install"));
/// ```
#[must_use]
pub fn parse_heading(line: &str) -> Heading {
    let raw = line.trim_start().trim_start_matches('#').trim();

    let mut words: Vec<&str> = raw.split_whitespace().collect();
    let id = words
        .last()
        .and_then(|last| last.strip_prefix('@'))
        .filter(|token| is_identifier(token))
        .map(str::to_owned);

    if id.is_none() {
        return Heading {
            title: raw.to_owned(),
            id: None,
        };
    }

    words.pop();
    Heading {
        title: words.join(" "),
        id,
    }
}

/// Non-empty, and alphanumeric once `-` and `_` are removed.
fn is_identifier(token: &str) -> bool {
    let mut core = token.chars().filter(|c| *c != '-' && *c != '_').peekable();
    core.peek().is_some() && core.all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_heading_line() {
        assert!(is_heading_line("# Title"));
        assert!(is_heading_line("   ### Indented"));
        assert!(is_heading_line("#"));
        assert!(!is_heading_line("Title"));
        assert!(!is_heading_line("\\# Not a heading"));
        assert!(!is_heading_line("  \\#escaped"));
        assert!(!is_heading_line(""));
    }

    #[test]
    fn test_parse_heading_plain() {
        let heading = parse_heading("## Getting Started");
        assert_eq!(heading.title, "Getting Started");
        assert!(heading.id.is_none());
    }

    #[test]
    fn test_parse_heading_with_id() {
        let heading = parse_heading("# Getting   Started @getting-started");
        assert_eq!(heading.title, "Getting Started");
        assert_eq!(heading.id.as_deref(), Some("getting-started"));
    }

    #[test]
    fn test_parse_heading_id_with_underscore() {
        let heading = parse_heading("# Config @app_config_2");
        assert_eq!(heading.id.as_deref(), Some("app_config_2"));
    }

    #[test]
    fn test_parse_heading_only_id() {
        let heading = parse_heading("# @meta");
        assert_eq!(heading.title, "");
        assert_eq!(heading.id.as_deref(), Some("meta"));
    }

    #[test]
    fn test_parse_heading_bare_at_is_title() {
        let heading = parse_heading("# Contact @");
        assert_eq!(heading.title, "Contact @");
        assert!(heading.id.is_none());
    }

    #[test]
    fn test_parse_heading_invalid_id_is_title() {
        let heading = parse_heading("# Mail me @user.name");
        assert_eq!(heading.title, "Mail me @user.name");
        assert!(heading.id.is_none());
    }

    #[test]
    fn test_parse_heading_dashes_only_is_not_id() {
        let heading = parse_heading("# Rule @--");
        assert_eq!(heading.title, "Rule @--");
        assert!(heading.id.is_none());
    }

    #[test]
    fn test_parse_heading_at_in_middle_is_title() {
        let heading = parse_heading("# Ping @team about it");
        assert_eq!(heading.title, "Ping @team about it");
        assert!(heading.id.is_none());
    }

    #[test]
    fn test_parse_heading_empty() {
        let heading = parse_heading("###   ");
        assert_eq!(heading, Heading::default());
    }
}
