//! Parsed document tree types.

use serde::Serialize;

use crate::heading::Heading;

/// One brace-delimited section of a document.
///
/// Children and paragraphs are kept in document order. A paragraph line
/// belongs to the innermost section that was open when it was read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Trimmed heading text.
    pub title: String,
    /// Identifier from a trailing `@token` on the heading line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Nested sections.
    pub children: Vec<Node>,
    /// Text lines directly inside this section (blank lines are empty strings).
    pub paragraphs: Vec<String>,
}

impl Node {
    pub(crate) fn from_heading(heading: Heading) -> Self {
        Self {
            title: heading.title,
            id: heading.id,
            children: Vec::new(),
            paragraphs: Vec::new(),
        }
    }

    /// Check whether this node's id matches `id`, ignoring ASCII case.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(id))
    }

    /// Paragraph lines that contain something other than whitespace, trimmed.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
    }
}

/// Non-fatal observation made while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line.
    pub line: usize,
    /// What was observed.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

/// Kinds of parse diagnostics. None of them stop the parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// `}` with no open section; ignored.
    UnmatchedClose,
    /// `{` with no heading waiting to be opened; ignored.
    OrphanOpen,
    /// Section still open at end of input; left open.
    UnclosedSection {
        /// Title of the open section.
        title: String,
    },
    /// End of input reached inside a fenced code block.
    UnterminatedFence,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::UnmatchedClose => {
                write!(f, "line {}: closing brace without open section", self.line)
            }
            DiagnosticKind::OrphanOpen => {
                write!(f, "line {}: opening brace without heading", self.line)
            }
            DiagnosticKind::UnclosedSection { title } => {
                write!(f, "line {}: section \"{title}\" is never closed", self.line)
            }
            DiagnosticKind::UnterminatedFence => {
                write!(f, "line {}: code fence is never closed", self.line)
            }
        }
    }
}

/// Result of parsing a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Top-level sections in document order.
    pub nodes: Vec<Node>,
    /// Observations about malformed structure.
    pub diagnostics: Vec<Diagnostic>,
}
