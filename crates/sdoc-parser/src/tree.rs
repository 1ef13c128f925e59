//! Line-oriented tree builder.
//!
//! Sections open on a heading followed by `{` (on the same line or on a line
//! of its own) and close on a line holding only `}`. Everything is decided
//! one line at a time with an explicit stack of open sections and a single
//! pending-heading slot.

use crate::heading::{Heading, is_heading_line, parse_heading};
use crate::node::{Diagnostic, DiagnosticKind, Node, ParseResult};

const FENCE: &str = "```";

/// Parse document text into a tree of sections.
///
/// Never fails: stray `}` lines are ignored, sections still open at the end
/// of input stay attached where they were opened, and both are reported in
/// [`ParseResult::diagnostics`].
#[must_use]
pub fn parse(text: &str) -> ParseResult {
    let mut builder = TreeBuilder::default();
    for (index, line) in text.lines().enumerate() {
        builder.feed(index + 1, line);
    }
    builder.finish()
}

/// An open section and the line that opened it.
struct OpenNode {
    node: Node,
    line: usize,
}

#[derive(Default)]
struct TreeBuilder {
    top_level: Vec<Node>,
    stack: Vec<OpenNode>,
    pending: Option<Heading>,
    in_fence: bool,
    fence_line: usize,
    diagnostics: Vec<Diagnostic>,
}

impl TreeBuilder {
    fn feed(&mut self, line_no: usize, line: &str) {
        let trimmed = line.trim();

        if trimmed.starts_with(FENCE) {
            self.in_fence = !self.in_fence;
            self.fence_line = line_no;
            self.push_paragraph(trimmed);
            return;
        }
        if self.in_fence {
            self.push_paragraph(line);
            return;
        }

        if trimmed.is_empty() {
            self.push_paragraph("");
            return;
        }

        if is_heading_line(trimmed) {
            if let Some(heading_text) = trimmed.strip_suffix('{') {
                self.pending = None;
                self.open(parse_heading(heading_text), line_no);
            } else {
                self.pending = Some(parse_heading(trimmed));
            }
            return;
        }

        match trimmed {
            "{" => match self.pending.take() {
                Some(heading) => self.open(heading, line_no),
                None => self.report(line_no, DiagnosticKind::OrphanOpen),
            },
            "}" => {
                if !self.close() {
                    self.report(line_no, DiagnosticKind::UnmatchedClose);
                }
            }
            _ => self.push_paragraph(trimmed),
        }
    }

    fn open(&mut self, heading: Heading, line: usize) {
        self.stack.push(OpenNode {
            node: Node::from_heading(heading),
            line,
        });
    }

    /// Close the innermost section. Returns `false` when nothing is open.
    fn close(&mut self) -> bool {
        let Some(open) = self.stack.pop() else {
            return false;
        };
        self.attach(open.node);
        true
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.node.children.push(node),
            None => self.top_level.push(node),
        }
    }

    /// Lines outside any section are dropped.
    fn push_paragraph(&mut self, text: &str) {
        if let Some(open) = self.stack.last_mut() {
            open.node.paragraphs.push(text.to_owned());
        }
    }

    fn report(&mut self, line: usize, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic { line, kind });
    }

    fn finish(mut self) -> ParseResult {
        if self.in_fence {
            self.report(self.fence_line, DiagnosticKind::UnterminatedFence);
        }

        let unclosed: Vec<Diagnostic> = self
            .stack
            .iter()
            .map(|open| Diagnostic {
                line: open.line,
                kind: DiagnosticKind::UnclosedSection {
                    title: open.node.title.clone(),
                },
            })
            .collect();
        self.diagnostics.extend(unclosed);

        while self.close() {}

        ParseResult {
            nodes: self.top_level,
            diagnostics: self.diagnostics,
        }
    }
}
