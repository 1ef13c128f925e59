//! Parser for sdoc outline markup.
//!
//! sdoc documents look like outline markup, but sections are scoped by
//! explicit braces instead of heading levels:
//!
//! ```text
//! # Install @install {
//!   Run the installer.
//!
//!   ## Linux {
//!     Use the package manager.
//!   }
//! }
//! ```
//!
//! A heading opens a section when `{` ends the heading line or sits alone on
//! a later line. A line holding only `}` closes the innermost section.
//! Fenced code blocks are copied through without interpretation.
//!
//! This crate provides:
//! - [`parse`]: build the section tree, never failing on malformed input
//! - [`extract_title`]: the document title from its first heading
//! - [`extract_meta`]: stylesheet directives from the `@meta` section

mod heading;
mod meta;
mod node;
mod title;
mod tree;

pub use heading::{Heading, is_heading_line, parse_heading};
pub use meta::{META_ID, MetaStyles, extract_meta};
pub use node::{Diagnostic, DiagnosticKind, Node, ParseResult};
pub use title::{UNTITLED, extract_title};
pub use tree::parse;
