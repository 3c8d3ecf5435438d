//! Content projection for blocks nested inside prefix containers.
//!
//! A quoted block's lines carry `>` prefixes that are not part of its
//! content. [`ContentLine`] keeps both spans so the prefix can be dropped
//! when the tree is built and re-emitted by the serializer.

use xi_rope::Rope;

use crate::parsing::source::{Span, slice_to_string};

use super::kinds::Paragraph;

/// A single line's content projection within a block.
///
/// # Invariants
///
/// - `prefix` and `content` are within `raw_line`
/// - `prefix.end <= content.start`
/// - `content` never includes the line terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line span in the rope.
    pub raw_line: Span,
    /// Container prefix region on this line (e.g. `> `).
    pub prefix: Span,
    /// Remainder after stripping container prefixes.
    pub content: Span,
}

impl ContentLine {
    pub fn new(raw_line: Span, content: Span) -> Self {
        Self {
            raw_line,
            prefix: Span::new(raw_line.start, content.start),
            content,
        }
    }
}

/// Copies each line's content out of the rope.
pub fn content_lines(rope: &Rope, lines: &[ContentLine]) -> Vec<String> {
    lines
        .iter()
        .map(|line| slice_to_string(rope, line.content))
        .collect()
}

/// Joins the lines' content with line breaks: the "without prefix" view of
/// a block.
pub fn join_content(rope: &Rope, lines: &[ContentLine]) -> String {
    let mut out = String::new();
    for (i, line) in content_lines(rope, lines).iter().enumerate() {
        if i > 0 {
            out.push(Paragraph::LINE_BREAK);
        }
        out.push_str(line);
    }
    out
}
