use crate::parsing::source::{LineRef, Span};

use super::kinds::{BlockQuote, IndentedCode, ListItem, ListMarker};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing. Which prefixes of the line belong to
/// open containers depends on context, so the builder walks the line with a
/// [`LineScan`] instead of relying on precomputed markers.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, newline included.
    pub line: Span,
    /// The line without its trailing newline.
    pub text: String,
}

impl LineClass {
    pub fn scan(&self) -> LineScan<'_> {
        LineScan::new(&self.text)
    }

    /// Rope span from local offset `at` to the end of the line's text.
    pub fn span_from(&self, at: usize) -> Span {
        let at = at.min(self.text.len());
        Span::new(self.line.start + at, self.line.start + self.text.len())
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        LineClass {
            line: lr.span,
            text: lr.text.trim_end_matches(['\r', '\n']).to_string(),
        }
    }
}

/// A position in a line that knows its column, so tabs and container
/// indentation are measured the same way on every line.
#[derive(Debug, Clone, Copy)]
pub struct LineScan<'a> {
    text: &'a str,
    at: usize,
    col: usize,
}

impl<'a> LineScan<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, at: 0, col: 0 }
    }

    /// Unconsumed part of the line.
    pub fn rest(&self) -> &'a str {
        self.text.get(self.at..).unwrap_or("")
    }

    /// Local byte offset of [`LineScan::rest`].
    pub fn offset(&self) -> usize {
        self.at
    }

    pub fn is_blank(&self) -> bool {
        self.rest().trim().is_empty()
    }

    /// Columns of whitespace before the next non-blank character.
    pub fn indent(&self) -> usize {
        let mut col = self.col;
        for b in self.rest().bytes() {
            match b {
                b' ' => col += 1,
                b'\t' => col = IndentedCode::tab_stop_after(col),
                _ => break,
            }
        }
        col - self.col
    }

    /// Consumes up to `cols` columns of whitespace. A tab reaching past the
    /// limit is consumed whole.
    pub fn skip_indent(&mut self, cols: usize) {
        let target = self.col + cols;
        while self.col < target {
            match self.rest().as_bytes().first() {
                Some(b' ') => self.col += 1,
                Some(b'\t') => self.col = IndentedCode::tab_stop_after(self.col),
                _ => break,
            }
            self.at += 1;
        }
    }

    fn advance(&mut self, bytes: usize) {
        self.at += bytes;
        self.col += bytes;
    }

    /// Consumes one blockquote marker and its optional space.
    pub fn quote_marker(&mut self) -> bool {
        let indent = self.indent();
        if indent > BlockQuote::MAX_INDENT {
            return false;
        }
        let mut ahead = *self;
        ahead.skip_indent(indent);
        let Some(len) = BlockQuote::marker_len(ahead.rest()) else {
            return false;
        };
        ahead.advance(len);
        *self = ahead;
        true
    }

    /// Consumes a list item marker and its padding, returning the marker
    /// with the item's content width measured from the current column.
    pub fn list_marker(&mut self) -> Option<ListMarker> {
        let indent = self.indent();
        if indent > ListItem::MAX_INDENT {
            return None;
        }
        let start = self.col;
        let mut ahead = *self;
        ahead.skip_indent(indent);
        if ListItem::is_thematic_break(ahead.rest()) {
            return None;
        }
        let (kind, len) = ListItem::marker(ahead.rest())?;
        ahead.advance(len);

        let padding = ahead.indent();
        let padding = if ahead.is_blank() || padding > ListItem::MAX_PADDING {
            1
        } else {
            padding
        };
        if !ahead.is_blank() {
            ahead.skip_indent(padding);
        }
        *self = ahead;
        Some(ListMarker {
            kind,
            indent,
            width: self.col - start + if self.is_blank() { padding } else { 0 },
        })
    }
}
