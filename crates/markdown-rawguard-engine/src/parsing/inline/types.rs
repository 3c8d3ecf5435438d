use crate::{parsing::source::Span, tree::DirectiveKind};

/// A parsed inline node with byte spans into the paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span. This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backtick runs.
        inner: Span,
        /// Length of the backtick runs.
        ticks: usize,
    },
    /// A template tag such as `{% raw %}`.
    Template {
        full: Span,
        /// Text between the delimiters.
        inner: Span,
        kind: DirectiveKind,
    },
    /// Emphasis or strong emphasis with its parsed content.
    Emphasis {
        full: Span,
        delimiter: u8,
        strong: bool,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// The full span of any inline node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Template { full, .. }
            | InlineNode::Emphasis { full, .. } => *full,
        }
    }
}
