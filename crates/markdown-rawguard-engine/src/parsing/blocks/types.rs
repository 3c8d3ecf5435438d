use crate::parsing::source::Span;

use super::{
    content::ContentLine,
    kinds::{FenceKind, ListMarker},
};

/// A frame in the container stack representing a nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container.
    BlockQuote {
        /// Byte offset of the line that opened this quote.
        opened_at: usize,
    },
    /// One item of a list.
    ListItem {
        marker: ListMarker,
        /// `opened_at` of the list's first item; equal for siblings.
        list: usize,
        /// Byte offset of the line holding this item's marker.
        opened_at: usize,
    },
}

impl ContainerFrame {
    /// Whether two frames at the same level belong to one container in the
    /// tree: the same quote, or items of the same list.
    pub fn same_group(&self, other: &ContainerFrame) -> bool {
        match (self, other) {
            (
                ContainerFrame::ListItem { list: a, .. },
                ContainerFrame::ListItem { list: b, .. },
            ) => a == b,
            _ => self == other,
        }
    }
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// A fenced code block (``` or ~~~).
    FencedCode {
        kind: FenceKind,
        /// Length of the opening fence run.
        fence_len: usize,
        /// Info string of the opening fence, if any.
        info: Option<String>,
        /// False when the fence ran to the end of its container.
        closed: bool,
    },
    /// A block of lines indented by four or more columns.
    IndentedCode,
}

impl BlockKind {
    pub fn is_code(&self) -> bool {
        matches!(self, BlockKind::FencedCode { .. } | BlockKind::IndentedCode)
    }
}

/// A parsed leaf block with its containers, kind and per-line content.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The container stack this block is nested within.
    pub containers: Vec<ContainerFrame>,
    pub kind: BlockKind,
    /// Full byte span of the block's lines, prefixes and delimiters included.
    pub span: Span,
    /// One entry per physical line, prefixes split from content.
    pub lines: Vec<ContentLine>,
    /// A blank line separates this block from whatever came before it.
    pub after_blank: bool,
}
