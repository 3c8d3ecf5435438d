//! # Markdown Parsing
//!
//! Source text is parsed in three steps:
//!
//! 1. **Blocks** (`blocks`): lines are classified and grouped into leaf
//!    blocks (paragraphs, fenced and indented code) inside blockquote frames.
//! 2. **Inline** (`inline`): paragraph content is parsed into code spans,
//!    template tags, emphasis and text.
//! 3. **Assembly** (`assemble`): blocks and inline nodes become a
//!    [`Document`] tree.

pub mod assemble;
pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::{template::TemplateSyntax, tree::Document};

use blocks::{BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier, content::join_content};
use source::lines_with_spans;

/// Runs the block phase over the whole rope.
pub fn parse_blocks(rope: &Rope) -> Vec<BlockNode> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish()
}

/// Parses markdown source into a document tree.
pub fn parse_document(rope: &Rope, syntax: &TemplateSyntax) -> Document {
    let blocks = parse_blocks(rope);
    log::trace!("parsed {} blocks", blocks.len());
    assemble::assemble(rope, &blocks, syntax)
}

/// Convenience: inline parse for a given block node (paragraphs only).
///
/// Spans are offsets into the block's joined content, not into the rope.
pub fn parse_inline_for_block(
    rope: &Rope,
    b: &BlockNode,
    syntax: &TemplateSyntax,
) -> Vec<inline::InlineNode> {
    if !matches!(b.kind, BlockKind::Paragraph) {
        return vec![];
    }
    let s = join_content(rope, &b.lines);
    inline::parse_inline(0, &s, syntax)
}
