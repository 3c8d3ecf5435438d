//! Builds the document tree from parsed blocks.
//!
//! Blocks sharing a blockquote frame are grouped into nested
//! [`ContainerKind::BlockQuote`] containers; blocks under the items of one
//! list become a [`ContainerKind::List`] of [`ContainerKind::ListItem`]s.
//! Paragraph content is
//! inline-parsed and flattened into `Text` and `Directive` children: each
//! text run carries the marks of the emphasis and code spans around it.

use xi_rope::Rope;

use crate::{
    template::TemplateSyntax,
    tree::{
        CodeBlock, CodeStyle, Container, ContainerKind, Directive, Document, Mark, Node, Range,
        Text,
    },
};

use super::{
    blocks::{BlockKind, BlockNode, ContainerFrame, content::{content_lines, join_content}},
    inline::{InlineNode, parse_inline},
    source::Span,
};

pub fn assemble(rope: &Rope, blocks: &[BlockNode], syntax: &TemplateSyntax) -> Document {
    Document::new(nest(rope, blocks, 0, syntax))
}

/// Converts `blocks` into nodes, opening a container for each group of
/// blocks sharing a quote or a list at `level`.
fn nest(rope: &Rope, blocks: &[BlockNode], level: usize, syntax: &TemplateSyntax) -> Vec<Node> {
    groups(blocks, level, ContainerFrame::same_group)
        .into_iter()
        .map(|group| match group[0].containers.get(level) {
            None => leaf(rope, &group[0], syntax),
            Some(ContainerFrame::BlockQuote { .. }) => {
                let children = nest(rope, group, level + 1, syntax);
                Container::new(ContainerKind::BlockQuote, children).into()
            }
            Some(ContainerFrame::ListItem { .. }) => list(rope, group, level, syntax),
        })
        .collect()
}

/// Builds a list from blocks whose frames at `level` are items of one list.
fn list(rope: &Rope, blocks: &[BlockNode], level: usize, syntax: &TemplateSyntax) -> Node {
    let items = groups(blocks, level, |a, b| a == b);
    let loose = items.iter().skip(1).any(|item| item[0].after_blank)
        || items.iter().any(|item| {
            groups(item, level + 1, ContainerFrame::same_group)
                .iter()
                .skip(1)
                .any(|child| child[0].after_blank)
        });

    let nodes = items
        .into_iter()
        .filter_map(|item| match item[0].containers.get(level) {
            Some(ContainerFrame::ListItem { marker, .. }) => {
                let children = nest(rope, item, level + 1, syntax);
                Some(Node::from(Container::new(ContainerKind::ListItem(*marker), children)))
            }
            _ => None,
        })
        .collect();
    Container::new(ContainerKind::List { loose }, nodes).into()
}

/// Splits `blocks` into runs whose frames at `level` satisfy `same`. A
/// block with no frame at `level` is a run of its own.
fn groups(
    blocks: &[BlockNode],
    level: usize,
    same: impl Fn(&ContainerFrame, &ContainerFrame) -> bool,
) -> Vec<&[BlockNode]> {
    let mut out = vec![];
    let mut rest = blocks;
    while let Some(first) = rest.first() {
        let run = match first.containers.get(level) {
            None => 1,
            Some(frame) => rest
                .iter()
                .take_while(|b| b.containers.get(level).is_some_and(|f| same(frame, f)))
                .count(),
        };
        let (group, tail) = rest.split_at(run);
        out.push(group);
        rest = tail;
    }
    out
}

fn leaf(rope: &Rope, block: &BlockNode, syntax: &TemplateSyntax) -> Node {
    match &block.kind {
        BlockKind::Paragraph => {
            let content = join_content(rope, &block.lines);
            let inline = parse_inline(0, &content, syntax);
            let mut sink = InlineSink::new(&content);
            sink.walk(&inline);
            Container::new(ContainerKind::Paragraph, sink.finish()).into()
        }
        BlockKind::FencedCode {
            kind,
            fence_len,
            info,
            closed,
        } => {
            let style = CodeStyle::Fenced {
                fence: *kind,
                fence_len: *fence_len,
                info: info.clone(),
                closed: *closed,
            };
            CodeBlock::from_lines(style, content_lines(rope, &block.lines)).into()
        }
        BlockKind::IndentedCode => {
            CodeBlock::from_lines(CodeStyle::Indented, content_lines(rope, &block.lines)).into()
        }
    }
}

/// Flattens inline nodes into paragraph children.
///
/// Ranges accumulate into one `Text` until a template tag interrupts it.
struct InlineSink<'a> {
    content: &'a str,
    marks: Vec<Mark>,
    ranges: Vec<Range>,
    nodes: Vec<Node>,
}

impl<'a> InlineSink<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            marks: vec![],
            ranges: vec![],
            nodes: vec![],
        }
    }

    fn slice(&self, sp: Span) -> &'a str {
        self.content.get(sp.start..sp.end).unwrap_or_default()
    }

    fn walk(&mut self, inline: &[InlineNode]) {
        for node in inline {
            match node {
                InlineNode::Text(sp) => {
                    let range = Range::new(self.slice(*sp), self.marks.clone());
                    self.ranges.push(range);
                }
                InlineNode::CodeSpan { inner, ticks, .. } => {
                    let mut marks = self.marks.clone();
                    marks.push(Mark::Code { ticks: *ticks });
                    self.ranges.push(Range::new(self.slice(*inner), marks));
                }
                InlineNode::Template { inner, kind, .. } => {
                    self.flush();
                    let directive = Directive::parse(*kind, self.slice(*inner));
                    self.nodes.push(directive.into());
                }
                InlineNode::Emphasis {
                    delimiter,
                    strong,
                    children,
                    ..
                } => {
                    let delimiter = char::from(*delimiter);
                    self.marks.push(if *strong {
                        Mark::Bold { delimiter }
                    } else {
                        Mark::Italic { delimiter }
                    });
                    self.walk(children);
                    self.marks.pop();
                }
            }
        }
    }

    fn flush(&mut self) {
        if !self.ranges.is_empty() {
            let ranges = std::mem::take(&mut self.ranges);
            self.nodes.push(Text::from_ranges(ranges).into());
        }
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush();
        self.nodes
    }
}
