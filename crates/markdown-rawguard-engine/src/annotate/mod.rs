//! # Raw Annotation
//!
//! Wraps code content in `{% raw %}` / `{% endraw %}` directives so a
//! template engine renders it literally.
//!
//! The walk is a post-order fold over the tree: a container's children are
//! visited first, then its own child list is rewritten. A [`Walk`]
//! accumulator threads the raw level and the wrap counts through the fold.
//!
//! Every code block and every inline code range is wrapped, whether or not
//! it already sits inside an author-written raw region. The level is
//! tracked (`raw` increments it, `endraw` resets it to zero) and reported,
//! but never consulted when wrapping.

pub mod escape;

use crate::{
    parsing::source::preview,
    tree::{Container, Directive, Document, MarkKind, Node},
};

pub use escape::{RAW_END, RAW_START, escape_code_block, escape_text_node, templating_node};

/// How many author-written raw regions the walk is inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawLevel(usize);

impl RawLevel {
    pub const OUTSIDE: RawLevel = RawLevel(0);

    pub fn depth(self) -> usize {
        self.0
    }

    pub fn is_inside(self) -> bool {
        self.0 > 0
    }

    /// The level after passing `directive`.
    ///
    /// `raw` nests one level deeper; `endraw` closes every level at once.
    #[must_use]
    pub fn observe(self, directive: &Directive) -> Self {
        if directive.is_expression(RAW_START) {
            RawLevel(self.0 + 1)
        } else if directive.is_expression(RAW_END) {
            RawLevel::OUTSIDE
        } else {
            self
        }
    }
}

/// Counts of what a pass wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub wrapped_blocks: usize,
    pub wrapped_spans: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.wrapped_blocks + self.wrapped_spans
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The result of [`annotate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub document: Document,
    /// Level at the end of the walk; non-zero when a `raw` was never closed.
    pub raw_level: RawLevel,
    pub summary: Summary,
}

/// Fold accumulator.
#[derive(Debug, Clone, Copy, Default)]
struct Walk {
    level: RawLevel,
    summary: Summary,
}

impl Walk {
    fn observe(self, directive: &Directive) -> Self {
        let level = self.level.observe(directive);
        if directive.is_expression(RAW_END) && !self.level.is_inside() {
            log::debug!("`{RAW_END}` outside a raw region");
        }
        if level != self.level {
            log::trace!("raw level {} -> {}", self.level.depth(), level.depth());
        }
        Self { level, ..self }
    }
}

/// Wraps all code content in `doc`, returning the new tree.
///
/// The input is not modified.
pub fn transform(doc: &Document) -> Document {
    annotate(doc).document
}

/// Like [`transform`], also reporting the final raw level and wrap counts.
pub fn annotate(doc: &Document) -> Annotated {
    let (root, walk) = visit_container(doc.root(), Walk::default());
    if walk.level.is_inside() {
        log::debug!("document ends inside {} raw region(s)", walk.level.depth());
    }
    Annotated {
        document: Document::from_root(root),
        raw_level: walk.level,
        summary: walk.summary,
    }
}

fn visit(node: &Node, walk: Walk) -> (Node, Walk) {
    match node {
        Node::Directive(directive) => (node.clone(), walk.observe(directive)),
        Node::Text(_) | Node::CodeBlock(_) => (node.clone(), walk),
        Node::Container(container) => {
            let (container, walk) = visit_container(container, walk);
            (container.into(), walk)
        }
    }
}

fn visit_container(container: &Container, walk: Walk) -> (Container, Walk) {
    let (children, walk) = container.nodes.iter().fold(
        (Vec::with_capacity(container.nodes.len()), walk),
        |(mut children, walk), child| {
            let (child, walk) = visit(child, walk);
            children.push(child);
            (children, walk)
        },
    );
    let (nodes, walk) = annotate_node(children, walk);
    (container.with_nodes(nodes), walk)
}

/// Rewrites a container's visited children, splicing markers around code.
fn annotate_node(children: Vec<Node>, mut walk: Walk) -> (Vec<Node>, Walk) {
    let nodes = children
        .into_iter()
        .flat_map(|child| match child {
            Node::CodeBlock(block) => {
                walk.summary.wrapped_blocks += 1;
                log::trace!("wrapping code block {:?}", preview(&block.code(), 40));
                escape_code_block(block).to_vec()
            }
            Node::Text(text) => {
                walk.summary.wrapped_spans += text
                    .ranges()
                    .iter()
                    .filter(|r| r.has_mark(MarkKind::Code))
                    .count();
                escape_text_node(&text)
            }
            other => vec![other],
        })
        .collect();
    (nodes, walk)
}
