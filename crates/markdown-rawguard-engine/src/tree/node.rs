use crate::parsing::blocks::kinds::ListMarker;

use super::{code::CodeBlock, directive::Directive, text::Text};

/// What a container node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// The document root.
    Document,
    BlockQuote,
    /// A run of sibling [`ContainerKind::ListItem`]s. A loose list has blank
    /// lines between its items or between blocks inside an item.
    List { loose: bool },
    ListItem(ListMarker),
    Paragraph,
    /// A block holding only template directives, written on a line of its
    /// own. Only the annotator creates these.
    Template,
}

/// A node with an ordered child sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub kind: ContainerKind,
    pub nodes: Vec<Node>,
}

impl Container {
    pub fn new(kind: ContainerKind, nodes: Vec<Node>) -> Self {
        Self { kind, nodes }
    }

    /// A copy of this container with its children replaced.
    #[must_use]
    pub fn with_nodes(&self, nodes: Vec<Node>) -> Self {
        Self {
            kind: self.kind,
            nodes,
        }
    }

    /// True if every child is a directive (and there is at least one).
    pub fn only_directives(&self) -> bool {
        !self.nodes.is_empty() && self.nodes.iter().all(|n| n.kind() == NodeKind::Directive)
    }
}

/// Node discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Container,
    CodeBlock,
    Text,
    Directive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Container(Container),
    CodeBlock(CodeBlock),
    Text(Text),
    Directive(Directive),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Container(_) => NodeKind::Container,
            Node::CodeBlock(_) => NodeKind::CodeBlock,
            Node::Text(_) => NodeKind::Text,
            Node::Directive(_) => NodeKind::Directive,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Node::CodeBlock(b) => Some(b),
            _ => None,
        }
    }
}

impl From<Container> for Node {
    fn from(c: Container) -> Self {
        Node::Container(c)
    }
}

impl From<CodeBlock> for Node {
    fn from(b: CodeBlock) -> Self {
        Node::CodeBlock(b)
    }
}

impl From<Text> for Node {
    fn from(t: Text) -> Self {
        Node::Text(t)
    }
}

impl From<Directive> for Node {
    fn from(d: Directive) -> Self {
        Node::Directive(d)
    }
}

/// A parsed document: a tree rooted at a [`ContainerKind::Document`] container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Container,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            root: Container::new(ContainerKind::Document, nodes),
        }
    }

    pub fn from_root(root: Container) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn nodes(&self) -> &[Node] {
        &self.root.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.root.nodes.is_empty()
    }
}
