//! # Serialization
//!
//! Writes a [`Document`] back to markdown text in canonical form:
//!
//! - sibling blocks are separated by a blank line, except that a marker
//!   block sits directly against a closed fenced code block
//! - blocks inside a tight list item are not separated at all, so markers
//!   stay in the item at its content indent
//! - blockquote lines get one `> ` per level (`>` on empty lines)
//! - a list item's first line gets its marker, later lines its content
//!   indent
//! - code blocks are written from their source lines
//! - non-empty output ends with a newline

pub mod inline;

use crate::{
    parsing::blocks::kinds::{BlockQuote, ListMarker, Paragraph},
    template::TemplateSyntax,
    tree::{Container, ContainerKind, Document, Node},
};

use inline::InlineWriter;

pub fn serialize_document(doc: &Document, syntax: &TemplateSyntax) -> String {
    let lines = blocks(doc.nodes(), syntax, false);
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes sibling blocks. `tight` is set for the children of an item in a
/// tight list.
fn blocks(nodes: &[Node], syntax: &TemplateSyntax, tight: bool) -> Vec<String> {
    let mut lines = vec![];
    let mut prev: Option<&Node> = None;
    for node in nodes {
        let block = block(node, syntax);
        if block.is_empty() {
            continue;
        }
        if prev.is_some_and(|prev| needs_blank(prev, node, tight)) {
            lines.push(String::new());
        }
        lines.extend(block);
        prev = Some(node);
    }
    lines
}

fn block(node: &Node, syntax: &TemplateSyntax) -> Vec<String> {
    match node {
        Node::CodeBlock(code) => code.lines().to_vec(),
        Node::Container(c) => match c.kind {
            ContainerKind::BlockQuote => blocks(&c.nodes, syntax, false)
                .into_iter()
                .map(|line| quote(&line))
                .collect(),
            ContainerKind::List { loose } => list(&c.nodes, syntax, loose),
            ContainerKind::ListItem(marker) => list_item(marker, &c.nodes, syntax, false),
            ContainerKind::Document => blocks(&c.nodes, syntax, false),
            ContainerKind::Paragraph | ContainerKind::Template => inline_lines(&c.nodes, syntax),
        },
        Node::Text(_) | Node::Directive(_) => inline_lines(std::slice::from_ref(node), syntax),
    }
}

fn inline_lines(nodes: &[Node], syntax: &TemplateSyntax) -> Vec<String> {
    let mut writer = InlineWriter::new(syntax);
    writer.nodes(nodes);
    let text = writer.finish();
    if text.is_empty() {
        return vec![];
    }
    text.split(Paragraph::LINE_BREAK).map(str::to_string).collect()
}

fn quote(line: &str) -> String {
    if line.is_empty() {
        BlockQuote::WRITE_PREFIX.trim_end().to_string()
    } else {
        format!("{}{line}", BlockQuote::WRITE_PREFIX)
    }
}

fn list(items: &[Node], syntax: &TemplateSyntax, loose: bool) -> Vec<String> {
    let mut lines = vec![];
    for (i, item) in items.iter().enumerate() {
        if loose && i > 0 {
            lines.push(String::new());
        }
        match item.as_container() {
            Some(Container {
                kind: ContainerKind::ListItem(marker),
                nodes,
            }) => lines.extend(list_item(*marker, nodes, syntax, !loose)),
            _ => lines.extend(block(item, syntax)),
        }
    }
    lines
}

fn list_item(
    marker: ListMarker,
    nodes: &[Node],
    syntax: &TemplateSyntax,
    tight: bool,
) -> Vec<String> {
    let lead = marker.lead();
    let indent = " ".repeat(lead.len());
    let lines = blocks(nodes, syntax, tight);
    if lines.is_empty() {
        return vec![lead.trim_end().to_string()];
    }
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| match (i, line.is_empty()) {
            (0, true) => lead.trim_end().to_string(),
            (0, false) => format!("{lead}{line}"),
            (_, true) => line,
            (_, false) => format!("{indent}{line}"),
        })
        .collect()
}

/// Whether a blank line goes between two sibling blocks.
///
/// A marker block next to a closed fence needs none: the fence delimits
/// the code on its own. In a tight item only a marker next to other code
/// keeps one, since it would otherwise read as part of that code.
fn needs_blank(prev: &Node, next: &Node, tight: bool) -> bool {
    let is_marker = |n: &Node| {
        n.as_container()
            .is_some_and(|c| c.kind == ContainerKind::Template)
    };
    let is_closed_fence = |n: &Node| n.as_code_block().is_some_and(|b| b.is_closed_fence());
    let is_code = |n: &Node| n.as_code_block().is_some();
    let beside = |other: &dyn Fn(&Node) -> bool| {
        (is_marker(prev) && other(next)) || (other(prev) && is_marker(next))
    };

    if beside(&is_closed_fence) {
        false
    } else if tight {
        beside(&is_code)
    } else {
        true
    }
}
