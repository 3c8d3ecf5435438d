use crate::tree::{CodeBlock, CodeStyle, Container, ContainerKind, Mark, Node, Range};

const INDENT: &str = "  ";

/// Renders a document tree one node per line, children indented.
///
/// ```text
/// Document
///   Paragraph
///     Text "Some " code"inline code" " text."
///   CodeBlock fenced js "let a;"
/// ```
pub fn outline(doc: &crate::tree::Document) -> String {
    let mut lines = vec![];
    container(&mut lines, doc.root(), 0);
    lines.join("\n")
}

fn container(lines: &mut Vec<String>, c: &Container, depth: usize) {
    lines.push(format!("{}{}", INDENT.repeat(depth), label(c.kind)));
    for node in &c.nodes {
        match node {
            Node::Container(child) => container(lines, child, depth + 1),
            other => lines.push(format!("{}{}", INDENT.repeat(depth + 1), leaf(other))),
        }
    }
}

fn leaf(node: &Node) -> String {
    match node {
        Node::Text(text) => {
            let ranges: Vec<_> = text.ranges().iter().map(range).collect();
            format!("Text {}", ranges.join(" "))
        }
        Node::Directive(d) => format!("Directive {:?} {:?}", d.kind, d.expression),
        Node::CodeBlock(block) => format!("CodeBlock {} {:?}", style(block), block.code()),
        Node::Container(c) => label(c.kind),
    }
}

fn label(kind: ContainerKind) -> String {
    match kind {
        ContainerKind::List { loose } => format!("List{}", if loose { " loose" } else { "" }),
        ContainerKind::ListItem(marker) => format!("ListItem {:?}", marker.text()),
        other => format!("{other:?}"),
    }
}

fn range(r: &Range) -> String {
    let marks: Vec<_> = r
        .marks
        .iter()
        .map(|m| match m {
            Mark::Code { .. } => "code",
            Mark::Bold { .. } => "bold",
            Mark::Italic { .. } => "italic",
        })
        .collect();
    format!("{}{:?}", marks.join("+"), r.text)
}

fn style(block: &CodeBlock) -> String {
    match &block.style {
        CodeStyle::Indented => "indented".to_string(),
        CodeStyle::Fenced { info, closed, .. } => {
            let mut s = "fenced".to_string();
            if let Some(info) = info {
                s.push(' ');
                s.push_str(info);
            }
            if !closed {
                s.push_str(" unclosed");
            }
            s
        }
    }
}
