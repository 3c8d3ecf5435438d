//! Marker construction: the nodes spliced around code content.

use crate::tree::{CodeBlock, Container, ContainerKind, Directive, MarkKind, Node, Text};

/// Expression opening a literal region.
pub const RAW_START: &str = "raw";
/// Expression closing a literal region.
pub const RAW_END: &str = "endraw";

/// A standalone block holding a single `{% expression %}` directive.
pub fn templating_node(expression: &str) -> Node {
    let directive = Directive::expression(expression);
    Container::new(ContainerKind::Template, vec![directive.into()]).into()
}

/// Surrounds a code block with raw/endraw marker blocks.
pub fn escape_code_block(block: CodeBlock) -> [Node; 3] {
    [
        templating_node(RAW_START),
        block.into(),
        templating_node(RAW_END),
    ]
}

/// Splits a text node per range, wrapping each code-marked range in
/// inline raw/endraw directives.
///
/// Adjacent code ranges get one pair each. Text without code passes
/// through as a single node.
pub fn escape_text_node(text: &Text) -> Vec<Node> {
    if !text.has_code() {
        return vec![text.clone().into()];
    }
    text.ranges()
        .iter()
        .flat_map(|range| {
            let piece: Node = Text::from_ranges(vec![range.clone()]).into();
            if range.has_mark(MarkKind::Code) {
                vec![
                    Directive::expression(RAW_START).into(),
                    piece,
                    Directive::expression(RAW_END).into(),
                ]
            } else {
                vec![piece]
            }
        })
        .collect()
}
