use crate::parsing::source::Span;

use super::{
    classify::{LineClass, LineScan},
    containers::{ContainerPath, ContainerStart},
    content::ContentLine,
    kinds::{CodeFence, FenceSig, IndentedCode},
    open::{BlockOpen, try_open_containers, try_open_leaf},
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<ContentLine>,
    },
    Fence {
        sig: FenceSig,
        lines: Vec<ContentLine>,
    },
    Indented {
        lines: Vec<ContentLine>,
        /// Blank lines seen since the last code line. They belong to the
        /// block only if another code line follows.
        pending_blank: usize,
    },
}

pub struct BlockBuilder {
    containers: ContainerPath,
    leaf: LeafState,
    /// A blank line was seen since the current leaf opened.
    blank_seen: bool,
    /// Whether the current leaf opened after a blank line.
    leaf_after_blank: bool,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: ContainerPath::default(),
            leaf: LeafState::None,
            blank_seen: false,
            leaf_after_blank: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let mut scan = c.scan();
        let matched = self.containers.matched(&mut scan);
        let all_matched = matched == self.containers.depth();

        if matches!(self.leaf, LeafState::Fence { .. }) {
            if all_matched {
                self.consume_fence_line(c, &scan);
                return;
            }
            // The fence's container ended before a closing fence.
            self.flush_leaf();
        }

        if matches!(self.leaf, LeafState::Indented { .. }) {
            let continues = scan.is_blank() || scan.indent() >= IndentedCode::WIDTH;
            if continues && all_matched {
                self.extend_indented(c, &scan);
                return;
            }
            self.flush_leaf();
        }

        let in_paragraph = matches!(self.leaf, LeafState::Paragraph { .. });
        let starts = try_open_containers(&mut scan, in_paragraph && all_matched);

        if scan.is_blank() {
            self.flush_leaf();
            self.containers.close_to(matched);
            let opens_item = matches!(starts.last(), Some(ContainerStart::ListItem(_)));
            if starts.is_empty() {
                self.blank_seen = true;
            }
            for start in starts {
                self.containers.open(start, c.line.start);
            }
            if opens_item {
                // An empty item still holds a place in its list.
                self.extend_paragraph(c, c.text.len());
            }
            return;
        }

        let open = try_open_leaf(&scan, in_paragraph && starts.is_empty());

        if in_paragraph && starts.is_empty() && open.is_none() && !all_matched {
            // Lazy continuation: the paragraph keeps its containers.
            self.extend_paragraph(c, scan.offset());
            return;
        }

        if !all_matched || !starts.is_empty() {
            self.flush_leaf();
            self.containers.close_to(matched);
            for start in starts {
                self.containers.open(start, c.line.start);
            }
        }

        match open {
            Some(open) => {
                self.flush_leaf();
                self.open_leaf(open, c, &scan);
            }
            None => self.extend_paragraph(c, scan.offset()),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_leaf();
        self.out
    }

    fn start_leaf(&mut self) {
        self.leaf_after_blank = std::mem::take(&mut self.blank_seen);
        self.containers.leaf_opened();
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass, scan: &LineScan) {
        self.start_leaf();
        let line = ContentLine::new(c.line, c.span_from(scan.offset()));
        self.leaf = match open {
            BlockOpen::FencedCode { sig } => LeafState::Fence {
                sig,
                lines: vec![line],
            },
            BlockOpen::IndentedCode => LeafState::Indented {
                lines: vec![line],
                pending_blank: 0,
            },
        };
    }

    fn consume_fence_line(&mut self, c: &LineClass, scan: &LineScan) {
        let LeafState::Fence { sig, lines } = &mut self.leaf else {
            return;
        };
        lines.push(ContentLine::new(c.line, c.span_from(scan.offset())));

        // Close if this line is a matching fence inside the fence's containers.
        let closer = CodeFence::sig(scan.rest());
        if CodeFence::closes(sig, closer.as_ref()) {
            let sig = sig.clone();
            let lines = std::mem::take(lines);
            self.leaf = LeafState::None;
            self.emit_fence(sig, lines, true);
        }
    }

    fn extend_indented(&mut self, c: &LineClass, scan: &LineScan) {
        if let LeafState::Indented {
            lines,
            pending_blank,
        } = &mut self.leaf
        {
            lines.push(ContentLine::new(c.line, c.span_from(scan.offset())));
            if scan.is_blank() {
                *pending_blank += 1;
            } else {
                *pending_blank = 0;
            }
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass, at: usize) {
        let line = ContentLine::new(c.line, c.span_from(at));
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(line);
        } else {
            self.start_leaf();
            self.leaf = LeafState::Paragraph { lines: vec![line] };
        }
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => self.emit(BlockKind::Paragraph, lines),
            LeafState::Fence { sig, lines } => {
                // Unterminated fence: emit as fence block anyway
                self.emit_fence(sig, lines, false);
            }
            LeafState::Indented {
                mut lines,
                pending_blank,
            } => {
                lines.truncate(lines.len() - pending_blank);
                self.emit(BlockKind::IndentedCode, lines);
                if pending_blank > 0 {
                    self.blank_seen = true;
                }
            }
        }
    }

    fn emit_fence(&mut self, sig: FenceSig, lines: Vec<ContentLine>, closed: bool) {
        let kind = BlockKind::FencedCode {
            kind: sig.kind,
            fence_len: sig.len,
            info: (!sig.info.is_empty()).then_some(sig.info),
            closed,
        };
        self.emit(kind, lines);
    }

    fn emit(&mut self, kind: BlockKind, lines: Vec<ContentLine>) {
        let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
            return;
        };
        let span = Span::new(first.raw_line.start, last.raw_line.end);
        self.out.push(BlockNode {
            containers: self.containers.frames().to_vec(),
            kind,
            span,
            lines,
            after_blank: self.leaf_after_blank,
        });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::{ContainerFrame, MarkdownLineClassifier, content::join_content},
        source::lines_with_spans,
    };
    use xi_rope::Rope;

    fn build(md: &str) -> (Rope, Vec<BlockNode>) {
        let rope = Rope::from(md);
        let mut builder = BlockBuilder::new();
        for lr in lines_with_spans(&rope) {
            builder.push(&MarkdownLineClassifier.classify(&lr));
        }
        let blocks = builder.finish();
        (rope, blocks)
    }

    #[test]
    fn paragraph_then_fence() {
        let (rope, blocks) = build("para\n\n```js\nlet a;\n```\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(
            blocks[1].kind,
            BlockKind::FencedCode {
                kind: crate::parsing::blocks::kinds::FenceKind::Backticks,
                fence_len: 3,
                info: Some("js".to_string()),
                closed: true,
            }
        );
        assert_eq!(join_content(&rope, &blocks[1].lines), "```js\nlet a;\n```");
    }

    #[test]
    fn fence_interrupts_paragraph() {
        let (_, blocks) = build("para\n```\ncode\n```\n");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].kind.is_code());
    }

    #[test]
    fn unterminated_fence_runs_to_eof() {
        let (rope, blocks) = build("```\ncode\n\nmore");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(
            blocks[0].kind,
            BlockKind::FencedCode { closed: false, .. }
        ));
        assert_eq!(join_content(&rope, &blocks[0].lines), "```\ncode\n\nmore");
    }

    #[test]
    fn fence_inside_quote_ends_with_the_quote() {
        let (_, blocks) = build("> ```\n> code\nafter\n");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(
            blocks[0].kind,
            BlockKind::FencedCode { closed: false, .. }
        ));
        assert_eq!(blocks[0].containers.len(), 1);
        assert!(blocks[1].containers.is_empty());
    }

    #[test]
    fn fence_strips_only_its_own_depth() {
        let (rope, blocks) = build("> ```\n> > nested\n> ```\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            join_content(&rope, &blocks[0].lines),
            "```\n> nested\n```"
        );
    }

    #[test]
    fn indented_code_drops_trailing_blanks() {
        let (rope, blocks) = build("    a\n\n    b\n\n\npara\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::IndentedCode);
        assert_eq!(join_content(&rope, &blocks[0].lines), "    a\n\n    b");
    }

    #[test]
    fn indented_line_continues_paragraph() {
        let (_, blocks) = build("para\n    still para\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn lazy_continuation_stays_quoted() {
        let (rope, blocks) = build("> quoted\nlazy\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].containers.len(), 1);
        assert_eq!(join_content(&rope, &blocks[0].lines), "quoted\nlazy");
    }

    #[test]
    fn blank_line_separates_quotes() {
        let (_, blocks) = build("> one\n\n> two\n");
        assert_eq!(blocks.len(), 2);
        assert_ne!(blocks[0].containers, blocks[1].containers);
    }

    #[test]
    fn quoted_blank_line_keeps_quote_open() {
        let (_, blocks) = build("> one\n>\n> two\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].containers, blocks[1].containers);
    }

    #[test]
    fn nested_quote_opens_inner_frame() {
        let (_, blocks) = build("> outer\n> > inner\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[1].containers[1],
            ContainerFrame::BlockQuote { opened_at: 8 }
        );
    }

    #[test]
    fn item_continuation_paragraph_is_not_code() {
        let (rope, blocks) = build("1. Install\n\n    Run version {{ book.version }} now.\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].containers, blocks[1].containers);
        assert!(blocks[1].after_blank);
        assert_eq!(
            join_content(&rope, &blocks[1].lines),
            " Run version {{ book.version }} now."
        );
    }

    #[test]
    fn indented_code_counts_from_item_content() {
        let (rope, blocks) = build("- item\n\n      code\n");
        assert_eq!(blocks[1].kind, BlockKind::IndentedCode);
        assert_eq!(blocks[1].containers.len(), 1);
        assert_eq!(join_content(&rope, &blocks[1].lines), "    code");
    }

    #[test]
    fn nested_item_after_blank_line() {
        let (_, blocks) = build("- outer\n\n    - nested {{ page.title }}\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].containers.len(), 2);
        assert_eq!(blocks[1].containers[0], blocks[0].containers[0]);
        assert!(matches!(
            blocks[1].containers[1],
            ContainerFrame::ListItem { marker, .. } if marker.indent == 2 && marker.width == 4
        ));
    }

    #[test]
    fn fence_inside_tight_item() {
        let (rope, blocks) = build("1. step\n   ```\n   {{ a }}\n   ```\n2. more\n");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(
            blocks[1].kind,
            BlockKind::FencedCode { closed: true, .. }
        ));
        assert_eq!(join_content(&rope, &blocks[1].lines), "```\n{{ a }}\n```");
        assert!(blocks.iter().all(|b| !b.after_blank));

        let (
            ContainerFrame::ListItem { list: first, .. },
            ContainerFrame::ListItem { list: last, .. },
        ) = (blocks[0].containers[0], blocks[2].containers[0])
        else {
            panic!("expected list items: {blocks:?}");
        };
        assert_eq!(first, last);
        assert_ne!(blocks[0].containers, blocks[2].containers);
    }

    #[test]
    fn short_line_ends_the_fence_and_the_item() {
        let (_, blocks) = build("- ```\n  a\nb\n");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(
            blocks[0].kind,
            BlockKind::FencedCode { closed: false, .. }
        ));
        assert!(blocks[1].containers.is_empty());
    }

    #[test]
    fn lazy_line_continues_item_paragraph() {
        let (rope, blocks) = build("- a\nb\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].containers.len(), 1);
        assert_eq!(join_content(&rope, &blocks[0].lines), "a\nb");
    }

    #[test]
    fn numbered_line_inside_paragraph_stays_text() {
        let (_, blocks) = build("The year\n2019. was long\n");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].containers.is_empty());
    }

    #[test]
    fn empty_item_keeps_its_place() {
        let (rope, blocks) = build("-\n- b\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(join_content(&rope, &blocks[0].lines), "");
        assert_ne!(blocks[0].containers, blocks[1].containers);
    }

    #[test]
    fn trailing_blank_of_indented_code_separates() {
        let (_, blocks) = build("    code\n\npara\n");
        assert!(blocks[1].after_blank);
    }
}
