use super::{classify::LineScan, kinds::ListMarker, types::ContainerFrame};

/// A container opener found on a line, before it is given an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStart {
    BlockQuote,
    ListItem(ListMarker),
}

/// The stack of open container frames, outermost first.
#[derive(Debug, Default, Clone)]
pub struct ContainerPath {
    frames: Vec<ContainerFrame>,
    /// Per depth, the list item most recently closed there. The next item
    /// opened at that depth joins its list if the markers agree.
    closed_items: Vec<Option<ContainerFrame>>,
}

impl ContainerPath {
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[ContainerFrame] {
        &self.frames
    }

    /// Consumes the prefixes of every open frame that continues on this
    /// line, outermost first. Returns how many continued.
    pub fn matched(&self, scan: &mut LineScan) -> usize {
        self.frames
            .iter()
            .take_while(|frame| continues(frame, scan))
            .count()
    }

    /// Closes frames until `depth` remain.
    pub fn close_to(&mut self, depth: usize) {
        while self.frames.len() > depth {
            let Some(frame) = self.frames.pop() else {
                break;
            };
            let at = self.frames.len();
            self.closed_items.truncate(at);
            let item = matches!(frame, ContainerFrame::ListItem { .. }).then_some(frame);
            self.closed_items.resize(at, None);
            self.closed_items.push(item);
        }
    }

    /// Opens a frame one level deeper, stamped with `opened_at` so that
    /// two quotes separated by a blank line are distinct containers.
    pub fn open(&mut self, start: ContainerStart, opened_at: usize) {
        let at = self.frames.len();
        let previous = self.closed_items.get(at).cloned().flatten();
        self.closed_items.truncate(at);

        let frame = match start {
            ContainerStart::BlockQuote => ContainerFrame::BlockQuote { opened_at },
            ContainerStart::ListItem(marker) => {
                let list = match previous {
                    Some(ContainerFrame::ListItem {
                        marker: prev, list, ..
                    }) if prev.same_list(&marker) => list,
                    _ => opened_at,
                };
                ContainerFrame::ListItem {
                    marker,
                    list,
                    opened_at,
                }
            }
        };
        self.frames.push(frame);
    }

    /// A leaf opened at the current depth ends any list waiting to continue
    /// there.
    pub fn leaf_opened(&mut self) {
        self.closed_items.truncate(self.frames.len());
    }
}

/// Whether `frame` continues on the line at `scan`, consuming its prefix.
///
/// A quote needs its `>`. A list item takes blank lines and lines indented
/// to its content column.
fn continues(frame: &ContainerFrame, scan: &mut LineScan) -> bool {
    match frame {
        ContainerFrame::BlockQuote { .. } => scan.quote_marker(),
        ContainerFrame::ListItem { marker, .. } => {
            if scan.is_blank() {
                scan.skip_indent(marker.width);
                true
            } else if scan.indent() >= marker.width {
                scan.skip_indent(marker.width);
                true
            } else {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::ListMarker;

    fn item(c: char, list: usize, opened_at: usize) -> ContainerFrame {
        ContainerFrame::ListItem {
            marker: ListMarker::bullet(c),
            list,
            opened_at,
        }
    }

    #[test]
    fn deepening_keeps_outer_frames() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::BlockQuote, 0);
        path.open(ContainerStart::BlockQuote, 8);

        assert_eq!(
            path.frames(),
            [
                ContainerFrame::BlockQuote { opened_at: 0 },
                ContainerFrame::BlockQuote { opened_at: 8 },
            ]
        );
    }

    #[test]
    fn reopening_after_close_gets_new_identity() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::BlockQuote, 0);
        let first = path.frames().to_vec();
        path.close_to(0);
        path.open(ContainerStart::BlockQuote, 5);

        assert_eq!(path.depth(), 1);
        assert_ne!(path.frames(), first);
    }

    #[test]
    fn sibling_items_share_a_list() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 0);
        path.close_to(0);
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 6);

        assert_eq!(path.frames(), [item('-', 0, 6)]);
    }

    #[test]
    fn other_bullet_starts_a_new_list() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 0);
        path.close_to(0);
        path.open(ContainerStart::ListItem(ListMarker::bullet('*')), 6);

        assert_eq!(path.frames(), [item('*', 6, 6)]);
    }

    #[test]
    fn leaf_between_items_ends_the_list() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 0);
        path.close_to(0);
        path.leaf_opened();
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 9);

        assert_eq!(path.frames(), [item('-', 9, 9)]);
    }

    #[test]
    fn nested_list_closing_keeps_outer_sibling() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 0);
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 4);
        path.close_to(0);
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 12);

        assert_eq!(path.frames(), [item('-', 0, 12)]);
    }

    #[test]
    fn items_continue_on_indented_and_blank_lines() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::ListItem(ListMarker::ordered(1, '.')), 0);

        let mut scan = LineScan::new("    deeper");
        assert_eq!(path.matched(&mut scan), 1);
        assert_eq!(scan.rest(), " deeper");

        assert_eq!(path.matched(&mut LineScan::new("")), 1);
        assert_eq!(path.matched(&mut LineScan::new("  short")), 0);
    }

    #[test]
    fn quote_inside_item_needs_both_prefixes() {
        let mut path = ContainerPath::default();
        path.open(ContainerStart::ListItem(ListMarker::bullet('-')), 0);
        path.open(ContainerStart::BlockQuote, 0);

        let mut scan = LineScan::new("  > x");
        assert_eq!(path.matched(&mut scan), 2);
        assert_eq!(scan.rest(), "x");
        assert_eq!(path.matched(&mut LineScan::new("> x")), 0);
    }
}
