use super::{
    classify::LineScan,
    containers::ContainerStart,
    kinds::{CodeFence, FenceSig, IndentedCode},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { sig: FenceSig },
    IndentedCode,
}

/// Detects a leaf opener on the unconsumed part of a line.
///
/// Fences beat everything else and may interrupt a paragraph; indented code
/// may not.
pub fn try_open_leaf(scan: &LineScan, in_paragraph: bool) -> Option<BlockOpen> {
    if let Some(sig) = CodeFence::sig(scan.rest()) {
        return Some(BlockOpen::FencedCode { sig });
    }
    if !in_paragraph && IndentedCode::opens(scan.indent(), scan.is_blank()) {
        return Some(BlockOpen::IndentedCode);
    }
    None
}

/// Consumes every container marker at the start of the unconsumed line.
///
/// With `continues_paragraph` set, the first opener would land next to an
/// open paragraph: an empty item, or an ordered item not starting at 1,
/// is paragraph text there.
pub fn try_open_containers(scan: &mut LineScan, continues_paragraph: bool) -> Vec<ContainerStart> {
    let mut starts = vec![];
    while scan.indent() < IndentedCode::WIDTH {
        if scan.quote_marker() {
            starts.push(ContainerStart::BlockQuote);
            continue;
        }
        let mut ahead = *scan;
        let Some(marker) = ahead.list_marker() else {
            break;
        };
        let interrupts = marker.can_interrupt_paragraph() && !ahead.is_blank();
        if starts.is_empty() && continues_paragraph && !interrupts {
            break;
        }
        *scan = ahead;
        starts.push(ContainerStart::ListItem(marker));
    }
    starts
}
