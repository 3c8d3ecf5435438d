use xi_rope::Rope;

use crate::parsing::blocks::BlockNode;

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within rope bounds
/// - Every line span is contained in its block span
/// - Each line's prefix ends before its content starts
/// - Blocks are emitted in source order without overlap
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    let mut last_end = 0;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= last_end,
            "block overlaps its predecessor: {:?} starts before {}",
            b.span,
            last_end
        );
        last_end = b.span.end;

        for line in &b.lines {
            assert!(
                b.span.contains(line.raw_line),
                "line span not contained in block span: line {:?}, block {:?}",
                line.raw_line,
                b.span
            );
            assert!(
                line.raw_line.contains(line.content),
                "content span outside its line: content {:?}, line {:?}",
                line.content,
                line.raw_line
            );
            assert!(
                line.prefix.end <= line.content.start,
                "prefix {:?} overlaps content {:?}",
                line.prefix,
                line.content
            );
        }
    }
}
