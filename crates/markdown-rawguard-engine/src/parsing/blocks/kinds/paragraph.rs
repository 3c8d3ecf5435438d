/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default leaf block when no
/// other opener matches. Their lines are joined with [`Paragraph::LINE_BREAK`]
/// and parsed for inline content (code spans, emphasis, template tags).
pub struct Paragraph;

impl Paragraph {
    pub const LINE_BREAK: char = '\n';
}
