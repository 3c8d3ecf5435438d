/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';
    /// Prefix used when writing quoted lines back out.
    pub const WRITE_PREFIX: &'static str = "> ";
    /// A `>` may be indented by at most this many spaces.
    pub const MAX_INDENT: usize = 3;

    /// Length in bytes of a quote marker at the very start of `s`: the `>`
    /// and one optional following space. Indentation is the caller's job.
    ///
    /// Nested quotes (`>> x`, `> > x`) are one marker per call.
    pub fn marker_len(s: &str) -> Option<usize> {
        let b = s.as_bytes();
        if b.first() != Some(&Self::PREFIX) {
            return None;
        }
        Some(if b.get(1) == Some(&b' ') { 2 } else { 1 })
    }
}
