/// Byte cursor over a paragraph's content.
///
/// Positions are reported in document bytes: `offset` is where `text`
/// starts in the source. Delimiters are ASCII, so stepping one byte at a
/// time never cuts a construct inside a multi-byte char.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
    at: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            offset,
            at: 0,
        }
    }

    /// Document position of the next byte.
    pub fn pos(&self) -> usize {
        self.offset + self.at
    }

    /// Position within `text`.
    pub fn local(&self) -> usize {
        self.at
    }

    /// Converts a position within `text` to a document position.
    pub fn absolute(&self, local: usize) -> usize {
        self.offset + local
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        self.text.get(self.at..).unwrap_or("")
    }

    /// The text between two local positions.
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        self.text.get(from..to).unwrap_or("")
    }

    pub fn is_done(&self) -> bool {
        self.at >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.text.as_bytes().get(self.at + ahead).copied()
    }

    pub fn prev(&self) -> Option<u8> {
        let before = self.at.checked_sub(1)?;
        self.text.as_bytes().get(before).copied()
    }

    pub fn starts_with(&self, delimiter: &str) -> bool {
        self.rest().starts_with(delimiter)
    }

    /// How many copies of `b` follow, starting at the next byte.
    pub fn run_len(&self, b: u8) -> usize {
        self.rest().bytes().take_while(|x| *x == b).count()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.at += 1;
        Some(b)
    }

    pub fn advance(&mut self, n: usize) {
        self.at += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn positions_are_offset_into_the_document() {
        let mut cur = Cursor::new("`x`", 40);
        assert_eq!(cur.pos(), 40);
        cur.bump();
        assert_eq!((cur.local(), cur.pos()), (1, 41));
        assert_eq!(cur.absolute(3), 43);
        assert_eq!(cur.prev(), Some(b'`'));
    }

    #[test]
    fn nothing_before_the_start() {
        assert_eq!(Cursor::new("x", 0).prev(), None);
    }

    #[test]
    fn matches_template_delimiters() {
        let mut cur = Cursor::new("a{% raw %}", 0);
        assert!(!cur.starts_with("{%"));
        cur.bump();
        assert!(cur.starts_with("{%"));
        assert_eq!(cur.rest().find("%}"), Some(7));
        assert_eq!(cur.slice(1, 3), "{%");
    }

    #[test]
    fn backtick_runs() {
        let mut cur = Cursor::new("``x```", 0);
        assert_eq!(cur.run_len(b'`'), 2);
        cur.advance(2);
        assert_eq!(cur.run_len(b'`'), 0);
        assert_eq!(cur.peek_at(1), Some(b'`'));
    }

    #[test]
    fn overrun_is_harmless() {
        let mut cur = Cursor::new("ab", 0);
        cur.advance(5);
        assert!(cur.is_done());
        assert_eq!(cur.rest(), "");
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.run_len(b'a'), 0);
    }
}
