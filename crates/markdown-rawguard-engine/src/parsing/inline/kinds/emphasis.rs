/// Emphasis inline type: `*italic*`, `_italic_`, `**bold**`, `__bold__`.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// A doubled delimiter makes strong emphasis.
    pub const STRONG_LEN: usize = 2;

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Underscore emphasis may not start or end inside a word.
    pub fn blocked_by_word(delimiter: u8, neighbour: Option<u8>) -> bool {
        delimiter == Self::UNDERSCORE && neighbour.is_some_and(|b| b.is_ascii_alphanumeric())
    }
}
