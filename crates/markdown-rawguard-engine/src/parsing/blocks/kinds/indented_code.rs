/// Indented code block type.
///
/// A run of lines indented by at least [`IndentedCode::WIDTH`] columns that
/// does not continue a paragraph. Interior blank lines belong to the block,
/// trailing ones do not.
pub struct IndentedCode;

impl IndentedCode {
    pub const WIDTH: usize = 4;
    const TAB_STOP: usize = 4;

    /// Column a tab at `col` advances to.
    pub fn tab_stop_after(col: usize) -> usize {
        col + Self::TAB_STOP - col % Self::TAB_STOP
    }

    pub fn opens(indent: usize, is_blank: bool) -> bool {
        !is_blank && indent >= Self::WIDTH
    }

    /// Removes one level of code indentation from a line.
    pub fn strip(line: &str) -> &str {
        let mut col = 0usize;
        for (i, b) in line.bytes().enumerate() {
            if col >= Self::WIDTH {
                return &line[i..];
            }
            match b {
                b' ' => col += 1,
                b'\t' => col = Self::tab_stop_after(col),
                _ => return &line[i..],
            }
        }
        ""
    }
}
