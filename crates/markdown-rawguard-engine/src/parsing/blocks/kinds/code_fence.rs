/// Which character a fence is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// A line that looks like a fence opener or closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the fence run (at least [`CodeFence::MIN_LEN`]).
    pub len: usize,
    /// Info string after the fence, trimmed. Empty when absent.
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;
    pub const MAX_INDENT: usize = 3;

    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.bytes().take_while(|b| *b == b' ').count();
        if indent > Self::MAX_INDENT {
            return None;
        }
        let t = &t[indent..];

        let kind = match t.as_bytes().first() {
            Some(b'`') => FenceKind::Backticks,
            Some(b'~') => FenceKind::Tildes,
            _ => return None,
        };
        let len = t.chars().take_while(|c| *c == kind.char()).count();
        if len < Self::MIN_LEN {
            return None;
        }

        let info = t[len..].trim();
        // A backtick in the info string would make this an inline code span.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }

        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// Whether `line` closes a fence opened with `open`.
    ///
    /// The closer must use the same character, be at least as long and
    /// carry no info string.
    pub fn closes(open: &FenceSig, line: Option<&FenceSig>) -> bool {
        matches!(line, Some(sig) if sig.kind == open.kind && sig.len >= open.len && sig.info.is_empty())
    }
}
