/// The kind of an inline formatting mark, without its source delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Code,
    Bold,
    Italic,
}

/// An inline formatting mark attached to a [`Range`].
///
/// Marks remember the delimiter they were written with so a parsed
/// document serializes back to the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Inline code span delimited by a run of `ticks` backticks.
    Code { ticks: usize },
    /// Strong emphasis written with a doubled `delimiter` (`**` or `__`).
    Bold { delimiter: char },
    /// Emphasis written with a single `delimiter` (`*` or `_`).
    Italic { delimiter: char },
}

impl Mark {
    pub fn code() -> Self {
        Mark::Code { ticks: 1 }
    }

    pub fn bold() -> Self {
        Mark::Bold { delimiter: '*' }
    }

    pub fn italic() -> Self {
        Mark::Italic { delimiter: '*' }
    }

    pub fn kind(&self) -> MarkKind {
        match self {
            Mark::Code { .. } => MarkKind::Code,
            Mark::Bold { .. } => MarkKind::Bold,
            Mark::Italic { .. } => MarkKind::Italic,
        }
    }

    pub fn is_code(&self) -> bool {
        self.kind() == MarkKind::Code
    }
}

/// A contiguous run of text sharing one set of marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    /// The text of the run, as written in the source (code span content
    /// without its backticks).
    pub text: String,
    /// Marks on the run, outermost first. A code mark is always last.
    pub marks: Vec<Mark>,
}

impl Range {
    pub fn new(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, vec![])
    }

    /// A range carrying a single inline code mark.
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, vec![Mark::code()])
    }

    pub fn has_mark(&self, kind: MarkKind) -> bool {
        self.marks.iter().any(|m| m.kind() == kind)
    }

    pub fn code_mark(&self) -> Option<&Mark> {
        self.marks.iter().find(|m| m.is_code())
    }

    /// Marks other than code, which may stay open across neighbouring ranges.
    pub fn outer_marks(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| !m.is_code())
    }
}

/// A text leaf: an ordered sequence of ranges that together form its text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    ranges: Vec<Range>,
}

impl Text {
    pub fn from_ranges(ranges: Vec<Range>) -> Self {
        Self { ranges }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_ranges(vec![Range::plain(text)])
    }

    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// The concatenated text of all ranges, without mark delimiters.
    pub fn text(&self) -> String {
        self.ranges.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn has_code(&self) -> bool {
        self.ranges.iter().any(|r| r.has_mark(MarkKind::Code))
    }
}
