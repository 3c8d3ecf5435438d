/// What opens a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `-`, `*` or `+`.
    Bullet(char),
    /// A number followed by `.` or `)`. `digits` keeps leading zeros.
    Ordered {
        number: u32,
        digits: usize,
        delimiter: char,
    },
}

/// A list item marker and the column its content starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListMarker {
    pub kind: MarkerKind,
    /// Columns of indentation before the marker.
    pub indent: usize,
    /// Columns from where the item starts to where its content starts:
    /// the indentation, the marker and its padding. Continuation lines must
    /// be indented this far to stay in the item.
    pub width: usize,
}

impl ListMarker {
    pub fn bullet(c: char) -> Self {
        Self {
            kind: MarkerKind::Bullet(c),
            indent: 0,
            width: 2,
        }
    }

    pub fn ordered(number: u32, delimiter: char) -> Self {
        let digits = number.to_string().len();
        Self {
            kind: MarkerKind::Ordered {
                number,
                digits,
                delimiter,
            },
            indent: 0,
            width: digits + 2,
        }
    }

    /// The marker as written, without padding.
    pub fn text(&self) -> String {
        match self.kind {
            MarkerKind::Bullet(c) => c.to_string(),
            MarkerKind::Ordered {
                number,
                digits,
                delimiter,
            } => format!("{number:0digits$}{delimiter}"),
        }
    }

    /// The marker with its indentation and padding, ready to precede the
    /// item's first line of content.
    pub fn lead(&self) -> String {
        let text = self.text();
        let pad = self.width.saturating_sub(self.indent).max(text.len() + 1);
        format!("{:indent$}{text:<pad$}", "", indent = self.indent)
    }

    /// Whether an item with `other` continues the list this marker is in.
    pub fn same_list(&self, other: &ListMarker) -> bool {
        match (self.kind, other.kind) {
            (MarkerKind::Bullet(a), MarkerKind::Bullet(b)) => a == b,
            (
                MarkerKind::Ordered { delimiter: a, .. },
                MarkerKind::Ordered { delimiter: b, .. },
            ) => a == b,
            _ => false,
        }
    }

    /// Only bullets and lists starting at 1 may interrupt a paragraph.
    pub fn can_interrupt_paragraph(&self) -> bool {
        match self.kind {
            MarkerKind::Bullet(_) => true,
            MarkerKind::Ordered { number, .. } => number == 1,
        }
    }
}

/// List item block type. A list is a run of items whose markers agree on
/// [`ListMarker::same_list`].
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const DELIMITERS: [u8; 2] = [b'.', b')'];
    /// A marker may be indented by at most this many spaces.
    pub const MAX_INDENT: usize = 3;
    /// With more padding than this after the marker, the content is indented
    /// code and the item's content starts one column past the marker.
    pub const MAX_PADDING: usize = 4;
    const MAX_DIGITS: usize = 9;
    const BREAK_CHARS: [u8; 3] = [b'-', b'*', b'_'];
    const BREAK_MIN: usize = 3;

    /// Reads a marker at the very start of `s`. It must be followed by
    /// whitespace or the end of the line.
    ///
    /// Returns the marker kind and its length in bytes.
    pub fn marker(s: &str) -> Option<(MarkerKind, usize)> {
        let b = s.as_bytes();
        let first = *b.first()?;

        let (kind, len) = if Self::BULLETS.contains(&first) {
            (MarkerKind::Bullet(char::from(first)), 1)
        } else {
            let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let delimiter = *b.get(digits)?;
            if !Self::DELIMITERS.contains(&delimiter) {
                return None;
            }
            let number = s[..digits].parse().ok()?;
            let kind = MarkerKind::Ordered {
                number,
                digits,
                delimiter: char::from(delimiter),
            };
            (kind, digits + 1)
        };

        match b.get(len) {
            None | Some(b' ' | b'\t') => Some((kind, len)),
            _ => None,
        }
    }

    /// Whether `s` is a thematic break such as `***` or `- - -`. A break
    /// wins over a bullet.
    pub fn is_thematic_break(s: &str) -> bool {
        let t = s.trim();
        let Some(&c) = t.as_bytes().first() else {
            return false;
        };
        if !Self::BREAK_CHARS.contains(&c) {
            return false;
        }
        let mut count = 0;
        for b in t.bytes() {
            match b {
                b' ' | b'\t' => {}
                b if b == c => count += 1,
                _ => return false,
            }
        }
        count >= Self::BREAK_MIN
    }
}
