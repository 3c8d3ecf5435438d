use crate::parsing::blocks::kinds::{FenceKind, IndentedCode};

/// How a code block was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeStyle {
    Fenced {
        fence: FenceKind,
        fence_len: usize,
        info: Option<String>,
        /// False when no closing fence was found.
        closed: bool,
    },
    Indented,
}

/// A block-level code leaf. Its content is opaque: the lines are kept
/// exactly as written (fences and indentation included, container
/// prefixes excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub style: CodeStyle,
    lines: Vec<String>,
}

impl CodeBlock {
    pub fn from_lines(style: CodeStyle, lines: Vec<String>) -> Self {
        Self { style, lines }
    }

    /// A closed backtick fence around `code`.
    pub fn fenced(info: Option<&str>, code: &str) -> Self {
        let fence = "`".repeat(3);
        let mut lines = vec![format!("{fence}{}", info.unwrap_or_default())];
        lines.extend(code.lines().map(str::to_string));
        lines.push(fence);
        Self::from_lines(
            CodeStyle::Fenced {
                fence: FenceKind::Backticks,
                fence_len: 3,
                info: info.map(str::to_string),
                closed: true,
            },
            lines,
        )
    }

    /// The source lines, fences and indentation included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn info(&self) -> Option<&str> {
        match &self.style {
            CodeStyle::Fenced { info, .. } => info.as_deref(),
            CodeStyle::Indented => None,
        }
    }

    pub fn is_closed_fence(&self) -> bool {
        matches!(self.style, CodeStyle::Fenced { closed: true, .. })
    }

    /// The code itself, without fences or code indentation.
    pub fn code(&self) -> String {
        match &self.style {
            CodeStyle::Fenced { closed, .. } => {
                let end = if *closed {
                    self.lines.len().saturating_sub(1)
                } else {
                    self.lines.len()
                };
                self.lines
                    .get(1..end.max(1))
                    .unwrap_or_default()
                    .join("\n")
            }
            CodeStyle::Indented => self
                .lines
                .iter()
                .map(|l| IndentedCode::strip(l))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code().is_empty()
    }
}
