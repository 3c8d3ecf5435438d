//! Template tag delimiters, shared by the parser (to recognise directives
//! the author wrote) and the serializer (to render them).

use serde::{Deserialize, Serialize};

use crate::tree::{Directive, DirectiveKind};

/// Delimiters of the downstream templating language.
///
/// Defaults to Nunjucks/Jinja syntax. A kind whose start or end delimiter
/// is empty is not recognised by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSyntax {
    pub block_start: String,
    pub block_end: String,
    pub variable_start: String,
    pub variable_end: String,
    pub comment_start: String,
    pub comment_end: String,
    /// Render `{% raw %}` rather than `{%raw%}`.
    pub padded: bool,
}

impl Default for TemplateSyntax {
    fn default() -> Self {
        Self {
            block_start: "{%".to_string(),
            block_end: "%}".to_string(),
            variable_start: "{{".to_string(),
            variable_end: "}}".to_string(),
            comment_start: "{#".to_string(),
            comment_end: "#}".to_string(),
            padded: true,
        }
    }
}

impl TemplateSyntax {
    /// Default delimiters rendered without inner padding (`{%raw%}`).
    pub fn compact() -> Self {
        Self {
            padded: false,
            ..Self::default()
        }
    }

    /// Start and end delimiters for a directive kind.
    pub fn delimiters(&self, kind: DirectiveKind) -> (&str, &str) {
        match kind {
            DirectiveKind::Expression => (self.block_start.as_str(), self.block_end.as_str()),
            DirectiveKind::Variable => (self.variable_start.as_str(), self.variable_end.as_str()),
            DirectiveKind::Comment => (self.comment_start.as_str(), self.comment_end.as_str()),
        }
    }

    /// Writes a directive in this syntax.
    pub fn render(&self, directive: &Directive) -> String {
        let (start, end) = self.delimiters(directive.kind);
        let pad = if self.padded && !directive.expression.is_empty() {
            " "
        } else {
            ""
        };
        let before = if directive.trim_before { "-" } else { "" };
        let after = if directive.trim_after { "-" } else { "" };
        format!(
            "{start}{before}{pad}{}{pad}{after}{end}",
            directive.expression
        )
    }
}
