/// Which tag pair a template directive was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `{% ... %}`: statements such as `raw` and `endraw`.
    Expression,
    /// `{{ ... }}`: variable output.
    Variable,
    /// `{# ... #}`: comments.
    Comment,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 3] = [
        DirectiveKind::Expression,
        DirectiveKind::Variable,
        DirectiveKind::Comment,
    ];
}

/// A templating directive node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// The tag body with surrounding whitespace and whitespace-control
    /// dashes removed, e.g. `raw`.
    pub expression: String,
    /// `{%-` form: strip whitespace before the tag.
    pub trim_before: bool,
    /// `-%}` form: strip whitespace after the tag.
    pub trim_after: bool,
}

impl Directive {
    /// A plain `{% expression %}` directive.
    pub fn expression(expression: impl Into<String>) -> Self {
        Self {
            kind: DirectiveKind::Expression,
            expression: expression.into(),
            trim_before: false,
            trim_after: false,
        }
    }

    /// Builds a directive from the text between its delimiters.
    pub fn parse(kind: DirectiveKind, inner: &str) -> Self {
        let mut body = inner.trim();
        let trim_before = body.starts_with('-');
        if trim_before {
            body = &body[1..];
        }
        let trim_after = body.ends_with('-');
        if trim_after {
            body = &body[..body.len() - 1];
        }
        Self {
            kind,
            expression: body.trim().to_string(),
            trim_before,
            trim_after,
        }
    }

    /// True for an expression directive whose body is exactly `expression`.
    pub fn is_expression(&self, expression: &str) -> bool {
        self.kind == DirectiveKind::Expression && self.expression == expression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_body() {
        let d = Directive::parse(DirectiveKind::Expression, "  raw ");
        assert_eq!(d, Directive::expression("raw"));
    }

    #[test]
    fn parse_whitespace_control() {
        let d = Directive::parse(DirectiveKind::Expression, "- endraw -");
        assert!(d.trim_before);
        assert!(d.trim_after);
        assert!(d.is_expression("endraw"));
    }

    #[test]
    fn variable_is_not_an_expression() {
        let d = Directive::parse(DirectiveKind::Variable, " raw ");
        assert!(!d.is_expression("raw"));
    }

    #[test]
    fn lone_dash_body() {
        let d = Directive::parse(DirectiveKind::Variable, "-");
        assert!(d.trim_before);
        assert!(!d.trim_after);
        assert_eq!(d.expression, "");
    }
}
