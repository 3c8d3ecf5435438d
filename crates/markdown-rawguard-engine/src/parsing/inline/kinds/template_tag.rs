use crate::{template::TemplateSyntax, tree::DirectiveKind};

/// Template tag inline type: `{% ... %}`, `{{ ... }}`, `{# ... #}`.
///
/// Unlike the other kinds, the delimiters are not fixed: they come from
/// the configured [`TemplateSyntax`].
pub struct TemplateTag;

impl TemplateTag {
    /// Delimiter pairs to try, skipping kinds with an empty delimiter.
    pub fn candidates(syntax: &TemplateSyntax) -> impl Iterator<Item = (DirectiveKind, &str, &str)> {
        DirectiveKind::ALL.into_iter().filter_map(|kind| {
            let (start, end) = syntax.delimiters(kind);
            (!start.is_empty() && !end.is_empty()).then_some((kind, start, end))
        })
    }
}
