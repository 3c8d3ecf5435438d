//! Whole-page preparation: parse, annotate, serialize.

use xi_rope::Rope;

use crate::{
    annotate::{RawLevel, Summary, annotate},
    parsing::{parse_document, source::LineEnding},
    serialize::serialize_document,
    template::TemplateSyntax,
};

/// Output of [`prepare_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    pub output: String,
    pub summary: Summary,
    /// Raw level left open at the end of the page.
    pub raw_level: RawLevel,
}

/// Wraps every code block and inline code span of a markdown page in
/// `{% raw %}` / `{% endraw %}`, using the default template syntax.
///
/// ```
/// let out = markdown_rawguard_engine::prepare("Use `{{ x }}`.");
/// assert_eq!(out, "Use {% raw %}`{{ x }}`{% endraw %}.\n");
/// ```
pub fn prepare(source: &str) -> String {
    prepare_with(source, &TemplateSyntax::default()).output
}

/// Like [`prepare`], with the given template syntax. The output keeps the
/// line ending of the page's first line.
pub fn prepare_with(source: &str, syntax: &TemplateSyntax) -> Prepared {
    let rope = Rope::from(source);
    let document = parse_document(&rope, syntax);
    let annotated = annotate(&document);
    let output = LineEnding::detect(source).apply(serialize_document(&annotated.document, syntax));

    log::debug!(
        "wrapped {} code blocks and {} code spans",
        annotated.summary.wrapped_blocks,
        annotated.summary.wrapped_spans
    );

    Prepared {
        output,
        summary: annotated.summary,
        raw_level: annotated.raw_level,
    }
}
