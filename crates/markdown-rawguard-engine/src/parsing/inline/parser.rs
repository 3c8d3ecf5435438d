use crate::{parsing::source::Span, template::TemplateSyntax};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, TemplateTag},
    types::InlineNode,
};

const BACKSLASH: u8 = b'\\';

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset where `s` begins (for absolute span positions)
/// - `s`: The string content to parse (typically a paragraph's joined content)
/// - `syntax`: Template delimiters to recognise as directives
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them:
/// `` `{% raw %}` `` is a code span, not a directive. Template tags come
/// next, then emphasis. A backslash escape keeps the escaped byte literal.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str, syntax: &TemplateSyntax) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.is_done() {
        if skip_escape(&mut cur) {
            continue;
        }
        if let Some(node) = try_parse_construct(&mut cur, syntax) {
            let sp = node.span();
            flush_text(&mut out, text_start, sp.start);
            text_start = sp.end;
            out.push(node);
            continue;
        }
        skip_literal(&mut cur);
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>, syntax: &TemplateSyntax) -> Option<InlineNode> {
    if let Some(node) = try_parse_code_span(cur) {
        return Some(node);
    }
    if let Some(node) = try_parse_template(cur, syntax) {
        return Some(node);
    }
    try_parse_emphasis(cur, syntax)
}

/// Skips `\` followed by ASCII punctuation.
fn skip_escape(cur: &mut Cursor<'_>) -> bool {
    if cur.peek() == Some(BACKSLASH) && cur.peek_at(1).is_some_and(|b| b.is_ascii_punctuation()) {
        cur.advance(2);
        return true;
    }
    false
}

/// Consumes input that opened no construct. Delimiter runs are consumed
/// whole so an unmatched run can't be re-read as a shorter opener.
fn skip_literal(cur: &mut Cursor<'_>) {
    match cur.peek() {
        Some(b) if b == CodeSpan::TICK || Emphasis::is_delimiter(b) => {
            let run = cur.run_len(b);
            cur.advance(run);
        }
        _ => {
            cur.bump();
        }
    }
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if no closing run of the same
/// length follows. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    let ticks = cur.run_len(CodeSpan::TICK);
    cur.advance(ticks);
    let inner_start = cur.pos();

    while !cur.is_done() {
        if cur.peek() == Some(CodeSpan::TICK) {
            let run = cur.run_len(CodeSpan::TICK);
            if run == ticks {
                let inner_end = cur.pos();
                cur.advance(run);
                return Some(InlineNode::CodeSpan {
                    full: Span::new(start, cur.pos()),
                    inner: Span::new(inner_start, inner_end),
                    ticks,
                });
            }
            cur.advance(run);
            continue;
        }
        cur.bump();
    }

    // Not closed, restore cursor
    *cur = saved;
    None
}

/// Attempts to parse a template tag using the configured delimiters.
///
/// The body runs to the first closing delimiter of the same kind.
fn try_parse_template(cur: &mut Cursor<'_>, syntax: &TemplateSyntax) -> Option<InlineNode> {
    for (kind, open, close) in TemplateTag::candidates(syntax) {
        if !cur.starts_with(open) {
            continue;
        }
        let Some(offset) = cur.rest()[open.len()..].find(close) else {
            continue;
        };
        let start = cur.pos();
        let inner = Span::new(start + open.len(), start + open.len() + offset);
        cur.advance(open.len() + offset + close.len());
        return Some(InlineNode::Template {
            full: Span::new(start, cur.pos()),
            inner,
            kind,
        });
    }
    None
}

/// Attempts to parse emphasis (`*x*`, `_x_`) or strong emphasis (`**x**`).
///
/// The opener must be followed by non-whitespace and the closer preceded by
/// non-whitespace. Code spans, template tags and escapes are skipped while
/// looking for the closer. Content is parsed recursively.
fn try_parse_emphasis(cur: &mut Cursor<'_>, syntax: &TemplateSyntax) -> Option<InlineNode> {
    let delimiter = cur.peek().filter(|b| Emphasis::is_delimiter(*b))?;
    if Emphasis::blocked_by_word(delimiter, cur.prev()) {
        return None;
    }
    let width = if cur.run_len(delimiter) >= Emphasis::STRONG_LEN {
        Emphasis::STRONG_LEN
    } else {
        1
    };
    if cur.peek_at(width).is_none_or(|b| b.is_ascii_whitespace()) {
        return None;
    }

    let start = cur.pos();
    let mut scan = cur.clone();
    scan.advance(width);
    let open_end = scan.local();

    while !scan.is_done() {
        if skip_escape(&mut scan)
            || try_parse_code_span(&mut scan).is_some()
            || try_parse_template(&mut scan, syntax).is_some()
        {
            continue;
        }
        if scan.peek() != Some(delimiter) {
            scan.bump();
            continue;
        }

        let run = scan.run_len(delimiter);
        let closes = if width == 1 { run == 1 } else { run >= width };
        let valid = closes
            && scan.local() > open_end
            && scan.prev().is_some_and(|b| !b.is_ascii_whitespace())
            && !Emphasis::blocked_by_word(delimiter, scan.peek_at(run));
        if !valid {
            scan.advance(run);
            continue;
        }

        // A longer closing run closes with its last delimiters.
        scan.advance(run - width);
        let inner_end = scan.local();
        scan.advance(width);
        let children = parse_inline(
            scan.absolute(open_end),
            scan.slice(open_end, inner_end),
            syntax,
        );
        let full = Span::new(start, scan.pos());
        *cur = scan;
        return Some(InlineNode::Emphasis {
            full,
            delimiter,
            strong: width == Emphasis::STRONG_LEN,
            children,
        });
    }
    None
}
