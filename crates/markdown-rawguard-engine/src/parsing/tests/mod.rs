//! Integration tests for the parsing module.
//!
//! Documents are rendered with [`outline`] and compared against inline
//! `insta` snapshots.

use rstest::rstest;
use xi_rope::Rope;

use crate::{
    parsing::{
        blocks::BlockKind,
        inline::InlineNode,
        parse_blocks, parse_document, parse_inline_for_block,
        snapshot::{invariants, outline},
    },
    template::TemplateSyntax,
};

fn parse_outline(md: &str) -> String {
    let rope = Rope::from(md);
    invariants(&rope, &parse_blocks(&rope));
    outline(&parse_document(&rope, &TemplateSyntax::default()))
}

#[test]
fn paragraph_and_fence() {
    let md = "Some `inline code` text.\n\n```js\nconsole.log(\"hi\");\n```\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      Paragraph
        Text "Some " code"inline code" " text."
      CodeBlock fenced js "console.log(\"hi\");"
    "#);
}

#[test]
fn quote_with_fence() {
    let md = "> quote with `code`\n>\n> ```\n> x\n> ```\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      BlockQuote
        Paragraph
          Text "quote with " code"code"
        CodeBlock fenced "x"
    "#);
}

#[test]
fn emphasis_and_directives() {
    let md = "**bold `c`** and {% raw %}{{ x }}{% endraw %}\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      Paragraph
        Text bold"bold " bold+code"c" " and "
        Directive Expression "raw"
        Directive Variable "x"
        Directive Expression "endraw"
    "#);
}

#[test]
fn indented_code_after_paragraph() {
    let md = "para\n\n    indented\n    code\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      Paragraph
        Text "para"
      CodeBlock indented "indented\ncode"
    "#);
}

#[test]
fn unclosed_fence_runs_to_end() {
    let md = "text\n\n```\ncode";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      Paragraph
        Text "text"
      CodeBlock fenced unclosed "code"
    "#);
}

#[test]
fn item_continuation_is_a_paragraph() {
    let md = "1. Install\n\n    Run version {{ book.version }} now.\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      List loose
        ListItem "1."
          Paragraph
            Text "Install"
          Paragraph
            Text " Run version "
            Directive Variable "book.version"
            Text " now."
    "#);
}

#[test]
fn nested_item_after_blank_line() {
    let md = "- outer\n\n    - nested {{ page.title }}\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      List loose
        ListItem "-"
          Paragraph
            Text "outer"
          List
            ListItem "-"
              Paragraph
                Text "nested "
                Directive Variable "page.title"
    "#);
}

#[test]
fn indented_code_inside_item() {
    let md = "- item\n\n      {{ code }}\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      List loose
        ListItem "-"
          Paragraph
            Text "item"
          CodeBlock indented "{{ code }}"
    "#);
}

#[test]
fn fence_in_tight_item() {
    let md = "1. step\n   ```\n   {{ a }}\n   ```\n2. more\n";
    insta::assert_snapshot!(parse_outline(md), @r#"
    Document
      List
        ListItem "1."
          Paragraph
            Text "step"
          CodeBlock fenced "{{ a }}"
        ListItem "2."
          Paragraph
            Text "more"
    "#);
}

/// Test that every block and line span lies inside the rope.
#[rstest]
#[case::plain("Hello world!")]
#[case::quotes("> a\n> > b\n>\n> c\n")]
#[case::fence_in_quote("> ```\n> x\n\nafter\n")]
#[case::crlf("a\r\n\r\n```\r\nb\r\n```\r\n")]
#[case::multibyte("héllo `wörld`\n")]
#[case::lists("- a\n  1. b\n\n     c\n-\n> - d\n")]
#[case::tabbed_item("-\tx\n\n\ty\n")]
fn spans_stay_in_bounds(#[case] md: &str) {
    let rope = Rope::from(md);
    invariants(&rope, &parse_blocks(&rope));
}

/// Test that raw zones (code spans) don't produce directives.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let rope = Rope::from("`{% raw %}`");
    let blocks = parse_blocks(&rope);
    assert_eq!(blocks.len(), 1);
    assert!(matches!(blocks[0].kind, BlockKind::Paragraph));

    let inlines = parse_inline_for_block(&rope, &blocks[0], &TemplateSyntax::default());

    // Should be a CodeSpan, not a Template
    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::CodeSpan { .. }));
}

/// Test that code blocks are never inline-parsed.
#[test]
fn code_blocks_have_no_inline_nodes() {
    let rope = Rope::from("```\n`x` {% raw %}\n```\n");
    let blocks = parse_blocks(&rope);
    assert!(parse_inline_for_block(&rope, &blocks[0], &TemplateSyntax::default()).is_empty());
}

/// Test unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let rope = Rope::from("{% unclosed and `also unclosed");
    let blocks = parse_blocks(&rope);
    let inlines = parse_inline_for_block(&rope, &blocks[0], &TemplateSyntax::default());

    // Everything should be text since nothing closes
    assert_eq!(inlines.len(), 1);
    assert!(matches!(inlines[0], InlineNode::Text(_)));
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let rope = Rope::from("");
    assert!(parse_blocks(&rope).is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let rope = Rope::from("\n\n\n");
    assert!(parse_blocks(&rope).is_empty());
}
