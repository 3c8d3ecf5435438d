use crate::{
    template::TemplateSyntax,
    tree::{Mark, Node, Range},
};

/// Writes the inline children of a block.
///
/// Emphasis marks are diffed between consecutive ranges, so a mark shared
/// by neighbouring ranges is opened once and stays open across any
/// directives between them. Code marks never span ranges.
pub struct InlineWriter<'a> {
    syntax: &'a TemplateSyntax,
    out: String,
    open: Vec<Mark>,
}

impl<'a> InlineWriter<'a> {
    pub fn new(syntax: &'a TemplateSyntax) -> Self {
        Self {
            syntax,
            out: String::new(),
            open: vec![],
        }
    }

    pub fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Text(text) => text.ranges().iter().for_each(|r| self.range(r)),
                Node::Directive(d) => self.out.push_str(&self.syntax.render(d)),
                Node::Container(c) => self.nodes(&c.nodes),
                Node::CodeBlock(block) => {
                    self.close_from(0);
                    self.out.push_str(&block.code());
                }
            }
        }
    }

    pub fn finish(mut self) -> String {
        self.close_from(0);
        self.out
    }

    fn range(&mut self, range: &Range) {
        let outer: Vec<&Mark> = range.outer_marks().collect();
        let shared = self
            .open
            .iter()
            .zip(&outer)
            .take_while(|(open, next)| *open == **next)
            .count();
        self.close_from(shared);
        for mark in &outer[shared..] {
            self.out.push_str(&delimiter(mark));
            self.open.push((*mark).clone());
        }

        match range.code_mark() {
            Some(code) => {
                let ticks = delimiter(code);
                self.out.push_str(&ticks);
                self.out.push_str(&range.text);
                self.out.push_str(&ticks);
            }
            None => self.out.push_str(&range.text),
        }
    }

    /// Closes open marks down to `keep`, innermost first.
    fn close_from(&mut self, keep: usize) {
        while self.open.len() > keep {
            if let Some(mark) = self.open.pop() {
                self.out.push_str(&delimiter(&mark));
            }
        }
    }
}

fn delimiter(mark: &Mark) -> String {
    match mark {
        Mark::Code { ticks } => "`".repeat(*ticks),
        Mark::Bold { delimiter } => delimiter.to_string().repeat(2),
        Mark::Italic { delimiter } => delimiter.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Directive, Text};

    fn write(nodes: &[Node]) -> String {
        let syntax = TemplateSyntax::default();
        let mut w = InlineWriter::new(&syntax);
        w.nodes(nodes);
        w.finish()
    }

    #[test]
    fn code_range_gets_its_ticks() {
        let text = Text::from_ranges(vec![
            Range::plain("a "),
            Range::new("x`y", vec![Mark::Code { ticks: 2 }]),
        ]);
        assert_eq!(write(&[text.into()]), "a ``x`y``");
    }

    #[test]
    fn bold_stays_open_across_directive() {
        let nodes = vec![
            Text::from_ranges(vec![Range::new("see ", vec![Mark::bold()])]).into(),
            Directive::expression("raw").into(),
            Text::from_ranges(vec![Range::new("x", vec![Mark::bold(), Mark::code()])]).into(),
            Directive::expression("endraw").into(),
        ];
        assert_eq!(write(&nodes), "**see {% raw %}`x`{% endraw %}**");
    }

    #[test]
    fn nested_marks_close_innermost_first() {
        let bold = Mark::Bold { delimiter: '_' };
        let italic = Mark::italic();
        let text = Text::from_ranges(vec![
            Range::new("a", vec![bold.clone(), italic.clone()]),
            Range::new("b", vec![bold]),
            Range::plain("c"),
        ]);
        assert_eq!(write(&[text.into()]), "__*a*b__c");
    }
}
