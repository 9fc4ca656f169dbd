//! Terminal rendering of markdown reviews
//!
//! The result pane shows the review styled in place rather than as HTML.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// One entry per open list: the next item number, or None for bullets
    lists: Vec<Option<u64>>,
    in_code_block: bool,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            styles: vec![Style::default()],
            lists: Vec::new(),
            in_code_block: false,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let style = f(self.style());
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn text(&mut self, text: String) {
        let style = self.style();
        self.current.push(Span::styled(text, style));
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    fn blank(&mut self) {
        self.flush();
        if self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn item_prefix(&mut self) -> String {
        let indent = "  ".repeat(self.lists.len().saturating_sub(1));
        match self.lists.last_mut() {
            Some(Some(n)) => {
                let prefix = format!("{}{}. ", indent, n);
                *n += 1;
                prefix
            }
            _ => format!("{}• ", indent),
        }
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { .. } => {
                self.blank();
                self.push_style(|s| s.fg(Color::Cyan).add_modifier(Modifier::BOLD));
            }
            Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { .. } => {
                self.push_style(|s| s.fg(Color::LightBlue).add_modifier(Modifier::UNDERLINED))
            }
            Tag::CodeBlock(_) => {
                self.blank();
                self.in_code_block = true;
                self.push_style(|s| s.fg(Color::Yellow));
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let prefix = self.item_prefix();
                self.current
                    .push(Span::styled(prefix, Style::default().fg(Color::DarkGray)));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.pop_style();
                self.blank();
            }
            TagEnd::Paragraph => {
                if self.lists.is_empty() {
                    self.blank();
                } else {
                    self.flush();
                }
            }
            TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough | TagEnd::Link => {
                self.pop_style()
            }
            TagEnd::CodeBlock => {
                self.pop_style();
                self.in_code_block = false;
                self.blank();
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            TagEnd::Item => self.flush(),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Styles a markdown document as terminal lines.
pub fn markdown_lines(source: &str) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::new();
    for event in Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(tag) => builder.end(tag),
            Event::Text(text) if builder.in_code_block => {
                for line in text.lines() {
                    builder.text(format!("  {}", line));
                    builder.flush();
                }
            }
            Event::Text(text) => builder.text(text.to_string()),
            Event::Code(code) => builder
                .current
                .push(Span::styled(code.to_string(), Style::default().fg(Color::Yellow))),
            Event::SoftBreak => builder.text(" ".to_string()),
            Event::HardBreak => builder.flush(),
            Event::Rule => {
                builder.blank();
                builder.text("────────────".to_string());
                builder.blank();
            }
            _ => {}
        }
    }
    builder.finish()
}
