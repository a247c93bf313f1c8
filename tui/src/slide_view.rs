use deck_core::SlideData;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

/// Read-only rendering of one slide.
pub struct SlideView<'a> {
    slide: &'a SlideData,
}

impl<'a> SlideView<'a> {
    pub fn new(slide: &'a SlideData) -> Self {
        Self { slide }
    }

    fn text(&self) -> Text<'a> {
        let mut lines = vec![
            Line::from(Span::styled(
                self.slide.heading.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(self.slide.body.lines().map(body_line));
        if let Some(notes) = &self.slide.notes {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Notes: ", Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)),
                Span::styled(notes.as_str(), Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)),
            ]));
        }
        Text::from(lines)
    }
}

// "- item" and "* item" lines render as bullets.
fn body_line(line: &str) -> Line<'_> {
    match line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        Some(item) => Line::from(vec![Span::styled("  • ", Style::default().fg(Color::Yellow)), Span::raw(item)]),
        None => Line::from(line),
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
