use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use deck_core::SlideData;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::sync::Arc;

use crate::app_event_sender::{AppEvent, AppEventSender};
use crate::textarea::TextArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Heading,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Continue,
    Close,
}

/// In-place editor for one slide. Commits go out through the update
/// callback and always carry the id the editor was opened with.
pub struct SlideEditor {
    original: Arc<SlideData>,
    heading: TextArea,
    body: TextArea,
    focus: Field,
    on_update: AppEventSender,
}

impl SlideEditor {
    pub fn new(slide: Arc<SlideData>, on_update: AppEventSender) -> Self {
        Self {
            heading: TextArea::new(&slide.heading),
            body: TextArea::new(&slide.body),
            original: slide,
            focus: Field::Body,
            on_update,
        }
    }

    pub fn slide_id(&self) -> &str {
        &self.original.id
    }

    pub fn is_dirty(&self) -> bool {
        self.heading.text() != self.original.heading || self.body.text() != self.original.body
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorOutcome {
        match key.code {
            KeyCode::Esc => return EditorOutcome::Close,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.commit(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Enter if self.focus == Field::Heading => self.focus = Field::Body,
            _ => {
                let area = match self.focus {
                    Field::Heading => &mut self.heading,
                    Field::Body => &mut self.body,
                };
                area.input(key);
            }
        }
        EditorOutcome::Continue
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Heading => Field::Body,
            Field::Body => Field::Heading,
        };
    }

    fn commit(&mut self) {
        if !self.is_dirty() {
            return;
        }
        let revised = SlideData {
            heading: self.heading.text().to_string(),
            body: self.body.text().to_string(),
            ..self.original.as_ref().clone()
        };
        self.original = Arc::new(revised.clone());
        self.on_update.send(AppEvent::UpdateSlide(revised));
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let heading_height = self.heading.desired_height(area.width.saturating_sub(2)).min(3) + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(heading_height), Constraint::Min(3)])
            .split(area);

        let dirty = if self.is_dirty() { " *" } else { "" };
        for (field, chunk, title) in [
            (Field::Heading, chunks[0], format!("Heading{dirty}")),
            (Field::Body, chunks[1], format!("Body{dirty}")),
        ] {
            let focused = self.focus == field;
            let border = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default().borders(Borders::ALL).title(title).border_style(border);
            let inner = block.inner(chunk);
            f.render_widget(block, chunk);

            let text = match field {
                Field::Heading => &self.heading,
                Field::Body => &self.body,
            };
            f.render_widget_ref(text, inner);
            if focused && !inner.is_empty() {
                let (x, y) = text.cursor_pos(inner);
                f.set_cursor_position((x, y));
            }
        }
    }
}
