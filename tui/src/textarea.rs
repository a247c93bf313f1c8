use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::WidgetRef};
use std::{cell::RefCell, ops::Range};
use unicode_width::UnicodeWidthStr;

/// Minimal multi-line text input. `cursor` is a byte offset that always sits
/// on a char boundary.
#[derive(Debug)]
pub(crate) struct TextArea {
    text: String,
    cursor: usize,
    wrap_cache: RefCell<Option<(u16, Vec<Range<usize>>)>>,
}

impl TextArea {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
            wrap_cache: RefCell::new(None),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.wrap_cache.replace(None);
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self) -> usize {
        self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len())
    }

    /// Returns whether the key was consumed.
    pub fn input(&mut self, ev: KeyEvent) -> bool {
        match ev {
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => self.insert_str(c.encode_utf8(&mut [0; 4])),
            KeyEvent { code: KeyCode::Enter, .. } => self.insert_str("\n"),
            KeyEvent { code: KeyCode::Backspace, .. } => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    self.wrap_cache.replace(None);
                }
            }
            KeyEvent { code: KeyCode::Delete, .. } => {
                if self.cursor < self.text.len() {
                    let next = self.next_boundary();
                    self.text.replace_range(self.cursor..next, "");
                    self.wrap_cache.replace(None);
                }
            }
            KeyEvent { code: KeyCode::Left, .. } => self.cursor = self.prev_boundary(),
            KeyEvent { code: KeyCode::Right, .. } => self.cursor = self.next_boundary(),
            KeyEvent { code: KeyCode::Home, .. } => self.cursor = self.line_start(),
            KeyEvent { code: KeyCode::End, .. } => self.cursor = self.line_end(),
            _ => return false,
        }
        true
    }

    pub fn desired_height(&self, width: u16) -> u16 {
        self.wrapped_lines(width).len().max(1) as u16
    }

    /// Screen position of the cursor when rendered into `area`.
    pub fn cursor_pos(&self, area: Rect) -> (u16, u16) {
        let lines = self.wrapped_lines(area.width);
        let row = lines
            .iter()
            .rposition(|r| r.start <= self.cursor)
            .unwrap_or(0);
        let start = lines.get(row).map(|r| r.start).unwrap_or(0);
        let col = self.text[start..self.cursor].trim_end_matches('\n').width() as u16;
        let x = (area.x + col).min(area.right().saturating_sub(1));
        let y = (area.y + row as u16).min(area.bottom().saturating_sub(1));
        (x, y)
    }

    fn wrapped_lines(&self, width: u16) -> Vec<Range<usize>> {
        if width == 0 {
            return vec![0..self.text.len()];
        }
        if let Some((w, lines)) = self.wrap_cache.borrow().as_ref() {
            if *w == width {
                return lines.clone();
            }
        }
        let mut lines = Vec::new();
        let mut start = 0usize;
        let mut curw = 0usize;
        for (i, ch) in self.text.char_indices() {
            if ch == '\n' {
                lines.push(start..i);
                start = i + 1;
                curw = 0;
                continue;
            }
            let w = ch.encode_utf8(&mut [0; 4]).width();
            if curw + w > width as usize && i > start {
                lines.push(start..i);
                start = i;
                curw = 0;
            }
            curw += w;
        }
        lines.push(start..self.text.len());
        self.wrap_cache.replace(Some((width, lines.clone())));
        lines
    }
}

impl WidgetRef for &TextArea {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let lines = self.wrapped_lines(area.width);
        for (row, r) in lines.iter().take(area.height as usize).enumerate() {
            let y = area.y + row as u16;
            buf.set_stringn(area.x, y, &self.text[r.clone()], area.width as usize, Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace_multibyte() {
        let mut area = TextArea::new("");
        for c in "héllo".chars() {
            area.input(key(KeyCode::Char(c)));
        }
        assert_eq!(area.text(), "héllo");
        area.input(key(KeyCode::Left));
        area.input(key(KeyCode::Left));
        area.input(key(KeyCode::Left));
        area.input(key(KeyCode::Backspace));
        assert_eq!(area.text(), "hllo");
        assert_eq!(area.cursor, 1);
    }

    #[test]
    fn test_home_end_stay_on_line() {
        let mut area = TextArea::new("one\ntwo");
        area.input(key(KeyCode::Home));
        assert_eq!(area.cursor, 4);
        area.input(key(KeyCode::Left));
        area.input(key(KeyCode::Home));
        assert_eq!(area.cursor, 0);
        area.input(key(KeyCode::End));
        assert_eq!(area.cursor, 3);
    }

    #[test]
    fn test_delete_and_unhandled_keys() {
        let mut area = TextArea::new("ab");
        area.input(key(KeyCode::Home));
        assert!(area.input(key(KeyCode::Delete)));
        assert_eq!(area.text(), "b");
        assert!(!area.input(key(KeyCode::F(2))));
        assert!(!area.input(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert_eq!(area.text(), "b");
    }

    #[test]
    fn test_wrapping_and_cursor_position() {
        let area = TextArea::new("abcdef\ngh");
        assert_eq!(area.desired_height(4), 3);
        let rect = Rect::new(10, 5, 4, 3);
        assert_eq!(area.cursor_pos(rect), (12, 7));
    }
}
