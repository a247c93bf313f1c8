use deck_core::NavItem;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

const GAP: u16 = 1;

/// Row of tab buttons, optionally flanked by logo text. Used for both the
/// primary and the secondary navigation.
pub struct NavBar<'a> {
    items: &'a [NavItem],
    active: Option<&'a str>,
    logos: Option<(&'a str, &'a str)>,
}

impl<'a> NavBar<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(items: &'a [NavItem], active: Option<&'a str>) -> Self {
        Self {
            items,
            active,
            logos: None,
        }
    }

    pub fn logos(mut self, left: &'a str, right: &'a str) -> Self {
        self.logos = Some((left, right));
        self
    }

    fn tab_width(item: &NavItem) -> u16 {
        u16::try_from(item.label.width()).unwrap_or(u16::MAX).saturating_add(2)
    }

    fn logo_width(text: &str) -> u16 {
        if text.is_empty() {
            0
        } else {
            u16::try_from(text.width()).unwrap_or(u16::MAX).saturating_add(1)
        }
    }

    /// Region left for the tabs once borders and logos are taken off.
    fn tabs_region(&self, area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let Some((left, right)) = self.logos else {
            return inner;
        };
        let lw = Self::logo_width(left).min(inner.width);
        let rw = Self::logo_width(right).min(inner.width - lw);
        Rect::new(inner.x + lw, inner.y, inner.width - lw - rw, inner.height.min(1))
    }

    /// One rect per item, centered in the bar. Items that do not fit get a
    /// zero-width rect.
    pub fn tab_areas(&self, area: Rect) -> Vec<Rect> {
        let region = self.tabs_region(area);
        let total = self
            .items
            .iter()
            .map(Self::tab_width)
            .fold(0u16, |acc, w| acc.saturating_add(w).saturating_add(GAP))
            .saturating_sub(GAP);
        let mut x = region.x + region.width.saturating_sub(total) / 2;
        self.items
            .iter()
            .map(|item| {
                let width = Self::tab_width(item).min(region.right().saturating_sub(x));
                let rect = Rect::new(x, region.y, width, region.height.min(1));
                x = x.saturating_add(width).saturating_add(GAP).min(region.right());
                rect
            })
            .collect()
    }

    /// The item whose label covers the given screen cell.
    pub fn tab_at(&self, area: Rect, column: u16, row: u16) -> Option<&'a NavItem> {
        let position = Position::new(column, row);
        self.tab_areas(area)
            .into_iter()
            .zip(self.items.iter())
            .find(|(rect, _)| !rect.is_empty() && rect.contains(position))
            .map(|(_, item)| item)
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if let Some((left, right)) = self.logos {
            let logo_style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
            buf.set_stringn(inner.x, inner.y, left, inner.width as usize, logo_style);
            let rw = u16::try_from(right.width()).unwrap_or(u16::MAX).min(inner.width);
            buf.set_stringn(inner.right() - rw, inner.y, right, rw as usize, logo_style);
        }

        for (rect, item) in self.tab_areas(area).into_iter().zip(self.items.iter()) {
            if rect.is_empty() {
                continue;
            }
            let style = if self.active == Some(item.id.as_str()) {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::LightBlue)
            };
            let label = format!(" {} ", item.label);
            buf.set_stringn(rect.x, rect.y, label, rect.width as usize, style);
        }
    }
}
