use anyhow::Result;
use deck_core::{NavItem, Snapshot};
use ratatui::{
    backend::TestBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame, Terminal,
};

use crate::slide_editor::SlideEditor;
use crate::slide_view::SlideView;
use crate::widgets::{Footer, Header, NavBar, StatusBar};

const VIEW_HINTS: &str = "←/→ section  Tab sub tab  e edit  q quit";
const EDIT_HINTS: &str = "Tab field  Ctrl+S save  Esc done";

/// Screen regions for one frame. Sub navigation and content exist only
/// while a section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub header: Rect,
    pub main_nav: Rect,
    pub sub_nav: Option<Rect>,
    pub content: Option<Rect>,
    pub footer: Rect,
    pub help: Option<Rect>,
}

impl ViewLayout {
    pub fn compute(area: Rect, has_section: bool, show_help: bool) -> Self {
        let mut constraints = vec![
            Constraint::Length(Header::HEIGHT),
            Constraint::Length(NavBar::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(Footer::HEIGHT),
        ];
        if show_help {
            constraints.push(Constraint::Length(StatusBar::HEIGHT));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (sub_nav, content) = if has_section {
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(NavBar::HEIGHT), Constraint::Min(0)])
                .split(chunks[2]);
            (Some(body[0]), Some(body[1]))
        } else {
            (None, None)
        };

        Self {
            header: chunks[0],
            main_nav: chunks[1],
            sub_nav,
            content,
            footer: chunks[3],
            help: chunks.get(4).copied(),
        }
    }
}

fn label_of<'a>(items: &'a [NavItem], id: Option<&'a str>) -> &'a str {
    let Some(id) = id else {
        return "";
    };
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.label.as_str())
        .unwrap_or(id)
}

/// Primary navigation with the logo text on either side. Drawing and click
/// hit testing must agree on it, so both build it here.
pub fn main_nav_bar(snapshot: &Snapshot) -> NavBar<'_> {
    let data = snapshot.data();
    NavBar::new(&data.main_nav, Some(snapshot.selection().active_main_tab()))
        .logos(&data.logos[0].alt, &data.logos[1].alt)
}

/// Draws the whole viewer for `snapshot`. `editor` replaces the slide view
/// when it belongs to the visible slide.
pub fn draw(f: &mut Frame, snapshot: &Snapshot, editor: Option<&SlideEditor>, show_help: bool) {
    let data = snapshot.data();
    let selection = snapshot.selection();
    let section = snapshot.active_section();
    let layout = ViewLayout::compute(f.area(), section.is_some(), show_help);

    f.render_widget(Header::new(&data.title, &data.subtitle), layout.header);
    f.render_widget(main_nav_bar(snapshot), layout.main_nav);

    let mut sub_label = "";
    if let (Some(section), Some(sub_nav_area), Some(content_area)) = (section, layout.sub_nav, layout.content) {
        let current = selection.current_sub_tab();
        f.render_widget(NavBar::new(&section.sub_nav, current), sub_nav_area);
        sub_label = label_of(&section.sub_nav, current);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(sub_label)
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        let inner = block.inner(content_area);
        f.render_widget(block, content_area);

        if let Some(slide) = snapshot.active_slide() {
            match editor {
                Some(editor) if editor.slide_id() == slide.id => editor.render(f, inner),
                _ => f.render_widget(SlideView::new(slide), inner),
            }
        }
    }

    f.render_widget(Footer::new(&data.footer), layout.footer);

    if let Some(help) = layout.help {
        let (mode, hints) = if editor.is_some() {
            ("EDIT", EDIT_HINTS)
        } else {
            ("VIEW", VIEW_HINTS)
        };
        let main_label = label_of(&data.main_nav, Some(selection.active_main_tab()));
        let status = if sub_label.is_empty() {
            main_label.to_string()
        } else {
            format!("{main_label} › {sub_label}")
        };
        f.render_widget(StatusBar::new(mode, &status, hints), help);
    }
}

/// Renders a single frame off-screen and returns it as plain text, one line
/// per row with trailing spaces removed.
pub fn render_to_string(snapshot: &Snapshot, width: u16, height: u16, show_help: bool) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw(f, snapshot, None, show_help))?;
    let buffer = terminal.backend().buffer();

    let mut out = String::new();
    for y in 0..buffer.area.height {
        let line: String = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Presentation, PresentationData, Section, SlideData};
    use std::sync::Arc;

    fn presentation() -> Presentation {
        let intro = Section::new(
            "intro",
            vec![NavItem::new("p1", "Part One"), NavItem::new("p2", "Part Two")],
            vec![
                SlideData::new("p1", "First heading", "- bullet one\nplain line"),
                SlideData::new("p2", "Second heading", ""),
            ],
        );
        let data = PresentationData {
            title: "Demo Deck".to_string(),
            subtitle: "subtitle here".to_string(),
            logos: Default::default(),
            main_nav: Arc::new(vec![NavItem::new("intro", "Intro"), NavItem::new("empty", "Empty")]),
            sections: Arc::new(vec![Arc::new(intro), Arc::new(Section::new("empty", vec![], vec![]))]),
            footer: "the footer".to_string(),
        };
        Presentation::new(data)
    }

    #[test]
    fn test_layout_without_section_omits_body() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ViewLayout::compute(area, false, true);
        assert!(layout.sub_nav.is_none());
        assert!(layout.content.is_none());
        assert_eq!(layout.help.map(|r| r.y), Some(21));

        let layout = ViewLayout::compute(area, true, false);
        assert_eq!(layout.sub_nav.map(|r| r.y), Some(7));
        assert!(layout.help.is_none());
        assert_eq!(layout.footer.y, 21);
    }

    #[test]
    fn test_render_initial_frame() {
        let presentation = presentation();
        let frame = render_to_string(presentation.state(), 80, 24, true).unwrap();
        assert!(frame.contains("Demo Deck"));
        assert!(frame.contains("subtitle here"));
        assert!(frame.contains("Part One"));
        assert!(frame.contains("First heading"));
        assert!(frame.contains("• bullet one"));
        assert!(frame.contains("the footer"));
        assert!(frame.contains("Intro › Part One"));
        assert!(!frame.contains("Second heading"));
    }

    #[test]
    fn test_render_after_sub_tab_change() {
        let mut presentation = presentation();
        presentation.select_sub_tab("intro", "p2");
        let frame = render_to_string(presentation.state(), 80, 24, false).unwrap();
        assert!(frame.contains("Second heading"));
        assert!(!frame.contains("First heading"));
    }

    #[test]
    fn test_unknown_section_renders_chrome_only() {
        let mut presentation = presentation();
        presentation.select_main_tab("missing");
        let frame = render_to_string(presentation.state(), 80, 24, false).unwrap();
        assert!(frame.contains("Demo Deck"));
        assert!(frame.contains("the footer"));
        assert!(!frame.contains("Part One"));
    }

    #[test]
    fn test_section_without_slide_keeps_navigation() {
        let mut presentation = presentation();
        presentation.select_sub_tab("intro", "stale");
        let frame = render_to_string(presentation.state(), 80, 24, false).unwrap();
        assert!(frame.contains("Part One"));
        assert!(!frame.contains("First heading"));
        assert!(!frame.contains("Second heading"));
    }
}
