use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use deck_core::Presentation;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use std::io;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::Duration;

use crate::app_event_sender::{AppEvent, AppEventSender};
use crate::slide_editor::{EditorOutcome, SlideEditor};
use crate::view::{draw, main_nav_bar, ViewLayout};
use crate::widgets::NavBar;

/// Interactive viewer: owns the presentation and routes terminal input to
/// it, one event at a time.
pub struct App {
    presentation: Presentation,
    editor: Option<SlideEditor>,
    app_event_tx: AppEventSender,
    app_event_rx: UnboundedReceiver<AppEvent>,
    show_help: bool,
    should_quit: bool,
    last_area: Rect,
}

impl App {
    pub fn new(presentation: Presentation, show_help: bool) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            presentation,
            editor: None,
            app_event_tx: AppEventSender::new(tx),
            app_event_rx: rx,
            show_help,
            should_quit: false,
            last_area: Rect::default(),
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                // keep the setup error, the restore result adds nothing
                let _ = restore_terminal();
                return Err(e);
            }
        };

        let result = self.event_loop(&mut terminal);
        let restored = restore_terminal();
        result.and(restored)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;
            let size = terminal.size()?;
            self.last_area = Rect::new(0, 0, size.width, size.height);

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        draw(f, self.presentation.state(), self.editor.as_ref(), self.show_help);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(editor) = self.editor.as_mut() {
            if editor.handle_key(key) == EditorOutcome::Close {
                self.editor = None;
            }
            self.process_app_events();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Right | KeyCode::Char('l') => self.presentation.cycle_main_tab(true),
            KeyCode::Left | KeyCode::Char('h') => self.presentation.cycle_main_tab(false),
            KeyCode::Tab | KeyCode::Char(']') => self.presentation.cycle_sub_tab(true),
            KeyCode::BackTab | KeyCode::Char('[') => self.presentation.cycle_sub_tab(false),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.presentation.select_main_tab_at(index);
            }
            KeyCode::Char('e') => self.open_editor(),
            _ => {}
        }
        self.sync_editor();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let snapshot = self.presentation.snapshot();
        let section = snapshot.active_section();
        let layout = ViewLayout::compute(self.last_area, section.is_some(), self.show_help);

        if let Some(item) = main_nav_bar(&snapshot).tab_at(layout.main_nav, mouse.column, mouse.row) {
            self.presentation.select_main_tab(item.id.clone());
        } else if let (Some(section), Some(area)) = (section, layout.sub_nav) {
            if let Some(item) = NavBar::new(&section.sub_nav, None).tab_at(area, mouse.column, mouse.row) {
                self.presentation.select_sub_tab(section.id.clone(), item.id.clone());
            }
        }
        self.sync_editor();
    }

    /// Clicks pass the area the last frame was drawn into.
    pub fn set_area(&mut self, area: Rect) {
        self.last_area = area;
    }

    fn open_editor(&mut self) {
        if let Some(slide) = self.presentation.active_slide() {
            tracing::debug!("editing slide {}", slide.id);
            self.editor = Some(SlideEditor::new(slide.clone(), self.app_event_tx.clone()));
        }
    }

    /// The editor belongs to one slide; drop it once that slide is no longer
    /// the visible one.
    fn sync_editor(&mut self) {
        let visible = self.presentation.active_slide().map(|slide| slide.id.as_str());
        if let Some(editor) = &self.editor {
            if visible != Some(editor.slide_id()) {
                self.editor = None;
            }
        }
    }

    fn process_app_events(&mut self) {
        while let Ok(event) = self.app_event_rx.try_recv() {
            match event {
                AppEvent::UpdateSlide(slide) => {
                    self.presentation.update_slide(slide);
                }
            }
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undoes `setup_terminal`, also after a partial setup. Every step runs even
/// when an earlier one fails; the first error is returned.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw?;
    screen?;
    Ok(())
}
