pub mod app;
pub mod app_event_sender;
pub mod slide_editor;
pub mod slide_view;
mod textarea;
pub mod view;
pub mod widgets;

use anyhow::Result;
use deck_core::Presentation;

pub use app::App;
pub use app_event_sender::{AppEvent, AppEventSender};
pub use view::render_to_string;

/// Run the interactive viewer until the user quits.
pub async fn run_viewer(presentation: Presentation, show_help: bool) -> Result<()> {
    let mut app = App::new(presentation, show_help);
    app.run().await
}
