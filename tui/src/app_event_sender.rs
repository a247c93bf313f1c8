use deck_core::SlideData;
use tokio::sync::mpsc::UnboundedSender;

/// Requests raised by widgets and handled by the app loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A slide renderer committed an edit.
    UpdateSlide(SlideData),
}

/// The update callback handed to slide renderers. Widgets never touch the
/// presentation directly; they send events here.
#[derive(Clone, Debug, Default)]
pub struct AppEventSender(Option<UnboundedSender<AppEvent>>);

impl AppEventSender {
    pub fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self(Some(tx))
    }

    pub fn noop() -> Self {
        Self(None)
    }

    pub fn send(&self, event: AppEvent) {
        if let Some(tx) = &self.0 {
            if tx.send(event).is_err() {
                tracing::warn!("app event dropped: receiver closed");
            }
        }
    }
}
