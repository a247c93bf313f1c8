use std::sync::Arc;

use crate::model::{PresentationData, Section, SlideData};
use crate::path_copy::replace_slide;
use crate::selection::{neighbor, Selection};

/// A state transition of the presentation container.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectMainTab(String),
    SelectSubTab { section_id: String, sub_tab_id: String },
    UpdateSlide(SlideData),
}

/// Immutable document plus selection. A transition produces a new snapshot;
/// the one it was derived from is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    data: Arc<PresentationData>,
    selection: Selection,
}

impl Snapshot {
    pub fn new(data: PresentationData) -> Self {
        let selection = Selection::initial(&data);
        Self {
            data: Arc::new(data),
            selection,
        }
    }

    pub fn data(&self) -> &Arc<PresentationData> {
        &self.data
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_section(&self) -> Option<&Arc<Section>> {
        self.data.section(self.selection.active_main_tab())
    }

    pub fn active_slide(&self) -> Option<&Arc<SlideData>> {
        let section = self.active_section()?;
        let sub_tab = self.selection.current_sub_tab()?;
        section.slide(sub_tab)
    }

    /// Applies `action`. A transition that changes nothing hands back `self`
    /// (the same allocation), so callers can compare with `Arc::ptr_eq`.
    pub fn apply(self: &Arc<Self>, action: Action) -> Arc<Self> {
        match action {
            Action::SelectMainTab(section_id) => {
                tracing::debug!("select main tab {section_id}");
                Arc::new(Self {
                    data: Arc::clone(&self.data),
                    selection: self.selection.with_main_tab(section_id),
                })
            }
            Action::SelectSubTab { section_id, sub_tab_id } => {
                tracing::debug!("select sub tab {sub_tab_id} in {section_id}");
                Arc::new(Self {
                    data: Arc::clone(&self.data),
                    selection: self.selection.with_sub_tab(section_id, sub_tab_id),
                })
            }
            Action::UpdateSlide(updated) => {
                let section_id = self.selection.active_main_tab();
                let slide_id = updated.id.clone();
                match replace_slide(&self.data, section_id, updated) {
                    Some(data) => {
                        tracing::info!("updated slide {slide_id} in {section_id}");
                        Arc::new(Self {
                            data,
                            selection: self.selection.clone(),
                        })
                    }
                    None => {
                        tracing::debug!("ignored update for slide {slide_id}: not in section {section_id:?}");
                        Arc::clone(self)
                    }
                }
            }
        }
    }
}

/// Single owner of the current snapshot. Every operation swaps in a new
/// snapshot with one assignment.
#[derive(Debug, Clone)]
pub struct Presentation {
    current: Arc<Snapshot>,
}

impl Presentation {
    pub fn new(data: PresentationData) -> Self {
        Self {
            current: Arc::new(Snapshot::new(data)),
        }
    }

    /// Cheap handle to the current snapshot; later transitions do not affect it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn state(&self) -> &Snapshot {
        &self.current
    }

    pub fn dispatch(&mut self, action: Action) {
        self.current = self.current.apply(action);
    }

    pub fn select_main_tab(&mut self, section_id: impl Into<String>) {
        self.dispatch(Action::SelectMainTab(section_id.into()));
    }

    pub fn select_sub_tab(&mut self, section_id: impl Into<String>, sub_tab_id: impl Into<String>) {
        self.dispatch(Action::SelectSubTab {
            section_id: section_id.into(),
            sub_tab_id: sub_tab_id.into(),
        });
    }

    /// Returns whether a slide was replaced.
    pub fn update_slide(&mut self, updated: SlideData) -> bool {
        let before = Arc::clone(&self.current);
        self.dispatch(Action::UpdateSlide(updated));
        !Arc::ptr_eq(&before, &self.current)
    }

    pub fn active_section(&self) -> Option<&Arc<Section>> {
        self.current.active_section()
    }

    pub fn active_slide(&self) -> Option<&Arc<SlideData>> {
        self.current.active_slide()
    }

    /// Selects the main tab at `index` in the primary navigation, if any.
    pub fn select_main_tab_at(&mut self, index: usize) {
        let target = self.current.data.main_nav.get(index).map(|item| item.id.clone());
        if let Some(id) = target {
            self.select_main_tab(id);
        }
    }

    pub fn cycle_main_tab(&mut self, forward: bool) {
        let snapshot = self.snapshot();
        let current = Some(snapshot.selection.active_main_tab());
        if let Some(item) = neighbor(&snapshot.data.main_nav, current, forward) {
            self.select_main_tab(item.id.clone());
        }
    }

    /// Moves through the active section's sub navigation. Does nothing when
    /// no section is active.
    pub fn cycle_sub_tab(&mut self, forward: bool) {
        let snapshot = self.snapshot();
        let Some(section) = snapshot.active_section() else {
            return;
        };
        if let Some(item) = neighbor(&section.sub_nav, snapshot.selection.current_sub_tab(), forward) {
            self.select_sub_tab(section.id.clone(), item.id.clone());
        }
    }
}
