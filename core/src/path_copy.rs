//! Copy-on-write replacement of a single slide.
//!
//! Only the path from the document root to the replaced slide is rebuilt:
//! the document, its sections vector, the owning section and that section's
//! slides vector. Every other `Arc` in the result points at the same
//! allocation as in the input, so consumers can detect unchanged branches
//! with `Arc::ptr_eq`.

use std::sync::Arc;

use crate::model::{PresentationData, Section, SlideData};

/// Returns `None` when `section_id` names no section or the section holds no
/// slide with `updated.id`.
pub fn replace_slide(
    data: &Arc<PresentationData>,
    section_id: &str,
    updated: SlideData,
) -> Option<Arc<PresentationData>> {
    let section_idx = data.sections.iter().position(|s| s.id == section_id)?;
    let section = data.sections.get(section_idx)?;
    let slide_idx = section.slides.iter().position(|s| s.id == updated.id)?;

    let mut slides = section.slides.as_ref().clone();
    slides[slide_idx] = Arc::new(updated);

    let mut sections = data.sections.as_ref().clone();
    sections[section_idx] = Arc::new(Section {
        slides: Arc::new(slides),
        ..section.as_ref().clone()
    });

    Some(Arc::new(PresentationData {
        sections: Arc::new(sections),
        ..data.as_ref().clone()
    }))
}
