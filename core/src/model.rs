use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Image reference shown beside the primary navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub src: String,
    pub alt: String,
}

/// Entry of the primary or secondary navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// One unit of displayed content.
///
/// Only `id` is interpreted by the state container. Fields this crate does
/// not know about are kept in `extra` so foreign content survives an edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideData {
    pub id: String,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SlideData {
    pub fn new(id: impl Into<String>, heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            body: body.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub sub_nav: Arc<Vec<NavItem>>,
    #[serde(default)]
    pub slides: Arc<Vec<Arc<SlideData>>>,
}

impl Section {
    pub fn new(id: impl Into<String>, sub_nav: Vec<NavItem>, slides: Vec<SlideData>) -> Self {
        Self {
            id: id.into(),
            sub_nav: Arc::new(sub_nav),
            slides: Arc::new(slides.into_iter().map(Arc::new).collect()),
        }
    }

    pub fn slide(&self, id: &str) -> Option<&Arc<SlideData>> {
        self.slides.iter().find(|slide| slide.id == id)
    }
}

/// The whole deck as loaded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationData {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub logos: [Logo; 2],
    pub main_nav: Arc<Vec<NavItem>>,
    #[serde(default)]
    pub sections: Arc<Vec<Arc<Section>>>,
    #[serde(default)]
    pub footer: String,
}

impl PresentationData {
    pub fn section(&self, id: &str) -> Option<&Arc<Section>> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn slide_count(&self) -> usize {
        self.sections.iter().map(|section| section.slides.len()).sum()
    }
}
