//! Loading presentation content from the built-in seed or a file.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::error::{ContentError, Result};
use crate::model::PresentationData;

const SEED_JSON: &str = include_str!("../assets/seed.json");

/// Inconsistencies that leave the deck usable but will render as empty
/// panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentWarning {
    /// A main-nav entry that selects no section.
    MainNavWithoutSection { id: String },
    /// A sub-nav entry that selects no slide.
    SubNavWithoutSlide { section: String, id: String },
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainNavWithoutSection { id } => {
                write!(f, "main tab {id} has no matching section")
            }
            Self::SubNavWithoutSlide { section, id } => {
                write!(f, "sub tab {id} in section {section} has no matching slide")
            }
        }
    }
}

/// The deck compiled into the binary.
pub fn seed() -> Result<PresentationData> {
    from_json_str(SEED_JSON)
}

pub fn from_json_str(s: &str) -> Result<PresentationData> {
    Ok(serde_json::from_str(s)?)
}

pub fn from_toml_str(s: &str) -> Result<PresentationData> {
    Ok(toml::from_str(s)?)
}

/// Parse a content file: `.toml` as TOML, anything else as JSON. The result
/// is not validated.
pub fn read_path(path: &Path) -> Result<PresentationData> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        from_toml_str(&text)
    } else {
        from_json_str(&text)
    }
}

/// Hard errors for broken id invariants, warnings for dangling navigation.
pub fn validate(data: &PresentationData) -> Result<Vec<ContentWarning>> {
    if data.main_nav.is_empty() {
        return Err(ContentError::EmptyMainNav);
    }

    let mut section_ids = HashSet::new();
    for section in data.sections.iter() {
        if !section_ids.insert(section.id.as_str()) {
            return Err(ContentError::DuplicateSection {
                id: section.id.clone(),
            });
        }
        let mut slide_ids = HashSet::new();
        for slide in section.slides.iter() {
            if !slide_ids.insert(slide.id.as_str()) {
                return Err(ContentError::DuplicateSlide {
                    section: section.id.clone(),
                    id: slide.id.clone(),
                });
            }
        }
    }

    let mut warnings = Vec::new();
    for item in data.main_nav.iter() {
        if !section_ids.contains(item.id.as_str()) {
            warnings.push(ContentWarning::MainNavWithoutSection { id: item.id.clone() });
        }
    }
    for section in data.sections.iter() {
        for item in section.sub_nav.iter() {
            if section.slide(&item.id).is_none() {
                warnings.push(ContentWarning::SubNavWithoutSlide {
                    section: section.id.clone(),
                    id: item.id.clone(),
                });
            }
        }
    }
    Ok(warnings)
}

/// Load and validate, logging every warning. `None` selects the seed deck.
pub fn load(path: Option<&Path>) -> Result<PresentationData> {
    let data = match path {
        Some(path) => {
            tracing::info!("loading content from {}", path.display());
            read_path(path)?
        }
        None => {
            tracing::info!("loading built-in seed content");
            seed()?
        }
    };

    for warning in validate(&data)? {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        "loaded \"{}\": {} sections, {} slides",
        data.title,
        data.sections.len(),
        data.slide_count()
    );
    Ok(data)
}
