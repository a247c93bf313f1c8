use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or validating presentation content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("primary navigation is empty")]
    EmptyMainNav,

    #[error("duplicate section id: {id}")]
    DuplicateSection { id: String },

    #[error("duplicate slide id {id} in section {section}")]
    DuplicateSlide { section: String, id: String },
}

pub type Result<T> = std::result::Result<T, ContentError>;
