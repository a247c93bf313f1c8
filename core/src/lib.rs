//! Core library: the presentation document model and the state container
//! that the terminal UI renders.

pub mod content;
pub mod error;
pub mod model;
pub mod path_copy;
pub mod presentation;
pub mod selection;

pub use error::{ContentError, Result};
pub use model::*;
pub use presentation::{Action, Presentation, Snapshot};
pub use selection::Selection;
