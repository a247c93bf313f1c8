pub mod header;
pub mod nav_bar;
pub mod status_bar;

pub use header::{Footer, Header};
pub use nav_bar::NavBar;
pub use status_bar::StatusBar;
