// Terminal UI implementation using ratatui
// The face of the destination lookup widget

pub mod app;
pub mod runner;
pub mod ui;

pub use app::{App, ContactField, InputMode, View};
pub use runner::run_tui;
