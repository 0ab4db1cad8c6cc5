//! campus-tui - Terminal UI for UniCode Campus
//!
//! Renders `campus_app::AppState` with ratatui, polls crossterm input and
//! drives the TEA loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
