//! recipe-tui - Terminal UI for the recipe screen
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop from recipe-app and adds terminal rendering, event polling, and
//! the screen's widgets.

pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::{render_to_string, view};
pub use runner::run;
