//! recipe-demo - A terminal recipe detail screen
//!
//! Entry points for the `recipe` binary: the interactive screen, a one-shot
//! text snapshot, and a headless NDJSON trace of the header animation.

pub mod app;
pub mod headless;

pub use app::{run, run_snapshot, StartupOptions};
pub use headless::run_headless;
