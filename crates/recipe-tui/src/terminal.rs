//! Terminal setup and restoration

use std::io::{self, stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use recipe_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with mouse wheel reporting enabled
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    with_mouse_capture(
        terminal,
        || execute!(stdout(), EnableMouseCapture),
        ratatui::restore,
    )
}

/// Hand back `terminal` once mouse capture is on; leave raw mode if it fails
fn with_mouse_capture<T>(
    terminal: T,
    enable: impl FnOnce() -> io::Result<()>,
    undo: impl FnOnce(),
) -> Result<T> {
    match enable() {
        Ok(()) => Ok(terminal),
        Err(e) => {
            undo();
            Err(Error::TerminalInit(format!(
                "Failed to enable mouse capture: {}",
                e
            )))
        }
    }
}

/// Leave the alternate screen and restore the cooked terminal
pub fn restore() -> Result<()> {
    execute!(stdout(), DisableMouseCapture)
        .map_err(|e| Error::TerminalRestore(format!("Failed to disable mouse capture: {}", e)))?;
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}
