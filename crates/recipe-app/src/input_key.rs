//! Abstract input event, independent of terminal library.
//!
//! The TUI converts crossterm key and mouse events into [`InputKey`] so this
//! crate never depends on crossterm.

/// Abstract input event, independent of terminal library.
/// Converted from crossterm events at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Esc,
    Backspace,

    // Mouse wheel
    /// Wheel notch towards the top of the content
    WheelUp,
    /// Wheel notch towards the bottom of the content
    WheelDown,
}
