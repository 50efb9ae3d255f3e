//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Input event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the screen (key press, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll content up one row
    ScrollUp,
    /// Scroll content down one row
    ScrollDown,
    /// Scroll content by a signed number of rows
    ScrollBy(i32),
    /// Scroll to the top of the content (header fully expanded)
    ScrollToTop,
    /// Scroll to the bottom of the content
    ScrollToBottom,
    /// Page up in content
    PageUp,
    /// Page down in content
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Serving Calculator
    // ─────────────────────────────────────────────────────────
    IncrementServings,
    DecrementServings,

    // ─────────────────────────────────────────────────────────
    // Buttons
    // ─────────────────────────────────────────────────────────
    /// Back button in the fixed top row
    Back,
    /// Favorite button in the fixed top row
    ToggleFavorite,
    /// "Add to shopping list" call-to-action
    AddToShoppingList,
    /// "See All" on the reviews row
    SeeAllReviews,
}
