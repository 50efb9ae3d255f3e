//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;

use super::scroll::WHEEL_SCROLL_ROWS;

/// Convert an input event to a message
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown | InputKey::Char(' ') => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        InputKey::WheelUp => Some(Message::ScrollBy(-WHEEL_SCROLL_ROWS)),
        InputKey::WheelDown => Some(Message::ScrollBy(WHEEL_SCROLL_ROWS)),

        // Serving calculator
        InputKey::Char('+' | '=') => Some(Message::IncrementServings),
        InputKey::Char('-' | '_') => Some(Message::DecrementServings),

        // Buttons
        InputKey::Char('b') | InputKey::Backspace => Some(Message::Back),
        InputKey::Char('f') => Some(Message::ToggleFavorite),
        InputKey::Char('s') => Some(Message::AddToShoppingList),
        InputKey::Char('r') => Some(Message::SeeAllReviews),

        _ => None,
    }
}
