//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use recipe_app::message::Message;
use recipe_app::InputKey;
use recipe_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a crossterm mouse event to InputKey (wheel only)
pub fn mouse_event_to_input(mouse: MouseEvent) -> Option<InputKey> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(InputKey::WheelUp),
        MouseEventKind::ScrollDown => Some(InputKey::WheelDown),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let input = match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => key_event_to_input(key),
            Event::Mouse(mouse) => mouse_event_to_input(mouse),
            _ => None,
        };
        Ok(input.map(Message::Key))
    } else {
        Ok(Some(Message::Tick))
    }
}
