//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::hooks::HookEvent;
use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollBy(delta) => scroll::handle_scroll_by(state, delta),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Serving Calculator
        // ─────────────────────────────────────────────────────────
        Message::IncrementServings => {
            state.servings.increment();
            UpdateResult::none()
        }
        Message::DecrementServings => {
            state.servings.decrement();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Buttons
        // ─────────────────────────────────────────────────────────
        Message::Back => UpdateResult::hook(HookEvent::Back),
        Message::ToggleFavorite => {
            state.favorite = !state.favorite;
            debug!("Favorite: {}", state.favorite);
            UpdateResult::hook(HookEvent::Favorite {
                favorite: state.favorite,
            })
        }
        Message::AddToShoppingList => UpdateResult::hook(HookEvent::AddToShoppingList {
            servings: state.servings.value(),
        }),
        Message::SeeAllReviews => UpdateResult::hook(HookEvent::SeeAllReviews),
    }
}
