//! Scroll message handlers
//!
//! Every handler moves the one content offset; the header reads it back on
//! the next draw.

use crate::state::AppState;

use super::UpdateResult;

/// Rows moved per mouse wheel notch
pub const WHEEL_SCROLL_ROWS: i32 = 3;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_up(1);
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_down(1);
    UpdateResult::none()
}

/// Handle a signed scroll (mouse wheel)
pub fn handle_scroll_by(state: &mut AppState, delta: i32) -> UpdateResult {
    state.scroll.scroll_by(delta);
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_to_top();
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.scroll.scroll_to_bottom();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let page = state.settings.behavior.page_scroll;
    state.scroll.scroll_up(page);
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let page = state.settings.behavior.page_scroll;
    state.scroll.scroll_down(page);
    UpdateResult::none()
}
