//! Tests for the update function and key mapping

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::state::AppState;
use recipe_core::strawberry_cake;

fn test_state() -> AppState {
    let mut state = AppState::new(strawberry_cake());
    // What the view would report for an 80x24 terminal
    state.scroll.update_content_size(90, 23);
    state
}

/// Run a message and any follow-up messages, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_keys() {
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        assert_eq!(handle_key(key), Some(Message::Quit));
    }
}

#[test]
fn test_scroll_keys() {
    assert_eq!(handle_key(InputKey::Down), Some(Message::ScrollDown));
    assert_eq!(handle_key(InputKey::Char('k')), Some(Message::ScrollUp));
    assert_eq!(handle_key(InputKey::End), Some(Message::ScrollToBottom));
    assert_eq!(handle_key(InputKey::WheelDown), Some(Message::ScrollBy(3)));
    assert_eq!(handle_key(InputKey::WheelUp), Some(Message::ScrollBy(-3)));
}

#[test]
fn test_serving_keys() {
    assert_eq!(handle_key(InputKey::Char('+')), Some(Message::IncrementServings));
    assert_eq!(handle_key(InputKey::Char('=')), Some(Message::IncrementServings));
    assert_eq!(handle_key(InputKey::Char('-')), Some(Message::DecrementServings));
}

#[test]
fn test_unmapped_key_is_ignored() {
    let mut state = test_state();
    assert_eq!(update(&mut state, Message::Key(InputKey::Char('z'))), UpdateResult::none());
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = test_state();
    run(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

#[test]
fn test_tick_changes_nothing() {
    let mut state = test_state();
    assert_eq!(update(&mut state, Message::Tick), UpdateResult::none());
    assert_eq!(state.scroll.offset, 0);
}

// ─────────────────────────────────────────────────────────
// Scrolling drives the header
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_offset() {
    let mut state = test_state();
    run(&mut state, Message::ScrollDown);
    run(&mut state, Message::Key(InputKey::Char('j')));
    assert_eq!(state.scroll.offset, 2);
}

#[test]
fn test_page_down_uses_configured_page() {
    let mut state = test_state();
    run(&mut state, Message::PageDown);
    assert_eq!(state.scroll.offset, Settings::default().behavior.page_scroll);
    run(&mut state, Message::PageUp);
    assert_eq!(state.scroll.offset, 0);
}

#[test]
fn test_scroll_to_bottom_collapses_header() {
    let mut state = test_state();
    run(&mut state, Message::ScrollToBottom);
    assert_eq!(state.scroll.offset, 90 - 23);
    let frame = state.header_frame();
    assert!(frame.is_collapsed());
    assert_eq!(frame.image_alpha, 0.0);

    run(&mut state, Message::ScrollToTop);
    assert_eq!(state.header_frame().image_alpha, 1.0);
}

#[test]
fn test_wheel_scroll() {
    let mut state = test_state();
    run(&mut state, Message::Key(InputKey::WheelDown));
    run(&mut state, Message::Key(InputKey::WheelDown));
    run(&mut state, Message::Key(InputKey::WheelUp));
    assert_eq!(state.scroll.offset, 3);
}

// ─────────────────────────────────────────────────────────
// Serving calculator
// ─────────────────────────────────────────────────────────

#[test]
fn test_servings_follow_increments_and_decrements() {
    let mut state = test_state();
    for _ in 0..3 {
        run(&mut state, Message::IncrementServings);
    }
    for _ in 0..5 {
        run(&mut state, Message::Key(InputKey::Char('-')));
    }
    assert_eq!(state.servings.value(), 6 + 3 - 5);
}

#[test]
fn test_servings_can_go_below_one() {
    let mut state = test_state();
    for _ in 0..8 {
        run(&mut state, Message::DecrementServings);
    }
    assert_eq!(state.servings.value(), -2);
}

// ─────────────────────────────────────────────────────────
// Buttons produce hook actions
// ─────────────────────────────────────────────────────────

#[test]
fn test_shopping_list_hook_carries_servings() {
    let mut state = test_state();
    run(&mut state, Message::IncrementServings);
    let actions = run(&mut state, Message::Key(InputKey::Char('s')));
    assert_eq!(
        actions,
        vec![UpdateAction::Hook(HookEvent::AddToShoppingList { servings: 7 })]
    );
}

#[test]
fn test_favorite_toggles_and_reports() {
    let mut state = test_state();
    let first = run(&mut state, Message::ToggleFavorite);
    assert!(state.favorite);
    assert_eq!(
        first,
        vec![UpdateAction::Hook(HookEvent::Favorite { favorite: true })]
    );

    let second = run(&mut state, Message::Key(InputKey::Char('f')));
    assert!(!state.favorite);
    assert_eq!(
        second,
        vec![UpdateAction::Hook(HookEvent::Favorite { favorite: false })]
    );
}

#[test]
fn test_back_and_reviews_hooks() {
    let mut state = test_state();
    assert_eq!(
        run(&mut state, Message::Key(InputKey::Backspace)),
        vec![UpdateAction::Hook(HookEvent::Back)]
    );
    assert_eq!(
        run(&mut state, Message::Key(InputKey::Char('r'))),
        vec![UpdateAction::Hook(HookEvent::SeeAllReviews)]
    );
    assert!(!state.should_quit());
}
