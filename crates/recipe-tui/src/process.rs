//! Message processing
//!
//! Runs a message through the TEA update function, follows any follow-up
//! messages, and hands hook actions to the embedding application.

use recipe_app::hooks::{self, RecipeHooks};
use recipe_app::message::Message;
use recipe_app::state::AppState;
use recipe_app::{handler, UpdateAction};

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, hooks: &dyn RecipeHooks) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state, hooks);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

fn handle_action(action: UpdateAction, state: &AppState, hooks: &dyn RecipeHooks) {
    match action {
        UpdateAction::Hook(event) => hooks::dispatch(hooks, event, &state.recipe),
    }
}
