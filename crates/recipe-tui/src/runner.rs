//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use recipe_app::config::Settings;
use recipe_app::hooks::RecipeHooks;
use recipe_app::message::Message;
use recipe_app::signals;
use recipe_app::state::AppState;
use recipe_core::prelude::*;
use recipe_core::Recipe;

use super::{event, process, render, terminal};

/// Run the recipe screen until the user quits or a signal arrives
pub async fn run(recipe: Recipe, settings: Settings, hooks: &dyn RecipeHooks) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting recipe screen: {} (header {}→{} rows, inset {})",
        recipe.title,
        settings.layout.expanded_height,
        settings.layout.collapsed_height,
        settings.layout.status_inset
    );

    let mut term = terminal::init()?;
    let mut state = AppState::with_settings(recipe, settings);

    // Unified message channel (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, hooks);

    // Restore even when the loop failed; report the loop error first
    let restored = terminal::restore();
    result.and(restored)
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    hooks: &dyn RecipeHooks,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, hooks);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, hooks);
        }
    }

    info!(
        "Leaving recipe screen (servings {}, favorite {})",
        state.servings, state.favorite
    );
    Ok(())
}
