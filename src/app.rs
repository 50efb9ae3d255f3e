//! Application startup
//!
//! Shared setup for every mode: error reports, file logging, settings.

use std::path::PathBuf;

use recipe_app::config::{self, Settings};
use recipe_app::hooks::LoggingHooks;
use recipe_app::state::AppState;
use recipe_core::prelude::*;
use recipe_core::strawberry_cake;

/// Startup choices taken from the command line
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Directory holding `.recipe/config.toml`
    pub config_dir: PathBuf,
    /// Overrides `layout.status_inset`
    pub status_inset: Option<u16>,
    /// Write a default config file before starting
    pub init_config: bool,
}

impl StartupOptions {
    /// Load settings and apply command line overrides
    pub fn settings(&self) -> Result<Settings> {
        if self.init_config {
            match config::init_config_dir(&self.config_dir) {
                Ok(()) => {}
                // Defaults still work without a file on disk
                Err(e) if e.is_recoverable() => warn!("Skipping config init: {}", e),
                Err(e) => return Err(e),
            }
        }
        let mut settings = config::load_settings(&self.config_dir);
        if let Some(inset) = self.status_inset {
            settings.layout.status_inset = inset;
        }
        Ok(settings)
    }
}

/// Initialize error reporting and logging (to file, since the TUI owns stdout)
fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    recipe_core::logging::init()?;
    Ok(())
}

/// Run the interactive recipe screen
pub async fn run(options: &StartupOptions) -> Result<()> {
    init()?;

    info!("Config dir: {}", options.config_dir.display());

    let settings = options.settings()?;
    let result = recipe_tui::run(strawberry_cake(), settings, &LoggingHooks).await;

    if let Err(ref e) = result {
        error!("Application error (fatal: {}): {:?}", e.is_fatal(), e);
    }

    info!("Recipe screen exiting");
    result
}

/// Print one rendered frame at `offset` as plain text
pub fn run_snapshot(options: &StartupOptions, offset: u16, width: u16, height: u16) -> Result<()> {
    init()?;

    let settings = options.settings()?;
    let mut state = AppState::with_settings(strawberry_cake(), settings);
    state.scroll.offset = offset;

    let text = recipe_tui::render_to_string(&mut state, width, height)?;
    debug!(
        "Snapshot at offset {} (clamped to {}) {}x{}",
        offset, state.scroll.offset, width, height
    );
    print!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_status_inset_override() {
        let dir = tempdir().unwrap();
        let options = StartupOptions {
            config_dir: dir.path().to_path_buf(),
            status_inset: Some(2),
            init_config: false,
        };
        let settings = options.settings().unwrap();
        assert_eq!(settings.layout.status_inset, 2);
        assert_eq!(settings.layout.expanded_height, 16);
    }

    #[test]
    fn test_init_config_writes_file() {
        let dir = tempdir().unwrap();
        let options = StartupOptions {
            config_dir: dir.path().to_path_buf(),
            status_inset: None,
            init_config: true,
        };
        assert_eq!(options.settings().unwrap(), Settings::default());
        assert!(dir
            .path()
            .join(config::RECIPE_DIR)
            .join(config::CONFIG_FILENAME)
            .exists());
    }
}
