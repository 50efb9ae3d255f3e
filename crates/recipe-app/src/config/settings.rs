//! Settings file loading (.recipe/config.toml)

use std::path::Path;

use recipe_core::prelude::*;

use super::types::Settings;

/// Directory holding the screen's configuration
pub const RECIPE_DIR: &str = ".recipe";

/// Settings file name inside [`RECIPE_DIR`]
pub const CONFIG_FILENAME: &str = "config.toml";

/// Load settings from `<base_path>/.recipe/config.toml`.
///
/// Falls back to defaults when the file is missing, unreadable, fails to
/// parse, or describes a layout that cannot be drawn.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = base_path.join(RECIPE_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            return Settings::default();
        }
    };

    match parse_settings(&content) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse and validate settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Create a default config file in .recipe/ if none exists
pub fn init_config_dir(base_path: &Path) -> Result<()> {
    let recipe_dir = base_path.join(RECIPE_DIR);

    if !recipe_dir.exists() {
        std::fs::create_dir_all(&recipe_dir)
            .map_err(|e| Error::config(format!("Failed to create .recipe dir: {}", e)))?;
    }

    let config_path = recipe_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Recipe screen configuration

[layout]
# Header height at rest and once collapsed (rows)
expanded_height = 16
collapsed_height = 3
# Rows reserved at the top of the screen
status_inset = 0
# Ingredient grid columns
grid_columns = 3

[behavior]
initial_servings = 6
# Rows moved by Page Up / Page Down
page_scroll = 10

[ui]
# "unicode" or "emoji"
icons = "unicode"
"#;
        std::fs::write(&config_path, default_content)
            .context(format!("Failed to write {}", config_path.display()))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
