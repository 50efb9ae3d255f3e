//! Configuration file parsing for the recipe screen
//!
//! Supports `.recipe/config.toml` with `[layout]`, `[behavior]` and `[ui]` tables.
//! Every field is optional; missing values take their defaults.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, parse_settings, CONFIG_FILENAME, RECIPE_DIR};
pub use types::{BehaviorSettings, IconMode, LayoutSettings, Settings, UiSettings};
