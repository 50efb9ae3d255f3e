//! Configuration types

use std::num::NonZeroUsize;

use recipe_core::prelude::*;
use recipe_core::ParallaxSpec;
use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_SERVINGS;

/// Application settings (.recipe/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Header and grid geometry, in terminal cells
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Header height at rest
    #[serde(default = "default_expanded_height")]
    pub expanded_height: u16,

    /// Header height once collapsed
    #[serde(default = "default_collapsed_height")]
    pub collapsed_height: u16,

    /// Rows reserved at the top of the screen (status bar)
    #[serde(default)]
    pub status_inset: u16,

    /// Ingredient grid column count
    #[serde(default = "default_grid_columns")]
    pub grid_columns: NonZeroUsize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            expanded_height: default_expanded_height(),
            collapsed_height: default_collapsed_height(),
            status_inset: 0,
            grid_columns: default_grid_columns(),
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Serving count when the screen opens
    #[serde(default = "default_initial_servings")]
    pub initial_servings: i32,

    /// Rows moved by Page Up / Page Down
    #[serde(default = "default_page_scroll")]
    pub page_scroll: u16,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            initial_servings: default_initial_servings(),
            page_scroll: default_page_scroll(),
        }
    }
}

/// Icon rendering mode
///
/// `unicode` uses single-width symbols that render in any terminal; `emoji`
/// uses pictographs for ingredients and info icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    Emoji,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Emoji => write!(f, "emoji"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "emoji"
    #[serde(default)]
    pub icons: IconMode,
}

fn default_expanded_height() -> u16 {
    ParallaxSpec::default().expanded_height
}

fn default_collapsed_height() -> u16 {
    ParallaxSpec::default().collapsed_height
}

fn default_grid_columns() -> NonZeroUsize {
    NonZeroUsize::new(3).unwrap_or(NonZeroUsize::MIN)
}

fn default_initial_servings() -> i32 {
    DEFAULT_SERVINGS
}

fn default_page_scroll() -> u16 {
    10
}

impl LayoutSettings {
    /// Parallax constants for this layout
    pub fn parallax_spec(&self) -> ParallaxSpec {
        ParallaxSpec {
            expanded_height: self.expanded_height,
            collapsed_height: self.collapsed_height,
            ..ParallaxSpec::default()
        }
    }
}

impl Settings {
    /// Reject geometry the header cannot be drawn with
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if layout.collapsed_height == 0 {
            return Err(Error::config_invalid("layout.collapsed_height must be at least 1"));
        }
        if layout.collapsed_height > layout.expanded_height {
            return Err(Error::config_invalid(format!(
                "layout.collapsed_height ({}) exceeds layout.expanded_height ({})",
                layout.collapsed_height, layout.expanded_height
            )));
        }
        if self.behavior.page_scroll == 0 {
            return Err(Error::config_invalid("behavior.page_scroll must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.layout.expanded_height, 16);
        assert_eq!(settings.layout.collapsed_height, 3);
        assert_eq!(settings.layout.status_inset, 0);
        assert_eq!(settings.layout.grid_columns.get(), 3);
        assert_eq!(settings.behavior.initial_servings, 6);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [layout]
            status_inset = 1
            "#,
        )
        .unwrap();
        assert_eq!(settings.layout.status_inset, 1);
        assert_eq!(settings.layout.expanded_height, 16);
        assert_eq!(settings.behavior.page_scroll, 10);
    }

    #[test]
    fn test_icon_mode_parses_snake_case() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"emoji\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::Emoji);
        assert_eq!(IconMode::Emoji.to_string(), "emoji");
    }

    #[test]
    fn test_zero_columns_rejected_by_parser() {
        let result: std::result::Result<Settings, _> = toml::from_str(
            r#"
            [layout]
            grid_columns = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_heights() {
        let mut settings = Settings::default();
        settings.layout.collapsed_height = 20;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_collapsed_height() {
        let mut settings = Settings::default();
        settings.layout.collapsed_height = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_page_scroll() {
        let mut settings = Settings::default();
        settings.behavior.page_scroll = 0;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.to_string().contains("page_scroll"));
    }

    #[test]
    fn test_parallax_spec_uses_layout_heights() {
        let mut settings = Settings::default();
        settings.layout.expanded_height = 20;
        settings.layout.collapsed_height = 4;
        let spec = settings.layout.parallax_spec();
        assert_eq!(spec.image_height(), 16);
        assert_eq!(spec.title_scale_factor, 0.25);
    }
}
