//! Application state (Model in TEA pattern)

use recipe_core::{HeaderFrame, ParallaxSpec, Recipe};

use crate::config::Settings;
use crate::counter::ServingCounter;
use crate::scroll_state::ScrollState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// The record on display; never mutated
    pub recipe: Recipe,

    /// Configuration loaded at startup
    pub settings: Settings,

    /// Header constants derived from the layout settings
    pub parallax: ParallaxSpec,

    /// Content scroll position (source of truth for the header)
    pub scroll: ScrollState,

    /// Serving calculator
    pub servings: ServingCounter,

    /// Favorite button state
    pub favorite: bool,

    /// Current lifecycle phase
    pub phase: AppPhase,
}

impl AppState {
    pub fn new(recipe: Recipe) -> Self {
        Self::with_settings(recipe, Settings::default())
    }

    pub fn with_settings(recipe: Recipe, settings: Settings) -> Self {
        Self {
            parallax: settings.layout.parallax_spec(),
            servings: ServingCounter::new(settings.behavior.initial_servings),
            recipe,
            settings,
            scroll: ScrollState::new(),
            favorite: false,
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Rows reserved at the top of the screen
    pub fn status_inset(&self) -> u16 {
        self.settings.layout.status_inset
    }

    /// Collapse range of the header for the configured inset
    pub fn header_max_offset(&self) -> u16 {
        self.parallax.max_offset(self.status_inset())
    }

    /// Header parameters for the current scroll position
    pub fn header_frame(&self) -> HeaderFrame {
        self.parallax
            .frame(i32::from(self.scroll.offset), self.header_max_offset())
    }
}
