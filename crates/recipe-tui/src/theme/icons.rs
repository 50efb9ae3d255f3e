//! Icon set for the recipe screen.
//!
//! Provides `IconSet` which resolves each [`Asset`] to a glyph at runtime
//! based on `IconMode`.
//! - `IconMode::Unicode` — single-width symbols that work in all terminals
//! - `IconMode::Emoji` — pictographs (two columns wide in most terminals)

use recipe_app::config::IconMode;
use recipe_core::Asset;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Glyph for a control, info or ingredient asset.
    ///
    /// Photos have no glyph; the header paints them procedurally.
    pub fn asset(&self, asset: Asset) -> &'static str {
        match (self.mode, asset) {
            (_, Asset::StrawberryPie1 | Asset::StrawberryPie2 | Asset::StrawberryPie3) => "",

            // Controls are the same in both modes
            (_, Asset::ArrowBack) => "\u{2190}",  // ←
            (_, Asset::ArrowRight) => "\u{203a}", // ›
            (_, Asset::Minus) => "\u{2212}",      // −
            (_, Asset::Plus) => "+",
            (_, Asset::Favorite) => self.favorite(false),

            (IconMode::Unicode, Asset::Clock) => "\u{25f7}", // ◷
            (IconMode::Unicode, Asset::Flame) => "\u{25b2}", // ▲
            (IconMode::Unicode, Asset::Star) => "\u{2605}",  // ★
            (IconMode::Emoji, Asset::Clock) => "\u{23f0}",   // ⏰
            (IconMode::Emoji, Asset::Flame) => "\u{1f525}",  // 🔥
            (IconMode::Emoji, Asset::Star) => "\u{2b50}",    // ⭐

            (IconMode::Unicode, Asset::Flour) => "\u{2058}", // ⁘
            (IconMode::Unicode, Asset::Egg) => "\u{2b2e}",   // ⬮
            (IconMode::Unicode, Asset::Juice) => "\u{2294}", // ⊔
            (IconMode::Unicode, Asset::Strawberry) => "\u{2665}", // ♥
            (IconMode::Unicode, Asset::Sugar) => "\u{25a3}", // ▣
            (IconMode::Unicode, Asset::Mint) => "\u{2618}",  // ☘
            (IconMode::Unicode, Asset::Lemon) => "\u{25cf}", // ●
            (IconMode::Unicode, Asset::Chocolate) => "\u{25a6}", // ▦
            (IconMode::Unicode, Asset::Jam) => "\u{25d8}",   // ◘
            (IconMode::Emoji, Asset::Flour) => "\u{1f33e}",  // 🌾
            (IconMode::Emoji, Asset::Egg) => "\u{1f95a}",    // 🥚
            (IconMode::Emoji, Asset::Juice) => "\u{1f9c3}",  // 🧃
            (IconMode::Emoji, Asset::Strawberry) => "\u{1f353}", // 🍓
            (IconMode::Emoji, Asset::Sugar) => "\u{1f36c}",  // 🍬
            (IconMode::Emoji, Asset::Mint) => "\u{1f33f}",   // 🌿
            (IconMode::Emoji, Asset::Lemon) => "\u{1f34b}",  // 🍋
            (IconMode::Emoji, Asset::Chocolate) => "\u{1f36b}", // 🍫
            (IconMode::Emoji, Asset::Jam) => "\u{1f36f}",    // 🍯
        }
    }

    /// Heart outline, or filled once favorited
    pub fn favorite(&self, filled: bool) -> &'static str {
        if filled {
            "\u{2665}" // ♥
        } else {
            "\u{2661}" // ♡
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::Unicode)
    }
}
