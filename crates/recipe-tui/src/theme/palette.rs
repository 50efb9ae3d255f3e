//! Color palette for the light recipe theme.
//!
//! All colors are RGB so the header can blend them for its fade.

use ratatui::style::Color;

// --- Background layers ---
pub const BACKGROUND: Color = Color::Rgb(255, 255, 255); // Page background
pub const SURFACE: Color = Color::Rgb(221, 221, 221); // Chips, cards, stepper (light gray)

// --- Accent ---
pub const PINK: Color = Color::Rgb(233, 30, 99); // Named accent "pink"
pub const ON_ACCENT: Color = Color::Rgb(255, 255, 255); // Text on pink

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(17, 17, 17);
pub const TEXT_SECONDARY: Color = Color::Rgb(68, 68, 68); // Dark gray
pub const TEXT_MUTED: Color = Color::Rgb(136, 136, 136); // Gray, button icons

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(170, 170, 170);

// --- Photo tones ---
pub const CRUST: Color = Color::Rgb(201, 146, 84);
pub const CRUST_DARK: Color = Color::Rgb(150, 98, 48);
pub const CREAM: Color = Color::Rgb(250, 238, 220);
pub const BERRY: Color = Color::Rgb(214, 40, 57);
pub const BERRY_LIGHT: Color = Color::Rgb(245, 105, 110);
pub const LEAF: Color = Color::Rgb(86, 160, 72);
pub const TABLE: Color = Color::Rgb(236, 214, 200);

/// Linear blend from `from` (t = 0) to `to` (t = 1).
///
/// Non-RGB colors cannot be mixed and snap at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// `color` drawn at opacity `alpha` over the page background
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    blend(BACKGROUND, color, alpha)
}
