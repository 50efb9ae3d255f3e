//! Procedural food photo
//!
//! Terminals cannot show the bundled photos, so each photo asset is painted
//! as a top-down strawberry pie using half blocks: every cell holds two
//! vertical pixels (`▀` with the upper pixel as foreground and the lower one
//! as background).

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use recipe_core::Asset;

use crate::theme::palette;

/// Where the fade-to-white gradient starts, as a fraction of the height
const GRADIENT_START: f32 = 0.4;

/// Pie photo with optional bottom gradient and opacity
#[derive(Debug, Clone, Copy)]
pub struct Photo {
    asset: Asset,
    alpha: f32,
    gradient: bool,
}

impl Photo {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            alpha: 1.0,
            gradient: false,
        }
    }

    /// Opacity over the page background
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Fade the lower part of the photo into the page background
    pub fn gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    /// Arrangement tweak per photo so the three assets differ
    fn variant(&self) -> f32 {
        match self.asset {
            Asset::StrawberryPie2 => 1.0,
            Asset::StrawberryPie3 => 2.0,
            _ => 0.0,
        }
    }

    /// Color of one pixel; `px` in `[0, w)`, `py` in `[0, h)` (h in pixels)
    fn pixel(&self, px: u16, py: u16, w: u16, h: u16) -> Color {
        let w = f32::from(w.max(1));
        let h = f32::from(h.max(1));
        // Terminal cells are about twice as tall as wide, half blocks make
        // pixels roughly square, so a circle needs the same radius in both.
        let cx = w / 2.0 + (self.variant() - 1.0) * w * 0.08;
        let cy = h * 0.55;
        let radius = (w * 0.42).min(h * 0.62);
        let x = (f32::from(px) + 0.5 - cx) / radius;
        let y = (f32::from(py) + 0.5 - cy) / radius;
        let d = (x * x + y * y).sqrt();

        if d > 1.0 {
            return palette::TABLE;
        }
        if d > 0.82 {
            return if y > 0.2 {
                palette::CRUST_DARK
            } else {
                palette::CRUST
            };
        }

        // Ring of berries around a central one
        let spin = self.variant() * 0.4;
        for k in 0..7 {
            let angle = spin + k as f32 * std::f32::consts::TAU / 7.0;
            let (bx, by) = (0.52 * angle.cos(), 0.52 * angle.sin());
            if let Some(color) = berry(x - bx, y - by) {
                return color;
            }
        }
        berry(x, y).unwrap_or(palette::CREAM)
    }

    /// Apply the gradient and opacity to a pixel
    fn shade(&self, color: Color, py: u16, pixel_height: u16) -> Color {
        let color = if self.gradient {
            let t = f32::from(py) / f32::from(pixel_height.max(1));
            let fade = ((t - GRADIENT_START) / (1.0 - GRADIENT_START)).clamp(0.0, 1.0);
            palette::blend(color, palette::BACKGROUND, fade)
        } else {
            color
        };
        palette::with_alpha(color, self.alpha)
    }

    /// Shaded color of pixel row `py` in column `col`
    fn shaded_pixel(&self, col: u16, py: u16, area: Rect) -> Color {
        let pixel_height = area.height * 2;
        self.shade(self.pixel(col, py, area.width, pixel_height), py, pixel_height)
    }
}

/// Berry pixel at offset `(dx, dy)` from the berry center, if inside it
fn berry(dx: f32, dy: f32) -> Option<Color> {
    let r = (dx * dx + dy * dy).sqrt();
    if r > 0.2 {
        return None;
    }
    if dy < -0.12 && dx.abs() < 0.08 {
        return Some(palette::LEAF);
    }
    if dx < -0.04 && dy < -0.02 {
        Some(palette::BERRY_LIGHT)
    } else {
        Some(palette::BERRY)
    }
}

impl Widget for Photo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for row in 0..area.height {
            for col in 0..area.width {
                let upper = self.shaded_pixel(col, row * 2, area);
                let lower = self.shaded_pixel(col, row * 2 + 1, area);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol("\u{2580}").set_fg(upper).set_bg(lower); // ▀
                }
            }
        }
    }
}
