//! Collapsing recipe header
//!
//! Renders the header at its full expanded height: the photo region with
//! the category chip on top, then the title band. The caller translates it
//! upward by `HeaderFrame::clamped_offset` rows when blitting.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use recipe_core::{HeaderFrame, ParallaxSpec, Recipe};

use crate::theme::palette;

use super::Photo;

/// Title scale at or above which the title keeps its bold weight
const BOLD_TITLE_SCALE: f32 = 0.9;

/// Chip padding on each side of the category text
const CHIP_PADDING: usize = 2;

pub struct ParallaxHeader<'a> {
    recipe: &'a Recipe,
    spec: &'a ParallaxSpec,
    frame: HeaderFrame,
}

impl<'a> ParallaxHeader<'a> {
    pub fn new(recipe: &'a Recipe, spec: &'a ParallaxSpec, frame: HeaderFrame) -> Self {
        Self {
            recipe,
            spec,
            frame,
        }
    }

    fn render_category(&self, image: Rect, buf: &mut Buffer) {
        // Fully transparent: nothing to draw
        if self.frame.image_alpha <= 0.0 || image.height < 2 {
            return;
        }
        let alpha = self.frame.image_alpha;
        let style = Style::default()
            .fg(palette::with_alpha(palette::TEXT_PRIMARY, alpha))
            .bg(palette::with_alpha(palette::SURFACE, alpha))
            .add_modifier(Modifier::BOLD);
        let pad = " ".repeat(CHIP_PADDING);
        let chip = Line::from(Span::styled(
            format!("{pad}{}{pad}", self.recipe.category),
            style,
        ));

        // One row of bottom padding below the chip
        let chip_area = Rect::new(
            image.x + image.width.min(2),
            image.bottom() - 2,
            image.width.saturating_sub(2),
            1,
        );
        chip.render(chip_area, buf);
    }

    fn render_title(&self, band: Rect, buf: &mut Buffer) {
        if band.is_empty() {
            return;
        }
        let mut style = Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::BACKGROUND);
        if self.frame.title_scale >= BOLD_TITLE_SCALE {
            style = style.add_modifier(Modifier::BOLD);
        }

        let inset = self.frame.title_inset_cols().min(band.width);
        let title_area = Rect::new(
            band.x + inset,
            band.y + band.height / 2,
            band.width - inset,
            1,
        );
        Line::from(Span::styled(self.recipe.title.as_str(), style)).render(title_area, buf);
    }
}

impl Widget for ParallaxHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::BACKGROUND));

        let image_height = self.spec.image_height().min(area.height);
        let image = Rect::new(area.x, area.y, area.width, image_height);
        let band = Rect::new(
            area.x,
            area.y + image_height,
            area.width,
            self.spec.collapsed_height.min(area.height - image_height),
        );

        Photo::new(self.recipe.image)
            .gradient(true)
            .alpha(self.frame.image_alpha)
            .render(image, buf);
        self.render_category(image, buf);
        self.render_title(band, buf);
    }
}

/// Elevation shadow drawn under the collapsed header
pub struct HeaderShadow;

impl Widget for HeaderShadow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("\u{2594}").set_fg(palette::SHADOW); // ▔
                }
            }
        }
    }
}
