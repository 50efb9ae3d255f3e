//! Fixed icon row with circular back and favorite buttons

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use recipe_core::Asset;

use crate::theme::{icons::IconSet, palette, styles};

/// Button width in columns (border, padding, glyph, padding, border)
pub const BUTTON_WIDTH: u16 = 5;

/// Horizontal padding of the icon row
const ROW_PADDING: u16 = 2;

/// Small rounded icon button
///
/// Drawn with a border when it has three rows to work with, otherwise as a
/// single padded row.
pub struct CircularButton<'a> {
    glyph: &'a str,
    color: Color,
}

impl<'a> CircularButton<'a> {
    pub fn new(glyph: &'a str) -> Self {
        Self {
            glyph,
            color: palette::TEXT_MUTED,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for CircularButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let glyph = Line::from(self.glyph)
            .style(Style::default().fg(self.color).bg(palette::BACKGROUND))
            .alignment(Alignment::Center);

        if area.height >= 3 && area.width >= 3 {
            Paragraph::new(glyph)
                .block(styles::button_block())
                .render(Rect::new(area.x, area.y, area.width, 3), buf);
        } else {
            buf.set_style(area, Style::default().bg(palette::BACKGROUND));
            glyph.render(Rect::new(area.x, area.y, area.width, 1), buf);
        }
    }
}

/// Back and favorite buttons; unaffected by scrolling
pub struct TopBar {
    icons: IconSet,
    favorite: bool,
}

impl TopBar {
    pub fn new(icons: IconSet, favorite: bool) -> Self {
        Self { icons, favorite }
    }
}

impl Widget for TopBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || area.width < BUTTON_WIDTH * 2 + ROW_PADDING * 2 {
            return;
        }
        let height = area.height.min(3);
        let y = area.y + (area.height - height) / 2;

        let back = Rect::new(area.x + ROW_PADDING, y, BUTTON_WIDTH, height);
        let favorite = Rect::new(
            area.right() - ROW_PADDING - BUTTON_WIDTH,
            y,
            BUTTON_WIDTH,
            height,
        );

        CircularButton::new(self.icons.asset(Asset::ArrowBack)).render(back, buf);

        let heart = CircularButton::new(self.icons.favorite(self.favorite));
        let heart = if self.favorite {
            heart.color(palette::PINK)
        } else {
            heart
        };
        heart.render(favorite, buf);
    }
}
