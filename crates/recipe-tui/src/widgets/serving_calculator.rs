//! "Serving" row with the minus/plus stepper

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Widget,
};
use recipe_core::Asset;

use crate::theme::{icons::IconSet, palette, styles};

use super::{sections::padded, CircularButton};

/// Width reserved for the serving count between the buttons
const VALUE_WIDTH: u16 = 6;

pub struct ServingCalculator<'a> {
    servings: i32,
    icons: &'a IconSet,
}

impl<'a> ServingCalculator<'a> {
    pub fn new(servings: i32, icons: &'a IconSet) -> Self {
        Self { servings, icons }
    }

    pub fn height(&self) -> u16 {
        3
    }
}

impl Widget for ServingCalculator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::surface_block();
        let boxed = padded(area);
        let inner = block.inner(boxed);
        block.render(boxed, buf);
        if inner.is_empty() {
            return;
        }

        let row = Rect::new(
            inner.x + inner.width.min(1),
            inner.y,
            inner.width.saturating_sub(2),
            1,
        );
        let [label, minus, value, plus] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(VALUE_WIDTH),
            Constraint::Length(3),
        ])
        .areas(row);

        let surface = Style::default().bg(palette::SURFACE);
        Line::styled("Serving", styles::text_bold().bg(palette::SURFACE)).render(label, buf);
        CircularButton::new(self.icons.asset(Asset::Minus))
            .color(palette::PINK)
            .render(minus, buf);
        Line::styled(self.servings.to_string(), styles::text_bold().patch(surface))
            .alignment(Alignment::Center)
            .render(value, buf);
        CircularButton::new(self.icons.asset(Asset::Plus))
            .color(palette::PINK)
            .render(plus, buf);
    }
}
