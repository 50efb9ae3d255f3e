//! Ingredient cards laid out in a fixed-column grid

use std::num::NonZeroUsize;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};
use recipe_core::{grid_rows, GridCell, Ingredient};

use crate::theme::{icons::IconSet, palette, styles};

use super::sections::padded;

/// Rows per card: icon box (3), title, subtitle, bottom padding
pub const CARD_HEIGHT: u16 = 6;

/// Widest an icon box gets
const MAX_CARD_WIDTH: u16 = 12;

/// One ingredient: rounded icon box with the name and amount below
pub struct IngredientCard<'a> {
    ingredient: &'a Ingredient,
    icons: &'a IconSet,
}

impl<'a> IngredientCard<'a> {
    pub fn new(ingredient: &'a Ingredient, icons: &'a IconSet) -> Self {
        Self { ingredient, icons }
    }
}

impl Widget for IngredientCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(2).clamp(1, MAX_CARD_WIDTH).min(area.width);
        let card = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

        let [icon_box, title, subtitle] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(card);

        let glyph = self.icons.asset(self.ingredient.image);
        Paragraph::new(Line::styled(glyph, styles::text_primary().bg(palette::SURFACE)))
            .alignment(Alignment::Center)
            .block(styles::surface_block())
            .render(icon_box, buf);
        Line::styled(self.ingredient.title.as_str(), styles::text_bold()).render(title, buf);
        Line::styled(self.ingredient.subtitle.as_str(), styles::text_secondary())
            .render(subtitle, buf);
    }
}

/// Grid of ingredient cards; trailing cells of the last row stay empty
pub struct IngredientGrid<'a> {
    ingredients: &'a [Ingredient],
    columns: NonZeroUsize,
    icons: &'a IconSet,
}

impl<'a> IngredientGrid<'a> {
    pub fn new(ingredients: &'a [Ingredient], columns: NonZeroUsize, icons: &'a IconSet) -> Self {
        Self {
            ingredients,
            columns,
            icons,
        }
    }

    /// Top padding row plus one card row per grid row
    pub fn height(&self) -> u16 {
        let rows = self.ingredients.len().div_ceil(self.columns.get());
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_mul(CARD_HEIGHT)
            .saturating_add(1)
    }
}

impl Widget for IngredientGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = padded(area);
        let columns = u32::try_from(self.columns.get()).unwrap_or(u32::MAX);
        let mut y = inner.y.saturating_add(1);

        for row in grid_rows(self.ingredients, self.columns) {
            if y >= inner.bottom() {
                break;
            }
            let row_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT.min(inner.bottom() - y));
            let cells = Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns)))
                .split(row_area);

            for (cell, area) in row.into_iter().zip(cells.iter()) {
                match cell {
                    GridCell::Item(ingredient) => {
                        IngredientCard::new(ingredient, self.icons).render(*area, buf)
                    }
                    GridCell::Spacer => {}
                }
            }
            y = y.saturating_add(CARD_HEIGHT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::strawberry_cake;

    fn columns(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_height_three_rows() {
        let recipe = strawberry_cake();
        let icons = IconSet::default();
        let grid = IngredientGrid::new(&recipe.ingredients, columns(3), &icons);
        assert_eq!(grid.height(), 1 + 3 * CARD_HEIGHT);
    }

    #[test]
    fn test_height_partial_row() {
        let recipe = strawberry_cake();
        let icons = IconSet::default();
        let grid = IngredientGrid::new(&recipe.ingredients[..4], columns(3), &icons);
        assert_eq!(grid.height(), 1 + 2 * CARD_HEIGHT);
    }

    #[test]
    fn test_empty_grid_is_padding_only() {
        let icons = IconSet::default();
        let grid = IngredientGrid::new(&[], columns(3), &icons);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn test_cards_in_row_major_order() {
        let recipe = strawberry_cake();
        let icons = IconSet::default();
        let grid = IngredientGrid::new(&recipe.ingredients, columns(3), &icons);
        let area = Rect::new(0, 0, 64, grid.height());
        let mut buf = Buffer::empty(area);
        grid.render(area, &mut buf);

        // first card row: box rows 1..4, titles on row 4, amounts on row 5
        let titles = row_text(&buf, 4);
        let flour = titles.find("Flour").unwrap();
        let eggs = titles.find("Eggs").unwrap();
        let juice = titles.find("Lemon juice").unwrap();
        assert!(flour < eggs && eggs < juice);
        assert!(row_text(&buf, 5).contains("450 g"));

        assert!(row_text(&buf, 10).contains("Strawberry"));
        assert!(row_text(&buf, 16).contains("Chocolate"));
    }

    #[test]
    fn test_spacers_leave_cells_empty() {
        let recipe = strawberry_cake();
        let icons = IconSet::default();
        let grid = IngredientGrid::new(&recipe.ingredients[..1], columns(3), &icons);
        let area = Rect::new(0, 0, 64, grid.height());
        let mut buf = Buffer::empty(area);
        grid.render(area, &mut buf);

        assert!(row_text(&buf, 4).contains("Flour"));
        // middle and right columns untouched
        let right: String = row_text(&buf, 2).chars().skip(30).collect();
        assert_eq!(right.trim(), "");
    }
}
