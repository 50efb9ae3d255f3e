//! Simple content sections: info row, description, shopping list button,
//! reviews and the supplementary photos.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use recipe_core::{Asset, Recipe};

use crate::theme::{icons::IconSet, palette, styles};

use super::Photo;

/// Left and right padding of every section
pub const SECTION_PADDING: u16 = 2;

/// Area inside the horizontal section padding
pub fn padded(area: Rect) -> Rect {
    let pad = SECTION_PADDING.min(area.width / 2);
    Rect::new(area.x + pad, area.y, area.width - pad * 2, area.height)
}

/// Cooking time, energy and rating in three evenly spaced columns
pub struct BasicInfo<'a> {
    recipe: &'a Recipe,
    icons: &'a IconSet,
}

impl<'a> BasicInfo<'a> {
    pub fn new(recipe: &'a Recipe, icons: &'a IconSet) -> Self {
        Self { recipe, icons }
    }

    pub fn height(&self) -> u16 {
        3
    }
}

impl Widget for BasicInfo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        let entries = [
            (Asset::Clock, &self.recipe.cooking_time),
            (Asset::Flame, &self.recipe.energy),
            (Asset::Star, &self.recipe.rating),
        ];

        for (column, (icon, text)) in columns.iter().zip(entries) {
            // Top padding row, then icon and value
            let lines = vec![
                Line::default(),
                Line::styled(self.icons.asset(icon), styles::accent()),
                Line::styled(text.as_str(), styles::text_bold()),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(*column, buf);
        }
    }
}

/// Wrapped recipe description with a blank row above and below
pub struct Description<'a> {
    text: &'a str,
}

impl<'a> Description<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.text)
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
    }

    pub fn height(&self, width: u16) -> u16 {
        let lines = self.paragraph().line_count(padded(Rect::new(0, 0, width, 1)).width);
        u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for Description<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = padded(area);
        self.paragraph().render(
            Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(1)),
            buf,
        );
    }
}

/// Full-width "Add to shopping list" button
pub struct ShoppingListButton;

impl ShoppingListButton {
    pub const LABEL: &'static str = "Add to shopping list";

    pub fn height(&self) -> u16 {
        4
    }
}

impl Widget for ShoppingListButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let button = padded(Rect::new(area.x, area.y, area.width, area.height.min(3)));
        let label = Line::styled(Self::LABEL, styles::text_primary().bg(palette::SURFACE));
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(styles::surface_block())
            .render(button, buf);
    }
}

/// "Reviews" heading with its summary and a "See All" link
pub struct Reviews<'a> {
    summary: &'a str,
    icons: &'a IconSet,
}

impl<'a> Reviews<'a> {
    pub const LINK: &'static str = "See All";

    pub fn new(summary: &'a str, icons: &'a IconSet) -> Self {
        Self { summary, icons }
    }

    pub fn height(&self) -> u16 {
        3
    }
}

impl Widget for Reviews<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = padded(area);
        Paragraph::new(vec![
            Line::styled("Reviews", styles::text_bold()),
            Line::styled(self.summary, styles::text_secondary()),
        ])
        .render(inner, buf);

        let link = Line::from(vec![
            Span::styled(Self::LINK, styles::accent()),
            Span::styled(" ", styles::accent()),
            Span::styled(self.icons.asset(Asset::ArrowRight), styles::accent_bold()),
        ])
        .alignment(Alignment::Right);
        link.render(Rect::new(inner.x, inner.y, inner.width, inner.height.min(1)), buf);
    }
}

/// The two supplementary photos side by side
pub struct Images;

impl Images {
    const PHOTO_HEIGHT: u16 = 6;

    pub fn height(&self) -> u16 {
        Self::PHOTO_HEIGHT + 1
    }
}

impl Widget for Images {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = padded(Rect::new(
            area.x,
            area.y,
            area.width,
            area.height.min(Self::PHOTO_HEIGHT),
        ));
        // weights 1 : 0.1 : 1
        let [left, _, right] = Layout::horizontal([
            Constraint::Ratio(10, 21),
            Constraint::Ratio(1, 21),
            Constraint::Ratio(10, 21),
        ])
        .areas(inner);

        Photo::new(Asset::StrawberryPie2).render(left, buf);
        Photo::new(Asset::StrawberryPie3).render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::strawberry_cake;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_description_height_counts_padding() {
        let description = Description::new("one two three");
        // 20 wide minus padding leaves 16 columns: one line
        assert_eq!(description.height(20), 3);
        // 13 wide leaves 9 columns: "one two", "three"
        assert_eq!(description.height(13), 4);
    }

    #[test]
    fn test_description_height_matches_rendered_rows() {
        let recipe = strawberry_cake();
        for width in [24u16, 40, 80] {
            let description = Description::new(&recipe.description);
            let height = description.height(width);
            let area = Rect::new(0, 0, width, height);
            let mut buf = Buffer::empty(area);
            Description::new(&recipe.description).render(area, &mut buf);

            assert!(row_text(&buf, 0).trim().is_empty());
            assert!(!row_text(&buf, 1).trim().is_empty());
            assert!(!row_text(&buf, height - 2).trim().is_empty(), "width {width}");
            assert!(row_text(&buf, height - 1).trim().is_empty(), "width {width}");
        }
    }

    #[test]
    fn test_basic_info_columns() {
        let recipe = strawberry_cake();
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        BasicInfo::new(&recipe, &icons).render(area, &mut buf);

        let values = row_text(&buf, 2);
        let time = values.find("50 min").unwrap();
        let energy = values.find("620 kcal").unwrap();
        let rating = values.find("4,9").unwrap();
        assert!(time < energy && energy < rating);
        assert!(row_text(&buf, 1).contains('\u{2605}'));
    }

    #[test]
    fn test_reviews_link_right_aligned() {
        let icons = IconSet::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        Reviews::new("84 photos", &icons).render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with("  Reviews"));
        assert!(row_text(&buf, 0).ends_with("See All \u{203a}  "));
        assert!(row_text(&buf, 1).contains("84 photos"));
    }

    #[test]
    fn test_shopping_button_label_centered_in_box() {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        ShoppingListButton.render(area, &mut buf);
        assert!(row_text(&buf, 1).contains(ShoppingListButton::LABEL));
        assert_eq!(buf[(2, 0)].symbol(), "\u{256d}");
    }
}
