//! Scrollable recipe content
//!
//! Lays the sections out top to bottom below a blank band as tall as the
//! expanded header, which is drawn over it.

use std::num::NonZeroUsize;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use recipe_core::Recipe;

use crate::theme::{icons::IconSet, palette};

use super::{
    BasicInfo, Description, Images, IngredientGrid, Reviews, SectionTabs, ServingCalculator,
    ShoppingListButton,
};

pub struct RecipeContent<'a> {
    recipe: &'a Recipe,
    icons: &'a IconSet,
    top_padding: u16,
    columns: NonZeroUsize,
    servings: i32,
}

impl<'a> RecipeContent<'a> {
    pub fn new(recipe: &'a Recipe, icons: &'a IconSet) -> Self {
        Self {
            recipe,
            icons,
            top_padding: 0,
            columns: NonZeroUsize::MIN.saturating_add(2),
            servings: 0,
        }
    }

    /// Blank rows above the first section
    pub fn top_padding(mut self, rows: u16) -> Self {
        self.top_padding = rows;
        self
    }

    pub fn columns(mut self, columns: NonZeroUsize) -> Self {
        self.columns = columns;
        self
    }

    pub fn servings(mut self, servings: i32) -> Self {
        self.servings = servings;
        self
    }

    /// Height of each section in order, for a given width
    fn section_heights(&self, width: u16) -> [u16; 8] {
        [
            BasicInfo::new(self.recipe, self.icons).height(),
            Description::new(&self.recipe.description).height(width),
            ServingCalculator::new(self.servings, self.icons).height(),
            SectionTabs::new().height(),
            IngredientGrid::new(&self.recipe.ingredients, self.columns, self.icons).height(),
            ShoppingListButton.height(),
            Reviews::new(&self.recipe.reviews, self.icons).height(),
            Images.height(),
        ]
    }

    /// Total content height at `width`, including the top padding
    pub fn height(&self, width: u16) -> u16 {
        self.section_heights(width)
            .iter()
            .fold(self.top_padding, |total, h| total.saturating_add(*h))
    }
}

impl Widget for RecipeContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::BACKGROUND));

        let heights = self.section_heights(area.width);
        let mut slots = Vec::with_capacity(heights.len());
        let mut y = area.y.saturating_add(self.top_padding);
        for h in heights {
            let top = y.min(area.bottom());
            let height = h.min(area.bottom() - top);
            slots.push(Rect::new(area.x, top, area.width, height));
            y = y.saturating_add(h);
        }

        let recipe = self.recipe;
        let icons = self.icons;
        BasicInfo::new(recipe, icons).render(slots[0], buf);
        Description::new(&recipe.description).render(slots[1], buf);
        ServingCalculator::new(self.servings, icons).render(slots[2], buf);
        SectionTabs::new().render(slots[3], buf);
        IngredientGrid::new(&recipe.ingredients, self.columns, icons).render(slots[4], buf);
        ShoppingListButton.render(slots[5], buf);
        Reviews::new(&recipe.reviews, icons).render(slots[6], buf);
        Images.render(slots[7], buf);
    }
}
