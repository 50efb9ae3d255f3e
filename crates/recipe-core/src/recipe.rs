//! Recipe display record
//!
//! A [`Recipe`] is built once at startup and never mutated. All numeric
//! fields (time, energy, rating) are pre-formatted display strings.

use serde::Serialize;

/// Named static image and icon resources.
///
/// The core only refers to assets by name; the TUI theme resolves each one
/// to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    // Photos
    StrawberryPie1,
    StrawberryPie2,
    StrawberryPie3,

    // Controls
    ArrowBack,
    Favorite,
    ArrowRight,
    Minus,
    Plus,

    // Info row
    Clock,
    Flame,
    Star,

    // Ingredients
    Flour,
    Egg,
    Juice,
    Strawberry,
    Sugar,
    Mint,
    Lemon,
    Chocolate,
    Jam,
}

/// One ingredient card in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub image: Asset,
    pub title: String,
    pub subtitle: String,
}

impl Ingredient {
    pub fn new(image: Asset, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            image,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Display fields for a single recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub image: Asset,
    pub title: String,
    pub category: String,
    pub cooking_time: String,
    pub energy: String,
    pub rating: String,
    pub description: String,
    pub reviews: String,
    pub ingredients: Vec<Ingredient>,
}

/// The record the screen is built from
pub fn strawberry_cake() -> Recipe {
    Recipe {
        image: Asset::StrawberryPie1,
        title: "Strawberry Cake".to_string(),
        category: "Desserts".to_string(),
        cooking_time: "50 min".to_string(),
        energy: "620 kcal".to_string(),
        rating: "4,9".to_string(),
        description: "This dessert is very tasty and not difficult to prepare. Also, you can \
                      replace strawberries with any other berry you like."
            .to_string(),
        reviews: "84 photos     430 comments".to_string(),
        ingredients: vec![
            Ingredient::new(Asset::Flour, "Flour", "450 g"),
            Ingredient::new(Asset::Egg, "Eggs", "4"),
            Ingredient::new(Asset::Juice, "Lemon juice", "150 g"),
            Ingredient::new(Asset::Strawberry, "Strawberry", "200 g"),
            Ingredient::new(Asset::Sugar, "Sugar", "1 cup"),
            Ingredient::new(Asset::Mint, "Mint", "20 g"),
            Ingredient::new(Asset::Lemon, "Lemon", "1"),
            Ingredient::new(Asset::Chocolate, "Chocolate", "250 g"),
            Ingredient::new(Asset::Jam, "Jam", "100 g"),
        ],
    }
}
