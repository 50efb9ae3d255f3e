//! Custom widget components

mod content;
mod footer;
mod ingredient_grid;
mod parallax_header;
mod photo;
pub mod section_tabs;
pub mod sections;
mod serving_calculator;
mod top_bar;

pub use content::RecipeContent;
pub use footer::KeyHints;
pub use ingredient_grid::{IngredientCard, IngredientGrid};
pub use parallax_header::{HeaderShadow, ParallaxHeader};
pub use photo::Photo;
pub use section_tabs::SectionTabs;
pub use sections::{BasicInfo, Description, Images, Reviews, ShoppingListButton};
pub use serving_calculator::ServingCalculator;
pub use top_bar::{CircularButton, TopBar};
