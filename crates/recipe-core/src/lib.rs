//! # recipe-core - Core Domain Types
//!
//! Foundation crate for the recipe screen. Provides the recipe record, the
//! parallax header math, the grid layout, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Recipe (`recipe`)
//! - [`Recipe`] - Immutable display record for one recipe
//! - [`Ingredient`] - One ingredient card (icon, title, amount)
//! - [`Asset`] - Named static image/icon resources
//! - [`strawberry_cake()`] - The constant record the screen is built from
//!
//! ### Parallax (`parallax`)
//! - [`ParallaxSpec`] - Header height constants and title/elevation tuning
//! - [`HeaderFrame`] - Render parameters derived from one scroll offset
//!
//! ### Grid (`grid`)
//! - [`grid_rows()`] - Split a sequence into fixed-width rows padded with spacers
//! - [`GridCell`] - A content cell or an empty spacer
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use recipe_core::prelude::*;
//! ```

pub mod error;
pub mod grid;
pub mod logging;
pub mod parallax;
pub mod prelude;
pub mod recipe;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use grid::{grid_rows, GridCell};
pub use parallax::{HeaderFrame, ParallaxSpec};
pub use recipe::{strawberry_cake, Asset, Ingredient, Recipe};
