//! Centralized theme for the recipe screen.
//!
//! This module provides:
//! - `palette` — Raw color constants and color blending
//! - `styles` — Semantic style and block builders
//! - `icons` — Asset glyphs with unicode and emoji variants

pub mod icons;
pub mod palette;
pub mod styles;
