//! Semantic style builders for the recipe theme.
//!
//! Every rounded surface uses `BorderType::Rounded`; only the fill differs.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY).bg(palette::BACKGROUND)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::PINK)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD)
}

/// Active tab: white on pink
pub fn tab_active() -> Style {
    Style::default()
        .fg(palette::ON_ACCENT)
        .bg(palette::PINK)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab: dark gray on light gray
pub fn tab_inactive() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .bg(palette::SURFACE)
}

// --- Block builders ---

/// Filled rounded surface (chips, stepper, cards, buttons)
pub fn surface_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::SURFACE).bg(palette::BACKGROUND))
        .style(Style::default().bg(palette::SURFACE))
}

/// White rounded button with a gray outline (circular icon buttons)
pub fn button_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::SHADOW).bg(palette::BACKGROUND))
        .style(Style::default().bg(palette::BACKGROUND))
}
