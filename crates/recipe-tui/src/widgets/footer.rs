//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const HINTS: [(&str, &str); 7] = [
    ("\u{2191}\u{2193}", "scroll"),
    ("+/-", "servings"),
    ("s", "shop"),
    ("r", "reviews"),
    ("f", "favorite"),
    ("b", "back"),
    ("q", "quit"),
];

pub struct KeyHints;

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::SURFACE));

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::accent_bold()));
            spans.push(Span::styled(format!(" {label}"), styles::text_secondary()));
        }
        Line::from(spans).render(Rect::new(area.x, area.y, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_rendered() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        KeyHints.render(area, &mut buf);
        let row: String = (0..120).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("+/- servings"));
        assert!(row.contains("q quit"));
        assert_eq!(buf[(119, 0)].bg, palette::SURFACE);
    }

    #[test]
    fn test_truncates_on_narrow_screens() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        KeyHints.render(area, &mut buf);
        let row: String = (0..10).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(" \u{2191}\u{2193} scroll"));
    }
}
