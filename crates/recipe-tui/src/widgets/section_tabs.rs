//! Ingredients / Tools / Steps tab header

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Widget,
};

use crate::theme::styles;

use super::sections::padded;

/// Tab labels; the first one is active
pub const TABS: [&str; 3] = ["Ingredients", "Tools", "Steps"];

pub struct SectionTabs {
    active: usize,
}

impl SectionTabs {
    pub fn new() -> Self {
        Self { active: 0 }
    }

    /// Blank row, then three rows of tabs
    pub fn height(&self) -> u16 {
        4
    }
}

impl Default for SectionTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SectionTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let strip = padded(Rect::new(area.x, area.y + 1, area.width, (area.height - 1).min(3)));
        let tabs = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(strip);

        for (i, (tab, label)) in tabs.iter().zip(TABS).enumerate() {
            let style = if i == self.active {
                styles::tab_active()
            } else {
                styles::tab_inactive()
            };
            buf.set_style(*tab, style);
            let middle = Rect::new(tab.x, tab.y + tab.height / 2, tab.width, 1);
            Line::styled(label, style)
                .alignment(Alignment::Center)
                .render(middle, buf);
        }
    }
}
