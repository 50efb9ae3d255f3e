//! Screen layout definitions for the TUI
//!
//! The screen is a scrollable body (content with the header overlaid on
//! top) above a one-row key-hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Scrollable content plus the overlaid header and icon row
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Split the terminal into body and footer.
///
/// Screens too short for both give every row to the body.
pub fn create(area: Rect) -> ScreenAreas {
    if area.height < 2 {
        return ScreenAreas {
            body: area,
            footer: Rect::new(area.x, area.bottom(), area.width, 0),
        };
    }

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    ScreenAreas {
        body: chunks[0],
        footer: chunks[1],
    }
}

/// Rect of the fixed icon row inside `body`, clipped to the body
pub fn top_bar(body: Rect, status_inset: u16, collapsed_height: u16) -> Rect {
    let y = body.y.saturating_add(status_inset).min(body.bottom());
    let height = collapsed_height.min(body.bottom() - y);
    Rect::new(body.x, y, body.width, height)
}
