//! Main render/view function (View in TEA pattern)


use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::{Frame, Terminal};
use recipe_app::state::AppState;
use recipe_core::prelude::*;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for widget state that tracks rendering info (content and
/// viewport height of the scroll state).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::BACKGROUND));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let body = areas.body;
    let icons = IconSet::new(state.settings.ui.icons);

    // Content first: its measured height bounds the scroll range, which the
    // header frame is derived from.
    let content = widgets::RecipeContent::new(&state.recipe, &icons)
        .top_padding(state.parallax.expanded_height)
        .columns(state.settings.layout.grid_columns)
        .servings(state.servings.value());
    let content_height = content.height(body.width);
    state.scroll.update_content_size(content_height, body.height);

    let content_buf = render_offscreen(content, body.width, content_height);
    blit(&content_buf, state.scroll.offset, frame.buffer_mut(), body);

    // Header over the content, translated up by the clamped offset
    let header_frame = state.header_frame();
    let header = widgets::ParallaxHeader::new(&state.recipe, &state.parallax, header_frame);
    let header_buf = render_offscreen(header, body.width, state.parallax.expanded_height);
    let visible = state.parallax.visible_height(&header_frame).min(body.height);
    blit(
        &header_buf,
        header_frame.clamped_offset,
        frame.buffer_mut(),
        Rect::new(body.x, body.y, body.width, visible),
    );

    if header_frame.header_elevation > 0 && visible < body.height {
        let depth = header_frame.header_elevation.min(body.height - visible);
        frame.render_widget(
            widgets::HeaderShadow,
            Rect::new(body.x, body.y + visible, body.width, depth),
        );
    }

    let bar = layout::top_bar(body, state.status_inset(), state.parallax.collapsed_height);
    frame.render_widget(widgets::TopBar::new(icons, state.favorite), bar);

    frame.render_widget(widgets::KeyHints, areas.footer);
}

/// Render a widget into a fresh buffer of the given size
fn render_offscreen<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

/// Copy rows `[src_y, src_y + dst.height)` of `src` into `dst` of `target`.
///
/// Rows past the end of `src` are left untouched.
fn blit(src: &Buffer, src_y: u16, target: &mut Buffer, dst: Rect) {
    for row in 0..dst.height {
        let Some(sy) = src_y.checked_add(row) else {
            break;
        };
        if sy >= src.area.bottom() {
            break;
        }
        for col in 0..dst.width.min(src.area.width) {
            if let (Some(cell), Some(out)) = (
                src.cell((src.area.x + col, sy)),
                target.cell_mut((dst.x + col, dst.y + row)),
            ) {
                *out = cell.clone();
            }
        }
    }
}

/// Render one frame of the full screen into an in-memory backend and
/// return it as text, one line per row.
pub fn render_to_string(state: &mut AppState, width: u16, height: u16) -> Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal =
        Terminal::new(backend).map_err(|e| Error::terminal(format!("test backend: {e}")))?;
    terminal
        .draw(|frame| view(frame, state))
        .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// Convert buffer to string representation
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        let line: String = (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}
