//! Content scroll state - the single scroll position the screen owns.
//!
//! The handler layer moves the offset; the TUI layer reports the content and
//! viewport heights during render so the offset stays within range.

/// Vertical scroll position of the content area, in rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled past the top of the content
    pub offset: u16,
    /// Total content height including the header padding (set during render)
    pub content_height: u16,
    /// Visible rows of the content area (set during render)
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Scroll up by n rows
    pub fn scroll_up(&mut self, n: u16) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n rows
    pub fn scroll_down(&mut self, n: u16) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    /// Scroll by a signed number of rows
    pub fn scroll_by(&mut self, delta: i32) {
        let rows = u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX);
        if delta < 0 {
            self.scroll_up(rows);
        } else {
            self.scroll_down(rows);
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, content: u16, viewport: u16) {
        self.content_height = content;
        self.viewport_height = viewport;
        self.offset = self.offset.min(self.max_offset());
    }
}
