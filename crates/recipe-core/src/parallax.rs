//! Parallax collapsing header math
//!
//! The header is `expanded_height` rows tall at rest. As the content scrolls
//! the header slides up by the scroll offset until only `collapsed_height`
//! rows (plus any status inset) remain, then it pins to the top. The image
//! stays fully visible for the first two thirds of that range and fades out
//! over the last third.
//!
//! Everything here is a pure function of the scroll offset; the view calls
//! [`ParallaxSpec::frame`] on every draw.

use serde::Serialize;

/// Header sizing and collapse tuning, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParallaxSpec {
    /// Header height when the content is at rest
    pub expanded_height: u16,
    /// Header height once fully collapsed (title row)
    pub collapsed_height: u16,
    /// Title indent at rest
    pub title_base_inset: u16,
    /// Extra title indent reached when fully collapsed
    pub title_extra_inset: u16,
    /// Fraction the title shrinks by when fully collapsed
    pub title_scale_factor: f32,
    /// Shadow depth drawn once fully collapsed
    pub collapsed_elevation: u16,
}

impl Default for ParallaxSpec {
    fn default() -> Self {
        Self {
            expanded_height: 16,
            collapsed_height: 3,
            title_base_inset: 2,
            title_extra_inset: 6,
            title_scale_factor: 0.25,
            collapsed_elevation: 1,
        }
    }
}

/// Header render parameters for one scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderFrame {
    /// Upper bound of the collapse range
    pub max_offset: u16,
    /// Scroll offset clamped to `[0, max_offset]`
    pub clamped_offset: u16,
    /// Vertical translation of the header (never positive)
    pub header_y_translation: i32,
    /// Late-ramping collapse progress in `[0, 1]`
    pub fade_progress: f32,
    /// Opacity of the background image and category chip
    pub image_alpha: f32,
    /// Horizontal indent of the title
    pub title_horizontal_inset: f32,
    /// Title scale relative to its resting size
    pub title_scale: f32,
    /// Shadow depth under the header
    pub header_elevation: u16,
}

impl ParallaxSpec {
    /// Height of the image region above the title row
    pub fn image_height(&self) -> u16 {
        self.expanded_height.saturating_sub(self.collapsed_height)
    }

    /// Collapse range left after reserving `status_inset` rows at the top.
    ///
    /// Clamped to 0 when the inset is taller than the image region.
    pub fn max_offset(&self, status_inset: u16) -> u16 {
        self.image_height().saturating_sub(status_inset)
    }

    /// Derive the header parameters for `scroll_offset`.
    ///
    /// Negative offsets (overscroll) are treated as 0.
    pub fn frame(&self, scroll_offset: i32, max_offset: u16) -> HeaderFrame {
        let offset = scroll_offset.max(0);
        let clamped_offset = offset.min(i32::from(max_offset)) as u16;
        let fade_progress = fade_progress(clamped_offset, max_offset);

        HeaderFrame {
            max_offset,
            clamped_offset,
            header_y_translation: -i32::from(clamped_offset),
            fade_progress,
            image_alpha: 1.0 - fade_progress,
            title_horizontal_inset: f32::from(self.title_base_inset)
                + f32::from(self.title_extra_inset) * fade_progress,
            title_scale: 1.0 - self.title_scale_factor * fade_progress,
            header_elevation: if clamped_offset == max_offset {
                self.collapsed_elevation
            } else {
                0
            },
        }
    }

    /// Rows of the header still on screen for `frame`
    pub fn visible_height(&self, frame: &HeaderFrame) -> u16 {
        self.expanded_height.saturating_sub(frame.clamped_offset)
    }
}

/// `clamp((offset * 3 - 2 * max) / max, 0, 1)`, or 1 when there is no range
fn fade_progress(clamped_offset: u16, max_offset: u16) -> f32 {
    if max_offset == 0 {
        return 1.0;
    }
    let raw = i32::from(clamped_offset) * 3 - 2 * i32::from(max_offset);
    (raw as f32 / f32::from(max_offset)).clamp(0.0, 1.0)
}

impl HeaderFrame {
    /// True once the header has pinned at its collapsed height
    pub fn is_collapsed(&self) -> bool {
        self.clamped_offset == self.max_offset
    }

    /// Title indent rounded to whole columns
    pub fn title_inset_cols(&self) -> u16 {
        self.title_horizontal_inset.round().max(0.0) as u16
    }
}
