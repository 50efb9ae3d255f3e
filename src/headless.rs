//! Headless mode - JSON trace of the header animation
//!
//! Walks the scroll offset from 0 through the whole collapse range and
//! writes one event per offset to stdout as NDJSON, so scripts can check
//! the parallax curve without parsing ANSI output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","title":"Strawberry Cake","max_offset":13,"status_inset":0,"timestamp":1704700001000}
//! {"event":"frame","offset":0,"max_offset":13,"clamped_offset":0,"header_y_translation":0,"fade_progress":0.0,"image_alpha":1.0,"title_horizontal_inset":2.0,"title_scale":1.0,"header_elevation":0,"timestamp":1704700001000}
//! {"event":"done","frames":14,"timestamp":1704700001001}
//! ```

use std::io::{self, Write};

use chrono::Utc;
use recipe_app::config::Settings;
use recipe_app::state::AppState;
use recipe_core::prelude::*;
use recipe_core::{strawberry_cake, HeaderFrame};
use serde::Serialize;

use crate::app::StartupOptions;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Settings loaded, trace about to start
    Ready {
        title: String,
        max_offset: u16,
        status_inset: u16,
        timestamp: i64,
    },

    /// Header parameters at one scroll offset
    Frame {
        offset: u16,
        #[serde(flatten)]
        frame: HeaderFrame,
        timestamp: i64,
    },

    /// Trace finished
    Done { frames: usize, timestamp: i64 },
}

impl HeadlessEvent {
    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(title: impl Into<String>, max_offset: u16, status_inset: u16) -> Self {
        Self::Ready {
            title: title.into(),
            max_offset,
            status_inset,
            timestamp: Self::now(),
        }
    }

    pub fn frame(offset: u16, frame: HeaderFrame) -> Self {
        Self::Frame {
            offset,
            frame,
            timestamp: Self::now(),
        }
    }

    pub fn done(frames: usize) -> Self {
        Self::Done {
            frames,
            timestamp: Self::now(),
        }
    }

    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}

/// Events for the full collapse range, in emission order
pub fn trace(settings: Settings) -> Vec<HeadlessEvent> {
    let state = AppState::with_settings(strawberry_cake(), settings);
    let max_offset = state.header_max_offset();

    let mut events = vec![HeadlessEvent::ready(
        state.recipe.title.as_str(),
        max_offset,
        state.status_inset(),
    )];
    events.extend((0..=max_offset).map(|offset| {
        HeadlessEvent::frame(
            offset,
            state.parallax.frame(i32::from(offset), max_offset),
        )
    }));
    events.push(HeadlessEvent::done(usize::from(max_offset) + 1));
    events
}

/// Run headless mode, writing the trace to stdout
pub fn run_headless(options: &StartupOptions) -> Result<()> {
    recipe_core::logging::init()?;

    let settings = options.settings()?;
    info!("Headless trace (inset {})", settings.layout.status_inset);

    let mut stdout = io::stdout().lock();
    for event in trace(settings) {
        if let Err(e) = event.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
            return Err(e);
        }
    }
    stdout.flush()?;
    Ok(())
}
