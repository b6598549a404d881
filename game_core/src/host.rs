//! Seams to the host environment.
//!
//! The simulation never talks to a canvas or an audio device directly; the
//! browser client implements these traits and tests use recording doubles.

use crate::components::Color;

/// Abstract drawing surface
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);
}

/// Abstract sound output. Fire-and-forget: overlapping plays are up to the host.
pub trait Sound {
    fn play_tap(&mut self);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
        color: Color,
    },
}

/// Surface that records every call, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
        });
    }
}

/// Sound that only counts taps
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSound {
    pub taps: u32,
}

impl Sound for CountingSound {
    fn play_tap(&mut self) {
        self.taps += 1;
    }
}
