use glam::Vec2;

use crate::components::Side;
use crate::config::Config;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Inclusive overlap of the vertical extents; touching edges count.
    pub fn overlaps_vertically(&self, other: &Aabb) -> bool {
        self.max.y >= other.min.y && self.min.y <= other.max.y
    }
}

/// The drawing surface the game is played on. Sized once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(Params::DEFAULT_WIDTH, Params::DEFAULT_HEIGHT)
    }
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top-left corner that centers a box of `size` on the surface
    pub fn centered(&self, size: Vec2) -> Vec2 {
        self.center() - size / 2.0
    }

    /// Top-left corner of a paddle at startup
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        let x = match side {
            Side::Player => config.paddle_inset,
            Side::Cpu => self.width - config.paddle_inset - config.paddle_width,
        };
        let y = self.height / 2.0 - config.paddle_height / 2.0;
        Vec2::new(x, y)
    }

    /// Clamp a paddle's top edge to `[0, height - paddle_height]`.
    /// A paddle taller than the surface pins to 0.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.min(self.height - paddle_height).max(0.0)
    }
}
