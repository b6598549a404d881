use glam::Vec2;

use crate::map::{Aabb, GameMap};
use crate::resources::CoinFlip;

/// Fill color for entities and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `#ffffff`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human-controlled, left edge
    Player,
    /// Reactive CPU, right edge
    Cpu,
}

/// Paddle component. `pos` is the top-left corner; only `pos.y` changes after spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32, color: Color) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
            color,
        }
    }

    /// Move vertically by `delta` and clamp into the surface.
    pub fn move_by(&mut self, delta: f32, map: &GameMap) {
        self.pos.y = map.clamp_paddle_y(self.pos.y + delta, self.size.y);
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            size,
            vel,
            color,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Flip `vel.y` when touching or past the top or bottom edge.
    /// Position is left as is, so the ball may overlap a wall for one tick.
    pub fn bounce_off_walls(&mut self, map: &GameMap) -> bool {
        if self.pos.y <= 0.0 || self.pos.y + self.size.y >= map.height {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Bounce off the left paddle's right face, leaving the ball flush with it.
    pub fn bounce_off_left(&mut self, paddle: &Paddle) -> bool {
        let face = paddle.pos.x + paddle.size.x;
        if self.pos.x <= face && self.aabb().overlaps_vertically(&paddle.aabb()) {
            self.vel.x = -self.vel.x;
            self.pos.x = face;
            true
        } else {
            false
        }
    }

    /// Bounce off the right paddle's left face, leaving the ball flush with it.
    pub fn bounce_off_right(&mut self, paddle: &Paddle) -> bool {
        let face = paddle.pos.x;
        if self.pos.x + self.size.x >= face && self.aabb().overlaps_vertically(&paddle.aabb()) {
            self.vel.x = -self.vel.x;
            self.pos.x = face - self.size.x;
            true
        } else {
            false
        }
    }

    /// Recenter on the surface and pick a new direction per axis with
    /// independent coin flips (x first, then y). Speed per axis is `speed`.
    pub fn reset(&mut self, map: &GameMap, speed: f32, coin: &mut dyn CoinFlip) {
        self.pos = map.centered(self.size);
        let sign_x = if coin.flip() { 1.0 } else { -1.0 };
        let sign_y = if coin.flip() { 1.0 } else { -1.0 };
        self.vel = Vec2::new(speed * sign_x, speed * sign_y);
    }
}
