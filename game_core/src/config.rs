use crate::components::Color;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub cpu_speed_divisor: f32,
    pub color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            cpu_speed_divisor: Params::CPU_SPEED_DIVISOR,
            color: Color::WHITE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-tick step of the CPU paddle for a paddle moving at `speed`
    pub fn cpu_step(&self, speed: f32) -> f32 {
        speed / self.cpu_speed_divisor
    }
}
