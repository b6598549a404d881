/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 10.0; // units per tick
    pub const PADDLE_INSET: f32 = 20.0; // gap between a paddle and its side of the surface

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 5.0; // per axis, per tick

    // CPU paddle moves at paddle speed divided by this
    pub const CPU_SPEED_DIVISOR: f32 = 1.5;

    // Score labels
    pub const SCORE_FONT: &'static str = "24px Arial";
    pub const SCORE_BASELINE: f32 = 30.0;
    pub const PLAYER_SCORE_X: f32 = 40.0;
    pub const CPU_SCORE_INSET: f32 = 120.0; // measured from the right edge

    // Surface used when no host viewport is available
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}
