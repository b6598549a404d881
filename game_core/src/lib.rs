pub mod components;
pub mod config;
pub mod host;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use host::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one tick
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    keys: &KeyState,
    score: &mut Score,
    events: &mut Events,
    coin: &mut dyn CoinFlip,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Player paddle from held keys
    apply_player_input(world, keys, map);

    // 2. CPU paddle follows the ball
    track_ball(world, map, config);

    // 3. Move ball
    move_ball(world);

    // 4. Walls, then player paddle, then CPU paddle
    check_collisions(world, map, events);

    // 5. Ball left the court
    check_scoring(world, map, config, score, events, coin);

    time.tick += 1;
}

/// Helper to create a paddle entity at its startup position
pub fn create_paddle(
    world: &mut World,
    side: Side,
    map: &GameMap,
    config: &Config,
) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        map.paddle_spawn(side, config),
        glam::Vec2::new(config.paddle_width, config.paddle_height),
        config.paddle_speed,
        config.color,
    );
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// The ball as it is served at startup: centered, moving down and to the right
pub fn serve_ball(map: &GameMap, config: &Config) -> Ball {
    let size = glam::Vec2::splat(config.ball_size);
    Ball::new(
        map.centered(size),
        size,
        glam::Vec2::splat(config.ball_speed),
        config.color,
    )
}
