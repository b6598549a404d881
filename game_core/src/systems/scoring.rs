use crate::{Ball, CoinFlip, Config, Events, GameMap, Score};
use hecs::World;
use log::info;

/// Check if ball left the court (scoring).
///
/// Both edges are checked every tick; a ball past the left edge is a CPU point,
/// past the right edge a player point. Each point resets the ball.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    coin: &mut dyn CoinFlip,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_cpu();
            events.cpu_scored = true;
            ball.reset(map, config.ball_speed, coin);
            info!("cpu scores: player {} - cpu {}", score.player, score.cpu);
        }

        if ball.pos.x + ball.size.x > map.width {
            score.increment_player();
            events.player_scored = true;
            ball.reset(map, config.ball_speed, coin);
            info!("player scores: player {} - cpu {}", score.player, score.cpu);
        }
    }
}
