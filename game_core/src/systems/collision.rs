use crate::{Ball, Events, GameMap, Paddle, Side};
use hecs::World;
use log::debug;

/// Check ball collisions with walls and paddles.
///
/// Runs walls, then the player paddle, then the CPU paddle, every tick with no
/// early exit; each hit is recorded in `events`.
pub fn check_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let mut player = None;
    let mut cpu = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => player = Some(*paddle),
            Side::Cpu => cpu = Some(*paddle),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.bounce_off_walls(map) {
            events.wall_bounces += 1;
            debug!("ball hit wall at y={}", ball.pos.y);
        }

        if let Some(paddle) = &player {
            if ball.bounce_off_left(paddle) {
                events.paddle_bounces += 1;
                debug!("ball hit player paddle at y={}", ball.pos.y);
            }
        }

        if let Some(paddle) = &cpu {
            if ball.bounce_off_right(paddle) {
                events.paddle_bounces += 1;
                debug!("ball hit cpu paddle at y={}", ball.pos.y);
            }
        }
    }
}
