use hecs::World;

use crate::components::{Ball, Color, Paddle, Side};
use crate::host::{Sound, Surface};
use crate::map::GameMap;
use crate::params::Params;
use crate::resources::{Events, Score};

/// Draw both score labels at their fixed offsets
pub fn draw_scores(score: &Score, map: &GameMap, color: Color, surface: &mut dyn Surface) {
    surface.fill_text(
        &score.player_label(),
        Params::PLAYER_SCORE_X,
        Params::SCORE_BASELINE,
        Params::SCORE_FONT,
        color,
    );
    surface.fill_text(
        &score.cpu_label(),
        map.width - Params::CPU_SCORE_INSET,
        Params::SCORE_BASELINE,
        Params::SCORE_FONT,
        color,
    );
}

pub fn draw_paddle(paddle: &Paddle, surface: &mut dyn Surface) {
    surface.fill_rect(
        paddle.pos.x,
        paddle.pos.y,
        paddle.size.x,
        paddle.size.y,
        paddle.color,
    );
}

pub fn draw_ball(ball: &Ball, surface: &mut dyn Surface) {
    surface.fill_rect(ball.pos.x, ball.pos.y, ball.size.x, ball.size.y, ball.color);
}

/// Draw player paddle, CPU paddle, then ball
pub fn draw_entities(world: &World, surface: &mut dyn Surface) {
    for side in [Side::Player, Side::Cpu] {
        for (_entity, paddle) in world.query::<&Paddle>().iter() {
            if paddle.side == side {
                draw_paddle(paddle, surface);
            }
        }
    }
    for (_entity, ball) in world.query::<&Ball>().iter() {
        draw_ball(ball, surface);
    }
}

/// One tap per bounce recorded this tick
pub fn play_bounces(events: &Events, sound: &mut dyn Sound) {
    for _ in 0..events.bounces() {
        sound.play_tap();
    }
}
