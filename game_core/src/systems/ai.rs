use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::map::GameMap;

/// Vertical move for the CPU paddle: chase the ball's center at a fixed step,
/// hold still when the centers line up. No prediction.
pub fn cpu_delta(ball_center_y: f32, paddle_center_y: f32, step: f32) -> f32 {
    if ball_center_y < paddle_center_y {
        -step
    } else if ball_center_y > paddle_center_y {
        step
    } else {
        0.0
    }
}

/// Apply the reactive rule to the CPU paddle
pub fn track_ball(world: &mut World, map: &GameMap, config: &Config) {
    let ball_center_y = match world.query::<&Ball>().iter().next() {
        Some((_entity, ball)) => ball.center_y(),
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Cpu {
            continue;
        }
        let delta = cpu_delta(
            ball_center_y,
            paddle.center_y(),
            config.cpu_step(paddle.speed),
        );
        if delta != 0.0 {
            paddle.move_by(delta, map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Color};
    use glam::Vec2;

    fn setup(ball_y: f32) -> (World, GameMap, Config, hecs::Entity) {
        let mut world = World::new();
        let map = GameMap::new(800.0, 600.0);
        let config = Config::new();
        let cpu = create_paddle(&mut world, Side::Cpu, &map, &config);
        create_ball(
            &mut world,
            Ball::new(
                Vec2::new(400.0, ball_y),
                Vec2::splat(20.0),
                Vec2::new(5.0, 5.0),
                Color::WHITE,
            ),
        );
        (world, map, config, cpu)
    }

    fn cpu_y(world: &World, cpu: hecs::Entity) -> f32 {
        world.get::<&Paddle>(cpu).unwrap().pos.y
    }

    #[test]
    fn test_cpu_delta_directions() {
        assert_eq!(cpu_delta(10.0, 20.0, 4.0), -4.0);
        assert_eq!(cpu_delta(30.0, 20.0, 4.0), 4.0);
        assert_eq!(cpu_delta(20.0, 20.0, 4.0), 0.0);
    }

    #[test]
    fn test_cpu_moves_up_toward_ball() {
        let (mut world, map, config, cpu) = setup(50.0);
        track_ball(&mut world, &map, &config);
        let expected = 250.0 - 10.0 / 1.5;
        assert!((cpu_y(&world, cpu) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_cpu_moves_down_toward_ball() {
        let (mut world, map, config, cpu) = setup(500.0);
        track_ball(&mut world, &map, &config);
        let expected = 250.0 + 10.0 / 1.5;
        assert!((cpu_y(&world, cpu) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_cpu_holds_when_centers_match() {
        // Paddle center is 300, ball center is 290 + 10
        let (mut world, map, config, cpu) = setup(290.0);
        track_ball(&mut world, &map, &config);
        assert_eq!(cpu_y(&world, cpu), 250.0);
    }

    #[test]
    fn test_cpu_is_clamped() {
        let (mut world, map, config, cpu) = setup(-400.0);
        for _ in 0..200 {
            track_ball(&mut world, &map, &config);
        }
        assert_eq!(cpu_y(&world, cpu), 0.0);
    }

    #[test]
    fn test_no_ball_no_movement() {
        let mut world = World::new();
        let map = GameMap::new(800.0, 600.0);
        let config = Config::new();
        let cpu = create_paddle(&mut world, Side::Cpu, &map, &config);

        track_ball(&mut world, &map, &config);

        assert_eq!(cpu_y(&world, cpu), 250.0);
    }
}
