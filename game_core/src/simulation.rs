//! Single-player game state and the per-frame sequence.

use hecs::{Entity, World};

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::host::{Sound, Surface};
use crate::map::GameMap;
use crate::render::{draw_entities, draw_scores, play_bounces};
use crate::resources::{CoinFlip, Events, KeyState, Score, Time};
use crate::{create_ball, create_paddle, serve_ball, step};

/// Everything a running match owns. The frame loop is its only mutator.
pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    player: Entity,
    cpu: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(map: GameMap) -> Self {
        Self::with_config(map, Config::new())
    }

    pub fn with_config(map: GameMap, config: Config) -> Self {
        let mut world = World::new();

        let player = create_paddle(&mut world, Side::Player, &map, &config);
        let cpu = create_paddle(&mut world, Side::Cpu, &map, &config);
        let ball = create_ball(&mut world, serve_ball(&map, &config));

        Self {
            world,
            time: Time::new(),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            player,
            cpu,
            ball,
        }
    }

    /// Advance one tick without drawing
    pub fn tick(&mut self, keys: &KeyState, coin: &mut dyn CoinFlip) {
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            keys,
            &mut self.score,
            &mut self.events,
            coin,
        );
    }

    /// One full frame: clear, scores, tick, entities, then one tap per bounce.
    ///
    /// Scores are drawn before the tick, so a point shows up on the next frame.
    pub fn frame(
        &mut self,
        keys: &KeyState,
        coin: &mut dyn CoinFlip,
        surface: &mut dyn Surface,
        sound: &mut dyn Sound,
    ) {
        surface.clear(self.map.width, self.map.height);
        draw_scores(&self.score, &self.map, self.config.color, surface);

        self.tick(keys, coin);

        play_bounces(&self.events, sound);
        draw_entities(&self.world, surface);
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Overwrite the ball state
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    /// Move a paddle to `y`, clamped like any other move
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Player => self.player,
            Side::Cpu => self.cpu,
        };
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.pos.y = self.map.clamp_paddle_y(y, paddle.size.y);
        }
    }
}
