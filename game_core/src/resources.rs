use std::collections::HashMap;

/// Key identifier that moves the player paddle up
pub const KEY_UP: &str = "ArrowUp";
/// Key identifier that moves the player paddle down
pub const KEY_DOWN: &str = "ArrowDown";

/// Tick counter. Physics runs in fixed per-tick units, so there is no dt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64, // Completed ticks
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub cpu: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_cpu(&mut self) {
        self.cpu += 1;
    }

    pub fn player_label(&self) -> String {
        format!("Player: {}", self.player)
    }

    pub fn cpu_label(&self) -> String {
        format!("CPU: {}", self.cpu)
    }
}

/// Source of fair coin flips for serve direction
pub trait CoinFlip {
    /// `true` means the positive direction
    fn flip(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl CoinFlip for GameRng {
    fn flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of outcomes, cycling when exhausted.
/// An empty sequence always yields `true`.
#[derive(Debug, Clone, Default)]
pub struct SequenceCoin {
    outcomes: Vec<bool>,
    next: usize,
}

impl SequenceCoin {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes, next: 0 }
    }

    /// Number of flips taken so far
    pub fn flips(&self) -> usize {
        self.next
    }
}

impl CoinFlip for SequenceCoin {
    fn flip(&mut self) -> bool {
        if self.outcomes.is_empty() {
            self.next += 1;
            return true;
        }
        let outcome = self.outcomes[self.next % self.outcomes.len()];
        self.next += 1;
        outcome
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounces: u8,
    pub paddle_bounces: u8,
    pub player_scored: bool,
    pub cpu_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Every bounce plays one tap sound
    pub fn bounces(&self) -> u8 {
        self.wall_bounces + self.paddle_bounces
    }
}

/// Keys currently held down, keyed by `KeyboardEvent.key` identifier.
/// Written by host key events between ticks, read once per tick.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    keys: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_string(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.keys.insert(key.to_string(), false);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }
}
