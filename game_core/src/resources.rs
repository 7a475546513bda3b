use glam::Vec2;

use crate::params::Params;

/// Seeded random number generator for deterministic runs
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range(&mut self, lo: f32, hi: f32) -> f32 {
        use rand::Rng;
        self.0.gen_range(lo..hi)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Scoreboard and session timer state
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub score: u32,
    pub high_score: u32,
    pub elapsed: f32,
    pub game_time: f32,
    pub bonus_time: f32,
}

impl Session {
    pub fn new(game_time: f32, bonus_time: f32) -> Self {
        Self {
            score: 0,
            high_score: 0,
            elapsed: 0.0,
            game_time,
            bonus_time,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).max(0.0);
    }

    pub fn remaining(&self) -> f32 {
        (self.game_time - self.elapsed).max(0.0)
    }

    pub fn expired(&self) -> bool {
        self.elapsed >= self.game_time
    }

    /// Hits in the closing stretch of a session score a bonus tier
    pub fn in_bonus_window(&self) -> bool {
        self.game_time - self.elapsed < self.bonus_time
    }

    /// Add points; the high score never decreases
    pub fn award(&mut self, points: u32) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Start a fresh session, keeping the high score
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.score = 0;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Params::GAME_TIME, Params::BONUS_TIME)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_launched: bool,
    pub ball_hit_wall: bool,
    pub target_spawned: bool,
    pub target_hit: Option<u32>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_launched = false;
        self.ball_hit_wall = false;
        self.target_spawned = false;
        self.target_hit = None;
    }
}

/// Pointer state shared between the input edge handlers and the stepper.
///
/// The position and button flag are mutated only by the event handlers,
/// between frames; each step reads a consistent snapshot and the sliding
/// sample window is pushed once per discrete step by the simulation itself.
#[derive(Debug, Clone)]
pub struct PointerState {
    pub pos: Vec2,
    pub down: bool,
    history: [Vec2; Params::POINTER_WINDOW],
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            down: false,
            history: [Vec2::ZERO; Params::POINTER_WINDOW],
        }
    }

    /// Update the pointer position; non-finite coordinates are ignored
    pub fn set_position(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pos = Vec2::new(x, y);
        }
    }

    /// Push the current position into the sliding window, dropping the oldest
    pub fn record_sample(&mut self) {
        self.history.rotate_left(1);
        self.history[Params::POINTER_WINDOW - 1] = self.pos;
    }

    pub fn oldest_sample(&self) -> Vec2 {
        self.history[0]
    }

    /// Finite-difference velocity estimate over the sample window.
    /// Degenerate inputs produce zero, never NaN.
    pub fn velocity_estimate(&self, dt: f32) -> Vec2 {
        if dt == 0.0 {
            return Vec2::ZERO;
        }
        let v = (self.pos - self.oldest_sample()) / (Params::POINTER_VEL_SCALE * dt);
        Vec2::new(
            if v.x.is_finite() { v.x } else { 0.0 },
            if v.y.is_finite() { v.y } else { 0.0 },
        )
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
