//! Randomness for the dungeon.
//!
//! Every draw in a run (encounter checks, spawn selection, HP and damage rolls, heals,
//! flee attempts, rewards) goes through one [`RandomSource`] owned by the session, so a
//! seed or a script fully determines a game.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of every random draw the game makes.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Next integer in `[min, max]`, both ends inclusive.
    fn roll(&mut self, min: i32, max: i32) -> i32;

    /// True when a fresh uniform draw lands below `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }
}

/// Seeded production generator.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a fresh seed from the thread generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen::<u64>())
    }

    /// Seed this generator was built from; logged so a run can be replayed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn roll(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.rng.gen_range(lo..=hi)
    }
}

/// Replays queued draws so tests can force exact scenarios.
///
/// Uniform draws and integer rolls come from separate queues. A scripted roll outside
/// the requested range is clamped into it. Once a queue runs dry, draws fall through to
/// a seeded [`GameRng`].
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    uniforms: VecDeque<f64>,
    rolls: VecDeque<i32>,
    fallback: GameRng,
}

impl ScriptedRng {
    pub fn new(uniforms: &[f64], rolls: &[i32]) -> Self {
        Self {
            uniforms: uniforms.iter().copied().collect(),
            rolls: rolls.iter().copied().collect(),
            fallback: GameRng::new(0),
        }
    }

    pub fn push_uniform(&mut self, value: f64) -> &mut Self {
        self.uniforms.push_back(value);
        self
    }

    pub fn push_roll(&mut self, value: i32) -> &mut Self {
        self.rolls.push_back(value);
        self
    }

    /// Scripted draws not yet consumed, as (uniforms, rolls).
    pub fn remaining(&self) -> (usize, usize) {
        (self.uniforms.len(), self.rolls.len())
    }
}

impl RandomSource for ScriptedRng {
    fn uniform(&mut self) -> f64 {
        match self.uniforms.pop_front() {
            Some(v) => v,
            None => self.fallback.uniform(),
        }
    }

    fn roll(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        match self.rolls.pop_front() {
            Some(v) => v.clamp(lo, hi),
            None => self.fallback.roll(lo, hi),
        }
    }
}
