//! Exploration: grid movement, fog reveal and the per-step encounter check.

use super::combat::{resolve_encounter, CombatOutcome};
use super::console::Console;
use super::errors::GameError;
use super::rng::RandomSource;
use super::session::GameSession;
use super::state::Position;
use super::ENCOUNTER_CHANCE;

pub const BLOCKED_TEXT: &str = "A wall blocks your way.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// `n`/`s`/`e`/`w`, case-insensitive, surrounding whitespace ignored.
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "n" => Some(Direction::North),
            "s" => Some(Direction::South),
            "e" => Some(Direction::East),
            "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Grid offset; y grows southward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Clamped into the wall; nothing changed.
    Blocked,
    Moved { encounter: Option<CombatOutcome> },
}

fn clamp_axis(v: usize, d: i32, dim: usize) -> usize {
    let max = dim.saturating_sub(1) as i64;
    (v as i64 + d as i64).clamp(0, max) as usize
}

impl<R: RandomSource> GameSession<R> {
    /// Step one cell, reveal it, and maybe fight whatever lurks there.
    ///
    /// Combat runs to completion before this returns. A `PlayerDied` outcome is handed
    /// back to the caller, which owns ending the run.
    pub fn attempt_move<C: Console + ?Sized>(
        &mut self,
        dir: Direction,
        console: &mut C,
    ) -> Result<MoveOutcome, GameError> {
        let (dx, dy) = dir.delta();
        let from = self.player.pos;
        let to = Position::new(
            clamp_axis(from.x, dx, self.grid.w),
            clamp_axis(from.y, dy, self.grid.h),
        );
        if to == from {
            self.stats.blocked += 1;
            console.say(BLOCKED_TEXT)?;
            return Ok(MoveOutcome::Blocked);
        }

        self.player.pos = to;
        self.stats.moves += 1;
        self.grid.reveal(to);
        console.say(&format!("You move to ({},{}).", to.x, to.y))?;

        if to == self.exit || !self.rng.chance(ENCOUNTER_CHANCE) {
            return Ok(MoveOutcome::Moved { encounter: None });
        }

        let enemy = self.table.spawn_enemy(&mut self.rng);
        self.stats.encounters += 1;
        log::debug!("encounter #{} at ({},{}): {}", self.stats.encounters, to.x, to.y, enemy.name);
        let report = resolve_encounter(&mut self.player, enemy, console, &mut self.rng)?;
        match report.outcome {
            CombatOutcome::EnemyDefeated { rewarded } => {
                self.stats.victories += 1;
                if rewarded {
                    console.say(&format!(
                        "(You have survived encounters {} times so far.)",
                        self.stats.survived()
                    ))?;
                }
            }
            CombatOutcome::PlayerEscaped => self.stats.escapes += 1,
            CombatOutcome::PlayerDied => {}
        }
        Ok(MoveOutcome::Moved {
            encounter: Some(report.outcome),
        })
    }
}
