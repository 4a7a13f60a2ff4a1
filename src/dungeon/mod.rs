//! # Dungeon: exploration and combat
//!
//! A 5x5 fogged grid, a six-entry enemy table and a turn-based fight loop.
//!
//! ## Components
//!
//! - [`catalog`] - enemy archetypes and the validated spawn table
//! - [`combat`] - the encounter state machine and its prompt loop
//! - [`explore`] - movement, fog reveal and encounter checks
//! - [`session`] - the run context object and top-level command loop
//! - [`rng`] - the injectable random source
//! - [`console`] - line I/O the game talks through
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────────┐
//! │  GameSession    │ ← command loop, win check, run stats
//! └─────────────────┘
//!          │ attempt_move
//! ┌─────────────────┐
//! │  Exploration    │ ← clamp, reveal, 35% encounter roll
//! └─────────────────┘
//!          │ spawn_enemy + resolve_encounter
//! ┌─────────────────┐
//! │  Combat         │ ← Ongoing → Defeated | Escaped | Died
//! └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crawler::dungeon::{GameRng, GameSession, TextConsole};
//!
//! fn main() -> anyhow::Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut console = TextConsole::new(stdin.lock(), std::io::stdout());
//!     let mut session = GameSession::new(GameRng::new(42))?;
//!     let summary = session.run(&mut console)?;
//!     println!("{:?}", summary.ending);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod combat;
pub mod commands;
pub mod console;
pub mod errors;
pub mod explore;
pub mod render;
pub mod rng;
pub mod session;
pub mod state;

pub use catalog::{EnemyArchetype, EnemyInstance, SpawnTable, StatRange};
pub use combat::{CombatAction, CombatOutcome, CombatState, Encounter};
pub use console::{Console, TextConsole};
pub use errors::{CatalogError, GameError};
pub use explore::{Direction, MoveOutcome};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use session::{Ending, GameSession, RunStats, RunSummary};

pub const WIDTH: usize = 5;
pub const HEIGHT: usize = 5;
/// Chance per step (off the exit cell) of an encounter.
pub const ENCOUNTER_CHANCE: f64 = 0.35;
pub const START_HP: i32 = 20;
pub const PLAYER_DAMAGE: StatRange = StatRange::new(2, 5);
pub const HEAL_RANGE: StatRange = StatRange::new(1, 3);
pub const FLEE_CHANCE: f64 = 0.5;
/// Chance of a +1 HP bandage after a win.
pub const REWARD_CHANCE: f64 = 0.4;
