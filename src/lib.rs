//! # Crawler - a tiny text dungeon
//!
//! Crawler is a line-oriented dungeon crawl: walk a 5x5 fogged grid from the top-left
//! corner to the exit in the bottom-right, and survive the random encounters on the way.
//!
//! ## Features
//!
//! - **Fog of War**: cells are revealed as you walk; `map` shows what you have seen.
//! - **Weighted Spawns**: six enemies from a humble Rat to a rare Dragon, picked from a
//!   validated cumulative-probability table.
//! - **Turn-Based Combat**: attack, heal or try to run; a clean escape skips the enemy's
//!   counter-strike.
//! - **Deterministic Runs**: all randomness flows through one injectable source, so a seed
//!   replays a whole game.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crawler::dungeon::{GameRng, GameSession, TextConsole};
//!
//! fn main() -> anyhow::Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut console = TextConsole::new(stdin.lock(), std::io::stdout());
//!     let mut session = GameSession::new(GameRng::from_entropy())?;
//!     session.run(&mut console)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`dungeon`] - spawner, combat resolver, exploration and the session loop
//! - [`config`] - TOML configuration for logging and seeding

pub mod config;
pub mod dungeon;
