//! The run context and the top-level command loop.
//!
//! [`GameSession`] owns everything a run mutates: the player, the fog grid, the spawn
//! table, the random source and the run statistics. It is created once and driven by
//! [`GameSession::run`], which returns an [`Ending`] instead of exiting the process.

use super::catalog::SpawnTable;
use super::combat::CombatOutcome;
use super::commands::Command;
use super::console::Console;
use super::errors::GameError;
use super::explore::MoveOutcome;
use super::render::{render_map, stats_line, BANNER, HELP_LINE};
use super::rng::{GameRng, RandomSource};
use super::state::{FogGrid, PlayerState, Position};
use super::{HEIGHT, WIDTH};

pub const MAIN_PROMPT: &str = "\n> ";
pub const ABANDON_TEXT: &str = "You abandon the quest…";

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub moves: u32,
    pub blocked: u32,
    pub encounters: u32,
    pub victories: u32,
    pub escapes: u32,
}

impl RunStats {
    /// Encounters the player walked away from, by winning or fleeing.
    pub fn survived(&self) -> u32 {
        self.victories + self.escapes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    ReachedExit,
    /// Quit command or end of input.
    Abandoned,
    Died,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ending: Ending,
    pub stats: RunStats,
}

#[derive(Debug)]
pub struct GameSession<R: RandomSource = GameRng> {
    pub player: PlayerState,
    pub grid: FogGrid,
    pub exit: Position,
    pub stats: RunStats,
    pub(super) table: SpawnTable,
    pub(super) rng: R,
}

impl<R: RandomSource> GameSession<R> {
    /// Fresh run on the standard 5x5 map with the built-in enemy table.
    pub fn new(rng: R) -> Result<Self, GameError> {
        Ok(Self::with_table(rng, SpawnTable::standard()?))
    }

    pub fn with_table(rng: R, table: SpawnTable) -> Self {
        let exit = Position::new(WIDTH - 1, HEIGHT - 1);
        GameSession {
            player: PlayerState::new(),
            grid: FogGrid::new(WIDTH, HEIGHT, Position::new(0, 0), exit),
            exit,
            stats: RunStats::default(),
            table,
            rng,
        }
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn table(&self) -> &SpawnTable {
        &self.table
    }

    pub fn at_exit(&self) -> bool {
        self.player.pos == self.exit
    }

    /// Apply one top-level command. `Some(ending)` means the run is over.
    pub fn handle<C: Console + ?Sized>(
        &mut self,
        cmd: Command,
        console: &mut C,
    ) -> Result<Option<Ending>, GameError> {
        match cmd {
            Command::Move(dir) => match self.attempt_move(dir, console)? {
                MoveOutcome::Moved {
                    encounter: Some(CombatOutcome::PlayerDied),
                } => Ok(Some(Ending::Died)),
                _ => Ok(None),
            },
            Command::Map => {
                console.say(&render_map(&self.grid, self.player.pos))?;
                Ok(None)
            }
            Command::Stats => {
                console.say(&stats_line(&self.player))?;
                Ok(None)
            }
            Command::Quit => {
                console.say(ABANDON_TEXT)?;
                Ok(Some(Ending::Abandoned))
            }
            Command::Help => {
                console.say(HELP_LINE)?;
                Ok(None)
            }
            Command::Unknown(raw) => {
                log::debug!("unknown command ({} chars)", raw.chars().count());
                console.say(HELP_LINE)?;
                Ok(None)
            }
        }
    }

    /// Play until the exit, death, a quit, or end of input.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<RunSummary, GameError> {
        for line in BANNER {
            console.say(line)?;
        }
        let ending = loop {
            if self.at_exit() {
                console.say("")?;
                console.say("You touch the cold iron door. It creaks open—FREEDOM!")?;
                console.say("GG. Thanks for playing.")?;
                break Ending::ReachedExit;
            }
            let Some(raw) = console.prompt(MAIN_PROMPT)? else {
                console.say(ABANDON_TEXT)?;
                break Ending::Abandoned;
            };
            match self.handle(Command::parse(&raw), console) {
                Ok(Some(ending)) => break ending,
                Ok(None) => {}
                Err(GameError::InputClosed) => {
                    console.say("")?;
                    console.say(ABANDON_TEXT)?;
                    break Ending::Abandoned;
                }
                Err(e) => return Err(e),
            }
        };
        log::info!(
            "run ended: {:?} after {} moves, {} encounters ({} won, {} fled), hp {}",
            ending,
            self.stats.moves,
            self.stats.encounters,
            self.stats.victories,
            self.stats.escapes,
            self.player.hp
        );
        Ok(RunSummary {
            ending,
            stats: self.stats.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::console::TextConsole;
    use crate::dungeon::rng::ScriptedRng;
    use std::io::Cursor;

    fn play(
        script: &str,
        uniforms: &[f64],
        rolls: &[i32],
    ) -> (RunSummary, String, GameSession<ScriptedRng>) {
        let mut gs = GameSession::new(ScriptedRng::new(uniforms, rolls)).unwrap();
        let mut con = TextConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let summary = gs.run(&mut con).unwrap();
        let out = String::from_utf8(con.into_parts().1).unwrap();
        (summary, out, gs)
    }

    #[test]
    fn quit_variants_abandon() {
        for q in ["q", "QUIT", " exit "] {
            let (summary, out, _) = play(&format!("{q}\n"), &[], &[]);
            assert_eq!(summary.ending, Ending::Abandoned, "{q:?}");
            assert!(out.contains(ABANDON_TEXT));
            assert!(out.starts_with("=== MINI DUNGEON ==="));
        }
    }

    #[test]
    fn eof_abandons() {
        let (summary, out, _) = play("", &[], &[]);
        assert_eq!(summary.ending, Ending::Abandoned);
        assert!(out.contains(ABANDON_TEXT));
    }

    #[test]
    fn unknown_and_stats_do_not_change_state() {
        let (summary, out, gs) = play("dance\nstats\n\nq\n", &[], &[]);
        assert_eq!(summary.ending, Ending::Abandoned);
        assert_eq!(out.matches(HELP_LINE).count(), 2);
        assert!(out.contains("HP: 20  DMG: 2-5  Pos: (0, 0)"));
        assert_eq!(gs.player, PlayerState::new());
        assert_eq!(summary.stats, RunStats::default());
    }

    #[test]
    fn walk_to_exit_without_encounters() {
        let script = "e\ne\ne\ne\ns\ns\ns\ns\nq\n";
        let (summary, out, gs) = play(script, &[0.9; 7], &[]);
        assert_eq!(summary.ending, Ending::ReachedExit);
        assert!(out.contains("FREEDOM"));
        assert!(out.contains("GG. Thanks for playing."));
        assert!(!out.contains(ABANDON_TEXT), "trailing q is never read");
        assert_eq!(summary.stats.moves, 8);
        assert_eq!(gs.player.pos, gs.exit);
    }

    #[test]
    fn death_ends_run() {
        // encounter, Ghoul band, hp 9; player at 1 HP hesitates and eats a 2
        let mut gs = GameSession::new(ScriptedRng::new(&[0.0, 0.6], &[9, 2])).unwrap();
        gs.player.hp = 1;
        let mut con = TextConsole::new(Cursor::new(b"s\nx\nmap\n".to_vec()), Vec::new());
        let summary = gs.run(&mut con).unwrap();
        assert_eq!(summary.ending, Ending::Died);
        let (mut input, out) = con.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("!!! A Ghoul appears (HP 9) !!!"));
        assert!(out.contains("Ghoul strikes for 2! (You: 0 HP)"));
        assert!(out.contains("The dungeon claims another soul"));
        let mut rest = String::new();
        std::io::Read::read_to_string(&mut input, &mut rest).unwrap();
        assert_eq!(rest, "map\n", "no command after death is read");
    }

    #[test]
    fn eof_mid_combat_abandons() {
        let (summary, out, _) = play("e\n", &[0.0, 0.0], &[5]);
        assert_eq!(summary.ending, Ending::Abandoned);
        assert!(out.contains("appears"));
        assert!(out.ends_with(&format!("{ABANDON_TEXT}\n")));
        assert_eq!(summary.stats.encounters, 1);
    }

    #[test]
    fn survived_counts_wins_and_escapes() {
        let stats = RunStats {
            victories: 3,
            escapes: 2,
            ..RunStats::default()
        };
        assert_eq!(stats.survived(), 5);
    }
}
