//! Turn-based combat.
//!
//! An [`Encounter`] is a small state machine: it starts `Ongoing` and each
//! [`Encounter::take_turn`] applies one player action, then the enemy's counter-strike,
//! then re-evaluates. [`resolve_encounter`] wraps it in the blocking prompt loop used by
//! exploration and applies the victory reward.
//!
//! Death is reported as [`CombatOutcome::PlayerDied`]; ending the process is left to the
//! top-level driver.

use super::catalog::EnemyInstance;
use super::console::Console;
use super::errors::GameError;
use super::rng::RandomSource;
use super::state::PlayerState;
use super::{FLEE_CHANCE, HEAL_RANGE, REWARD_CHANCE};

pub const COMBAT_PROMPT: &str = "[A]ttack  [H]eal(+1-3)  [R]un: ";
pub const DEATH_TEXT: &str = "You collapse. The dungeon claims another soul…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Heal,
    Flee,
    /// Anything unrecognized; costs the turn.
    Hesitate,
}

impl CombatAction {
    /// Classify a raw line by its first letter. Never fails.
    pub fn parse(raw: &str) -> Self {
        let cmd = raw.trim().to_lowercase();
        match cmd.chars().next() {
            Some('a') => CombatAction::Attack,
            Some('h') => CombatAction::Heal,
            Some('r') => CombatAction::Flee,
            _ => CombatAction::Hesitate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    Ongoing,
    EnemyDefeated,
    PlayerEscaped,
    PlayerDied,
}

impl CombatState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, CombatState::Ongoing)
    }
}

/// How an encounter ended, as seen by exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    EnemyDefeated { rewarded: bool },
    PlayerEscaped,
    PlayerDied,
}

impl CombatOutcome {
    pub fn escaped(self) -> bool {
        matches!(self, CombatOutcome::PlayerEscaped)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatReport {
    pub outcome: CombatOutcome,
    pub turns: u32,
}

/// Narration and resulting state for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub lines: Vec<String>,
    pub state: CombatState,
    /// Whether the enemy struck back this turn.
    pub retaliated: bool,
}

#[derive(Debug, Clone)]
pub struct Encounter {
    enemy: EnemyInstance,
    state: CombatState,
    turns: u32,
}

impl Encounter {
    pub fn new(enemy: EnemyInstance) -> Self {
        Self {
            enemy,
            state: CombatState::Ongoing,
            turns: 0,
        }
    }

    pub fn enemy(&self) -> &EnemyInstance {
        &self.enemy
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn take_turn(
        &mut self,
        player: &mut PlayerState,
        action: CombatAction,
        rng: &mut impl RandomSource,
    ) -> TurnReport {
        if self.state.is_terminal() {
            return TurnReport {
                lines: Vec::new(),
                state: self.state,
                retaliated: false,
            };
        }
        self.turns += 1;
        let mut lines = Vec::new();
        match action {
            CombatAction::Attack => {
                let dmg = player.damage.roll(rng);
                self.enemy.hp -= dmg;
                lines.push(format!(
                    "You hit {} for {}. ({} HP left)",
                    self.enemy.name,
                    dmg,
                    self.enemy.hp.max(0)
                ));
            }
            CombatAction::Heal => {
                let heal = HEAL_RANGE.roll(rng);
                player.hp += heal;
                lines.push(format!(
                    "You patch yourself for +{}. (You: {} HP)",
                    heal,
                    player.display_hp()
                ));
            }
            CombatAction::Flee => {
                if rng.chance(FLEE_CHANCE) {
                    lines.push("You slip away into the shadows…".to_string());
                    self.state = CombatState::PlayerEscaped;
                    return TurnReport {
                        lines,
                        state: self.state,
                        retaliated: false,
                    };
                }
                lines.push("You hesitate…".to_string());
            }
            CombatAction::Hesitate => lines.push("You hesitate…".to_string()),
        }

        let mut retaliated = false;
        if self.enemy.hp > 0 {
            let edmg = self.enemy.damage.roll(rng);
            player.hp -= edmg;
            retaliated = true;
            lines.push(format!(
                "{} strikes for {}! (You: {} HP)",
                self.enemy.name,
                edmg,
                player.display_hp()
            ));
        }

        self.state = if self.enemy.hp <= 0 {
            CombatState::EnemyDefeated
        } else if player.is_dead() {
            CombatState::PlayerDied
        } else {
            CombatState::Ongoing
        };
        TurnReport {
            lines,
            state: self.state,
            retaliated,
        }
    }
}

/// Run one encounter to a terminal state, reading a command per turn.
pub fn resolve_encounter<C, R>(
    player: &mut PlayerState,
    enemy: EnemyInstance,
    console: &mut C,
    rng: &mut R,
) -> Result<CombatReport, GameError>
where
    C: Console + ?Sized,
    R: RandomSource,
{
    console.say("")?;
    console.say(&format!("!!! A {} appears (HP {}) !!!", enemy.name, enemy.hp))?;
    let mut fight = Encounter::new(enemy);

    while !fight.state().is_terminal() {
        let raw = console.prompt(COMBAT_PROMPT)?.ok_or(GameError::InputClosed)?;
        let action = CombatAction::parse(&raw);
        let report = fight.take_turn(player, action, rng);
        for line in &report.lines {
            console.say(line)?;
        }
    }

    let name = fight.enemy().name.clone();
    let outcome = match fight.state() {
        CombatState::PlayerDied => {
            console.say(DEATH_TEXT)?;
            CombatOutcome::PlayerDied
        }
        CombatState::PlayerEscaped => CombatOutcome::PlayerEscaped,
        _ => {
            console.say(&format!("You defeated the {}!", name))?;
            let rewarded = rng.chance(REWARD_CHANCE);
            if rewarded {
                player.hp += 1;
                console.say("You find a crusty bandage (+1 HP).")?;
            }
            CombatOutcome::EnemyDefeated { rewarded }
        }
    };
    log::debug!(
        "encounter with {} ended after {} turns: {:?} (player hp {})",
        name,
        fight.turns(),
        outcome,
        player.hp
    );
    Ok(CombatReport {
        outcome,
        turns: fight.turns(),
    })
}
