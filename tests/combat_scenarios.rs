//! End-to-end combat scenarios driven through exploration with scripted randomness.

mod common;

use crawler::dungeon::combat::DEATH_TEXT;
use crawler::dungeon::{CombatOutcome, Direction, Ending, MoveOutcome};

// Encounter on the first step with a 5 HP Rat; attacks of 3 and 3 kill it after one
// counter-strike, and the third queued attack is never read.
#[test]
fn rat_falls_after_two_attacks() {
    // encounter roll, Rat band, no reward
    let uniforms = [0.1, 0.49, 0.9];
    // rat hp, player hit, rat strike, player hit
    let rolls = [5, 3, 2, 3];
    let mut gs = common::scripted_session(&uniforms, &rolls);
    let mut con = common::console("a\na\na\n");
    assert_eq!(gs.player.hp, 20);

    let out = gs.attempt_move(Direction::East, &mut con).unwrap();
    assert_eq!(
        out,
        MoveOutcome::Moved {
            encounter: Some(CombatOutcome::EnemyDefeated { rewarded: false })
        }
    );
    assert_eq!(gs.player.hp, 18);
    assert_eq!(gs.stats.victories, 1);
    assert_eq!(gs.rng().remaining(), (0, 0));

    let (rest, text) = common::finish(con);
    assert_eq!(rest, "a\n", "third attack must not execute");
    let trace: Vec<&str> = text
        .lines()
        .filter(|l| l.contains("You hit") || l.contains("strikes") || l.contains("defeated"))
        .collect();
    assert_eq!(
        trace,
        vec![
            "[A]ttack  [H]eal(+1-3)  [R]un: You hit Rat for 3. (2 HP left)",
            "Rat strikes for 2! (You: 18 HP)",
            "[A]ttack  [H]eal(+1-3)  [R]un: You hit Rat for 3. (0 HP left)",
            "You defeated the Rat!",
        ]
    );
    assert!(text.contains("!!! A Rat appears (HP 5) !!!"));
}

// Whittled down to 1 HP by earlier strikes, the player dies on the next retaliation and
// the run ends as a death.
#[test]
fn death_after_being_worn_down() {
    // encounter + Vampire Thrall band; later draws unused
    let uniforms = [0.0, 0.8];
    // thrall hp 12; heal 1 / strike 5 (hp 16); heal 1 / strike 5 (hp 12);
    // hit 2 / strike 5 (hp 7); hit 2 / strike 5 (hp 2); heal 1 / strike 2 (hp 1);
    // hesitate / strike 2 (dead)
    let rolls = [12, 1, 5, 1, 5, 2, 5, 2, 5, 1, 2, 2];
    let mut gs = common::scripted_session(&uniforms, &rolls);
    let mut con = common::console("s\nh\nh\na\na\nh\nwhat\nstats\n");
    let summary = gs.run(&mut con).unwrap();

    assert_eq!(summary.ending, Ending::Died);
    assert!(gs.player.hp <= 0);
    let (rest, text) = common::finish(con);
    assert_eq!(rest, "stats\n");
    assert!(text.contains("Vampire Thrall strikes for 2! (You: 1 HP)"));
    assert!(text.contains("Vampire Thrall strikes for 2! (You: 0 HP)"));
    assert!(text.contains(DEATH_TEXT));
    assert!(!text.contains("defeated"));
}

#[test]
fn flee_success_costs_nothing_that_turn() {
    let mut gs = common::scripted_session(&[0.2, 0.1, 0.49], &[7, 3]);
    let mut con = common::console("r\n");
    let hp_before = gs.player.hp;
    let out = gs.attempt_move(Direction::South, &mut con).unwrap();
    assert_eq!(
        out,
        MoveOutcome::Moved {
            encounter: Some(CombatOutcome::PlayerEscaped)
        }
    );
    assert_eq!(gs.player.hp, hp_before);
    assert_eq!(gs.rng().remaining(), (0, 1), "enemy damage roll untouched");
    let (_, text) = common::finish(con);
    assert!(text.contains("You slip away into the shadows"));
    assert!(!text.contains("strikes"));
}

#[test]
fn failed_flee_takes_the_hit_then_escape() {
    let mut gs = common::scripted_session(&[0.2, 0.1, 0.5, 0.3], &[7, 3]);
    let mut con = common::console("r\nrun\n");
    let out = gs.attempt_move(Direction::South, &mut con).unwrap();
    assert_eq!(
        out,
        MoveOutcome::Moved {
            encounter: Some(CombatOutcome::PlayerEscaped)
        }
    );
    assert_eq!(gs.player.hp, 17);
    assert_eq!(gs.stats.escapes, 1);
}

#[test]
fn seeded_attack_only_runs_always_finish() {
    use crawler::dungeon::{GameRng, GameSession};
    for seed in 0..50u64 {
        let mut gs = GameSession::new(GameRng::new(seed)).unwrap();
        // Spam attacks between moves; every fight must end and the run must too.
        let mut script = String::new();
        for step in ["e", "e", "e", "e", "s", "s", "s", "s"] {
            script.push_str(step);
            script.push('\n');
            script.push_str(&"a\n".repeat(12));
        }
        let mut con = common::console(&script);
        let summary = gs.run(&mut con).unwrap();
        assert!(
            matches!(summary.ending, Ending::ReachedExit | Ending::Died),
            "seed {seed} ended {:?}",
            summary.ending
        );
    }
}
