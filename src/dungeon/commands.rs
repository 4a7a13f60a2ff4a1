//! Top-level command parsing for the exploration prompt.
//!
//! Every input line maps to some [`Command`]; anything unrecognized becomes
//! [`Command::Unknown`] and is answered with the usage hint.

use super::explore::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Map,
    Stats,
    Help,
    Quit,
    Unknown(String),
}

fn is_question_mark(ch: char) -> bool {
    matches!(ch, '?' | '\u{FF1F}' | '\u{00BF}')
}

impl Command {
    pub fn parse(raw: &str) -> Self {
        let cmd = raw.trim().to_lowercase();
        if let Some(dir) = Direction::from_token(&cmd) {
            return Command::Move(dir);
        }
        match cmd.as_str() {
            "map" => Command::Map,
            "stats" => Command::Stats,
            "q" | "quit" | "exit" => Command::Quit,
            "help" => Command::Help,
            s if !s.is_empty() && s.chars().all(is_question_mark) => Command::Help,
            _ => Command::Unknown(cmd),
        }
    }
}
