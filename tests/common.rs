//! Test utilities: scripted sessions and in-memory consoles.

use crawler::dungeon::{GameSession, ScriptedRng, TextConsole};
use std::io::{Cursor, Read};

pub type ScriptConsole = TextConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Console fed from `script`, one command per line.
pub fn console(script: &str) -> ScriptConsole {
    TextConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Fresh standard session whose draws are fully scripted.
pub fn scripted_session(uniforms: &[f64], rolls: &[i32]) -> GameSession<ScriptedRng> {
    GameSession::new(ScriptedRng::new(uniforms, rolls)).expect("standard table is valid")
}

/// Split a finished console into (unread input, printed output).
pub fn finish(con: ScriptConsole) -> (String, String) {
    let (mut input, output) = con.into_parts();
    let mut rest = String::new();
    input.read_to_string(&mut rest).expect("read remaining input");
    (rest, String::from_utf8(output).expect("utf-8 output"))
}
