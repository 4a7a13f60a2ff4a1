//! Line-oriented console the game talks through.
//!
//! The session never touches stdin/stdout directly; it reads one line per prompt and
//! writes one line per narration through [`Console`]. [`TextConsole`] adapts any
//! `BufRead` + `Write` pair, so tests drive a game from an in-memory script.

use super::errors::GameError;
use std::io::{BufRead, Write};

const PREVIEW_CHARS: usize = 80;

pub trait Console {
    /// Show `prompt` and wait for one line. `Ok(None)` means input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, GameError>;

    /// Print one line of narration.
    fn say(&mut self, line: &str) -> Result<(), GameError>;
}

pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        // Raw bytes + lossy decode: malformed UTF-8 becomes an unknown command, not an error.
        let mut buf = Vec::new();
        let n = self.input.read_until(b'\n', &mut buf)?;
        if n == 0 {
            log::trace!("input exhausted at prompt {:?}", prompt.trim());
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        log::trace!("input: {}", preview(&line));
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

/// Single-line, bounded rendering of raw player input for logs.
fn preview(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(PREVIEW_CHARS) + 4);
    for (n, ch) in s.chars().enumerate() {
        if n >= PREVIEW_CHARS {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
