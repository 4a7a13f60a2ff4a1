//! Text rendering for the map and status queries.

use super::state::{Fog, FogGrid, PlayerState, Position};

pub const BANNER: [&str; 3] = [
    "=== MINI DUNGEON ===",
    "Goal: reach the exit 'E' without dying. You are '@'.",
    "Commands: n/s/e/w, map, stats, quit",
];

pub const HELP_LINE: &str = "Try: n/s/e/w, map, stats, quit";

fn glyph(fog: Fog) -> char {
    match fog {
        Fog::Unknown => '.',
        Fog::Seen => ' ',
        Fog::Start => 'S',
        Fog::Exit => 'E',
    }
}

/// One character per cell, cells separated by a space, rows by newlines.
pub fn render_map(grid: &FogGrid, player: Position) -> String {
    let mut rows = Vec::with_capacity(grid.h);
    for y in 0..grid.h {
        let row: Vec<String> = (0..grid.w)
            .map(|x| {
                let pos = Position::new(x, y);
                if pos == player {
                    '@'.to_string()
                } else {
                    glyph(grid.get(pos)).to_string()
                }
            })
            .collect();
        rows.push(row.join(" "));
    }
    rows.join("\n")
}

pub fn stats_line(player: &PlayerState) -> String {
    format!(
        "HP: {}  DMG: {}  Pos: ({}, {})",
        player.display_hp(),
        player.damage,
        player.pos.x,
        player.pos.y
    )
}
