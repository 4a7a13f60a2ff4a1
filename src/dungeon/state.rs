//! Player and map state owned by the session.

use super::catalog::StatRange;
use super::{HEIGHT, PLAYER_DAMAGE, START_HP, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// May go negative mid-fight; displays clamp to zero.
    pub hp: i32,
    pub damage: StatRange,
    pub pos: Position,
}

impl PlayerState {
    pub fn new() -> Self {
        PlayerState {
            hp: START_HP,
            damage: PLAYER_DAMAGE,
            pos: Position::default(),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// HP as shown to the player.
    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Stored visibility of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fog {
    Unknown,
    Seen,
    Start,
    Exit,
}

/// Row-major fog-of-war grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FogGrid {
    pub w: usize,
    pub h: usize,
    cells: Vec<Fog>,
}

impl FogGrid {
    /// Fresh grid with the permanent start and exit markers placed.
    pub fn new(w: usize, h: usize, start: Position, exit: Position) -> Self {
        let mut grid = FogGrid {
            w,
            h,
            cells: vec![Fog::Unknown; w * h],
        };
        let s = grid.idx(start.x, start.y);
        grid.cells[s] = Fog::Start;
        let e = grid.idx(exit.x, exit.y);
        grid.cells[e] = Fog::Exit;
        grid
    }

    pub fn standard() -> Self {
        Self::new(
            WIDTH,
            HEIGHT,
            Position::new(0, 0),
            Position::new(WIDTH - 1, HEIGHT - 1),
        )
    }

    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    pub fn get(&self, pos: Position) -> Fog {
        self.cells[self.idx(pos.x, pos.y)]
    }

    /// Promote an unknown cell to seen. Returns whether anything changed.
    pub fn reveal(&mut self, pos: Position) -> bool {
        let i = self.idx(pos.x, pos.y);
        if self.cells[i] == Fog::Unknown {
            self.cells[i] = Fog::Seen;
            true
        } else {
            false
        }
    }

    pub fn count(&self, fog: Fog) -> usize {
        self.cells.iter().filter(|c| **c == fog).count()
    }
}
