use serde::{Deserialize, Serialize};

use crate::*;

/// Semantic state of a cell as a renderer should show it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// One grid position.
///
/// Mutation is limited to this crate, so the mine flag and adjacency count only change during placement and a revealed
/// cell never goes back to hidden.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mines: u8,
    x: Coord,
    y: Coord,
}

impl Cell {
    pub(crate) const fn new((x, y): Coord2) -> Self {
        Self {
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            adjacent_mines: 0,
            x,
            y,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Number of mines among the up-to-8 neighbors, always 0 on mine cells.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn x(&self) -> Coord {
        self.x
    }

    pub const fn y(&self) -> Coord {
        self.y
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    pub const fn state(&self) -> CellState {
        match (self.is_revealed, self.is_mine, self.is_flagged) {
            (true, true, _) => CellState::Mine,
            (true, false, _) => CellState::Revealed(self.adjacent_mines),
            (false, _, true) => CellState::Flagged,
            (false, _, false) => CellState::Hidden,
        }
    }
}
