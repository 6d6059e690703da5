use alloc::borrow::Cow;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count for one kind of game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    name: Cow<'static, str>,
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl Difficulty {
    pub const BEGINNER: Self = Self::preset_const("Beginner", 9, 9, 10);
    pub const INTERMEDIATE: Self = Self::preset_const("Intermediate", 16, 16, 40);
    pub const EXPERT: Self = Self::preset_const("Expert", 16, 30, 99);

    pub const PRESETS: [Self; 3] = [Self::BEGINNER, Self::INTERMEDIATE, Self::EXPERT];

    /// Presets are checked while the constants are evaluated, so a bad one fails the build.
    const fn preset_const(name: &'static str, rows: Coord, cols: Coord, mines: CellCount) -> Self {
        assert!(rows > 0 && cols > 0, "preset needs positive dimensions");
        assert!(mines < mult(rows, cols), "preset leaves no safe cell");
        Self {
            name: Cow::Borrowed(name),
            rows,
            cols,
            mines,
        }
    }

    /// Custom difficulty. Needs positive dimensions and at least one safe cell for the first move.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    ) -> Result<Self> {
        let difficulty = Self {
            name: name.into(),
            rows,
            cols,
            mines,
        };
        difficulty.validate()?;
        Ok(difficulty)
    }

    /// Looks up a preset by name, ignoring case.
    pub fn preset(name: &str) -> Option<Self> {
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            Err(GameError::InvalidDimensions)
        } else if self.mines >= self.total_cells() {
            Err(GameError::TooManyMines)
        } else {
            Ok(())
        }
    }

    /// Empty board with this difficulty's dimensions.
    pub fn create_board(&self) -> Result<Board> {
        Board::new(self.rows, self.cols)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::BEGINNER
    }
}
