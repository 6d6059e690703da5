use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells, stored row-major (`[y][x]`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds an empty board: no mines, nothing revealed or flagged.
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }

        Ok(Self::empty(rows, cols))
    }

    pub(crate) fn empty(rows: Coord, cols: Coord) -> Self {
        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(y, x)| {
            Cell::new((x as Coord, y as Coord))
        });
        Self { cells }
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn cols(&self) -> Coord {
        self.size().0
    }

    /// Board size as `(cols, rows)`, matching the `(x, y)` coordinate order.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (cols, rows) = self.size();
        mult(cols, rows)
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let (cols, rows) = self.size();
        x < cols && y < rows
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.contains(coords).then(|| &self[coords])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Rows in top-to-bottom order, each left-to-right.
    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.outer_iter()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(Cell::is_mine)
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_where(Cell::is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(Cell::is_revealed)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Recomputes the adjacency count of every safe cell from the current mine layout.
    pub(crate) fn fill_adjacent_counts(&mut self) {
        let (cols, rows) = self.size();
        for y in 0..rows {
            for x in 0..cols {
                let coords = (x, y);
                if !self[coords].is_mine {
                    let count = self.adjacent_mine_count(coords);
                    self.cell_mut(coords).adjacent_mines = count;
                }
            }
        }
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|&cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
