use alloc::vec::Vec;

use super::*;

/// Places a predetermined mine layout, for replaying a known board.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinePlacer {
    mines: Vec<Coord2>,
}

impl FixedMinePlacer {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        let mut mines: Vec<_> = mines.into_iter().collect();
        mines.sort_unstable();
        mines.dedup();
        Self { mines }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(&mut self, board: &Board, mines: CellCount, protected: Coord2) -> Result<Board> {
        check_placement(board, mines, protected)?;

        if self.mines.contains(&protected) {
            return Err(GameError::ProtectedCellMined);
        }

        if self.mines.len() != usize::from(mines) {
            log::warn!(
                "Fixed layout mine count mismatch, layout: {}, requested: {}",
                self.mines.len(),
                mines
            );
            return Err(GameError::MineCountMismatch);
        }

        let mut next = board.clone();
        for &coords in &self.mines {
            next.validate_coords(coords)?;
            next.cell_mut(coords).is_mine = true;
        }
        next.fill_adjacent_counts();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_given_layout_with_counts() {
        let board = Board::new(3, 3).unwrap();
        let mut placer = FixedMinePlacer::new([(0, 0), (2, 1), (0, 0)]);

        let placed = placer.place(&board, 2, (1, 2)).unwrap();

        assert_eq!(placer.mines(), [(0, 0), (2, 1)]);
        assert_eq!(placed.mine_count(), 2);
        assert!(placed[(2, 1)].is_mine());
        assert_eq!(placed[(1, 1)].adjacent_mines(), 2);
        assert_eq!(placed[(1, 2)].adjacent_mines(), 1);
    }

    #[test]
    fn refuses_to_mine_the_protected_cell() {
        let board = Board::new(3, 3).unwrap();
        let mut placer = FixedMinePlacer::new([(1, 1)]);

        assert_eq!(
            placer.place(&board, 1, (1, 1)),
            Err(GameError::ProtectedCellMined)
        );
    }

    #[test]
    fn refuses_layout_of_the_wrong_size() {
        let board = Board::new(3, 3).unwrap();
        let mut placer = FixedMinePlacer::new([(0, 0), (2, 1)]);

        assert_eq!(placer.place(&board, 5, (1, 2)), Err(GameError::MineCountMismatch));
        assert_eq!(placer.place(&board, 1, (1, 2)), Err(GameError::MineCountMismatch));
        assert_eq!(placer.place(&board, 2, (1, 2)).map(|b| b.mine_count()), Ok(2));
    }

    #[test]
    fn refuses_out_of_range_layout() {
        let board = Board::new(3, 3).unwrap();
        let mut placer = FixedMinePlacer::new([(0, 3)]);

        assert_eq!(placer.place(&board, 1, (0, 0)), Err(GameError::InvalidCoords));
    }
}
