use crate::*;

/// Board transitions. Each one leaves `self` untouched and returns the next board.
impl Board {
    /// Reveals the single cell at `coords`.
    ///
    /// Flagged cells are protected and have to be unflagged first. Neighbors are never opened, even around a zero.
    /// Coordinates outside the board give back an unchanged copy.
    #[must_use]
    pub fn reveal_cell(&self, coords: Coord2) -> Board {
        let mut next = self.clone();
        if let Some(cell) = self.get(coords) {
            if !cell.is_revealed && !cell.is_flagged {
                next.cell_mut(coords).is_revealed = true;
            }
        }
        next
    }

    /// Flips the flag on a hidden cell. Revealed cells and out of range coordinates are left alone.
    #[must_use]
    pub fn toggle_flag(&self, coords: Coord2) -> Board {
        let mut next = self.clone();
        if let Some(cell) = self.get(coords) {
            if !cell.is_revealed {
                next.cell_mut(coords).is_flagged = !cell.is_flagged;
            }
        }
        next
    }

    /// Whether every safe cell has been revealed. Flags play no part.
    pub fn is_cleared(&self) -> bool {
        self.iter().all(|cell| cell.is_mine || cell.is_revealed)
    }

    /// Reveals every mine, keeping the rest of the board as is.
    #[must_use]
    pub fn reveal_all_mines(&self) -> Board {
        let mut next = self.clone();
        let (cols, rows) = self.size();
        for y in 0..rows {
            for x in 0..cols {
                let cell = next.cell_mut((x, y));
                if cell.is_mine {
                    cell.is_revealed = true;
                }
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board_with_mines(rows: Coord, cols: Coord, mines: &[Coord2]) -> Board {
        let mut board = Board::new(rows, cols).unwrap();
        for &coords in mines {
            board.cell_mut(coords).is_mine = true;
        }
        board.fill_adjacent_counts();
        board
    }

    fn reveal_all_safe(board: &Board) -> Board {
        let safe: Vec<_> = board.iter().filter(|c| !c.is_mine()).map(Cell::coords).collect();
        safe.into_iter()
            .fold(board.clone(), |board, coords| board.reveal_cell(coords))
    }

    #[test]
    fn reveal_only_opens_the_target_cell() {
        let board = board_with_mines(3, 3, &[(2, 2)]);

        let next = board.reveal_cell((0, 0));

        assert!(next[(0, 0)].is_revealed());
        assert_eq!(next[(0, 0)].state(), CellState::Revealed(0));
        assert_eq!(next.revealed_count(), 1);
        // input untouched
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn reveal_flagged_cell_is_a_no_op() {
        let board = board_with_mines(3, 3, &[(2, 2)]).toggle_flag((1, 1));

        let next = board.reveal_cell((1, 1));

        assert_eq!(next, board);
        assert!(next[(1, 1)].is_flagged());
        assert!(!next[(1, 1)].is_revealed());
    }

    #[test]
    fn reveal_out_of_range_is_a_no_op() {
        let board = board_with_mines(2, 2, &[(0, 0)]);

        assert_eq!(board.reveal_cell((2, 0)), board);
        assert_eq!(board.reveal_cell((0, 9)), board);
    }

    #[test]
    fn toggle_flag_twice_round_trips() {
        let board = board_with_mines(3, 3, &[(1, 1)]);

        let flagged = board.toggle_flag((1, 1));
        assert!(flagged[(1, 1)].is_flagged());
        assert_eq!(flagged.flag_count(), 1);

        assert_eq!(flagged.toggle_flag((1, 1)), board);
    }

    #[test]
    fn toggle_flag_on_revealed_cell_is_a_no_op() {
        let board = board_with_mines(3, 3, &[(1, 1)]).reveal_cell((0, 0));

        let next = board.toggle_flag((0, 0));

        assert_eq!(next, board);
        assert!(!next[(0, 0)].is_flagged());
    }

    #[test]
    fn toggle_flag_out_of_range_is_a_no_op() {
        let board = board_with_mines(2, 2, &[]);
        assert_eq!(board.toggle_flag((5, 5)), board);
    }

    #[test]
    fn revealed_cells_stay_revealed() {
        let board = board_with_mines(3, 3, &[(2, 2)]).reveal_cell((0, 1));

        let after_flag = board.toggle_flag((0, 1));
        let after_reveal = after_flag.reveal_cell((0, 1));
        let after_loss = after_reveal.reveal_all_mines();

        for next in [after_flag, after_reveal, after_loss] {
            assert!(next[(0, 1)].is_revealed());
        }
    }

    #[test]
    fn unplayed_board_without_mines_is_not_cleared() {
        let board = board_with_mines(2, 3, &[]);
        assert!(!board.is_cleared());
    }

    #[test]
    fn fully_revealed_safe_board_is_cleared() {
        let board = reveal_all_safe(&board_with_mines(2, 3, &[]));
        assert!(board.is_cleared());
    }

    #[test]
    fn hidden_unflagged_mines_do_not_block_the_win() {
        let board = reveal_all_safe(&board_with_mines(4, 4, &[(0, 0), (3, 2)]));

        assert!(board.is_cleared());
        assert!(!board[(0, 0)].is_revealed());
        assert!(!board[(0, 0)].is_flagged());
    }

    #[test]
    fn revealing_last_safe_cell_flips_the_win() {
        let mines = [(0, 0), (2, 1)];
        let board = reveal_all_safe(&board_with_mines(3, 3, &mines));
        // hide one safe cell again by rebuilding without it
        let mut partial = board_with_mines(3, 3, &mines);
        for cell in board.iter().filter(|c| c.is_revealed() && c.coords() != (1, 2)) {
            partial = partial.reveal_cell(cell.coords());
        }

        assert!(!partial.is_cleared());
        assert!(partial.reveal_cell((1, 2)).is_cleared());
    }

    #[test]
    fn reveal_all_mines_only_touches_mines() {
        let board = board_with_mines(3, 3, &[(0, 0), (2, 2)])
            .reveal_cell((1, 1))
            .toggle_flag((2, 2));

        let next = board.reveal_all_mines();

        assert!(next[(0, 0)].is_revealed());
        assert!(next[(2, 2)].is_revealed());
        for cell in next.iter().filter(|c| !c.is_mine()) {
            assert_eq!(cell.is_revealed(), board[cell.coords()].is_revealed());
        }
        assert_eq!(next.revealed_count(), 3);
    }
}
