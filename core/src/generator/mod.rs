use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy used to lay mines onto an empty board once the protected first move is known.
pub trait MinePlacer {
    /// Returns a copy of `board` holding `mines` mines, none of them at `protected`, with adjacency counts filled in.
    fn place(&mut self, board: &Board, mines: CellCount, protected: Coord2) -> Result<Board>;
}

/// Checks shared by every placement strategy.
fn check_placement(board: &Board, mines: CellCount, protected: Coord2) -> Result<()> {
    board.validate_coords(protected)?;

    if mines >= board.total_cells() {
        log::warn!(
            "Cannot keep the protected cell safe, requested {} mines but only {} cells",
            mines,
            board.total_cells()
        );
        return Err(GameError::TooManyMines);
    }

    if board.mine_count() > 0 {
        return Err(GameError::AlreadyMined);
    }

    Ok(())
}
