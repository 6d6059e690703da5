use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Scatters `mines` mines over a copy of `board`, never on `protected`.
///
/// Uses rejection sampling: random `(x, y)` pairs are drawn until one lands on a cell that is neither mined yet nor
/// protected. The requirement `mines < rows * cols` is checked up front so the loop always has somewhere to go.
pub fn place_mines<R: Rng + ?Sized>(
    board: &Board,
    mines: CellCount,
    protected: Coord2,
    rng: &mut R,
) -> Result<Board> {
    check_placement(board, mines, protected)?;

    let (cols, rows) = board.size();
    let mut next = board.clone();
    let mut placed: CellCount = 0;
    let mut draws: u32 = 0;

    while placed < mines {
        let coords = (rng.random_range(0..cols), rng.random_range(0..rows));
        draws += 1;

        let cell = next.cell_mut(coords);
        if !cell.is_mine && coords != protected {
            cell.is_mine = true;
            placed += 1;
        }
    }

    next.fill_adjacent_counts();
    log::trace!("placed {} mines in {} draws", placed, draws);
    Ok(next)
}

/// Random placement driven by an injected generator.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer<R> {
    rng: R,
}

impl<R: Rng> RandomMinePlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMinePlacer<SmallRng> {
    /// Reproducible placement: the same seed gives the same sequence of layouts.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinePlacer for RandomMinePlacer<R> {
    fn place(&mut self, board: &Board, mines: CellCount, protected: Coord2) -> Result<Board> {
        place_mines(board, mines, protected, &mut self.rng)
    }
}
