use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be positive")]
    InvalidDimensions,
    #[error("Too many mines, at least one safe cell is required")]
    TooManyMines,
    #[error("Board already has mines placed")]
    AlreadyMined,
    #[error("Mine layout covers the protected cell")]
    ProtectedCellMined,
    #[error("Mine layout does not hold the requested number of mines")]
    MineCountMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
