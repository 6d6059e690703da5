#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod difficulty;
mod engine;
mod error;
mod generator;
mod session;
mod types;

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether the board changed and needs redrawing.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Result of revealing one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the board changed and needs redrawing.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
