use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Represents a game from the first move to a win or loss.
///
/// Mines are laid on the first reveal, with that cell protected. Every action swaps in the board returned by the
/// engine; nothing is accepted once the game is won or lost.
#[derive(Clone, Debug)]
pub struct GameSession<P> {
    difficulty: Difficulty,
    board: Board,
    status: GameStatus,
    flags_count: CellCount,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    triggered_mine: Option<Coord2>,
    placer: P,
}

impl GameSession<RandomMinePlacer<SmallRng>> {
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::new(difficulty, RandomMinePlacer::from_seed(seed))
    }
}

impl<P: MinePlacer> GameSession<P> {
    pub fn new(difficulty: Difficulty, placer: P) -> Result<Self> {
        difficulty.validate()?;
        let board = difficulty.create_board()?;
        Ok(Self {
            difficulty,
            board,
            status: Default::default(),
            flags_count: 0,
            started_at: None,
            ended_at: None,
            triggered_mine: None,
            placer,
        })
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn flags_count(&self) -> CellCount {
        self.flags_count
    }

    /// Mines minus flags, negative when the player placed more flags than there are mines.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.difficulty.mines()) - i32::from(self.flags_count)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Whole seconds since the first reveal, frozen once the game ended.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    pub fn reveal(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        if !self.status.is_playing() {
            log::trace!("reveal {:?} ignored, game is {:?}", coords, self.status);
            return Ok(NoChange);
        }

        let Some(target) = self.board.get(coords) else {
            log::trace!("reveal {:?} ignored, out of range", coords);
            return Ok(NoChange);
        };
        if target.is_revealed() || target.is_flagged() {
            return Ok(NoChange);
        }

        if self.started_at.is_none() {
            self.board = self
                .placer
                .place(&self.board, self.difficulty.mines(), coords)?;
            self.started_at = Some(now);
            log::debug!(
                "placed {} mines, first move at {:?}",
                self.board.mine_count(),
                coords
            );
        }

        let board = self.board.reveal_cell(coords);
        Ok(if board[coords].is_mine() {
            self.board = board.reveal_all_mines();
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost, now);
            HitMine
        } else if board.is_cleared() {
            self.board = board;
            self.end_game(GameStatus::Won, now);
            Won
        } else {
            self.board = board;
            Revealed
        })
    }

    /// Out-of-range coordinates and finished games leave everything untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use MarkOutcome::*;

        if !self.status.is_playing() {
            log::trace!("flag {:?} ignored, game is {:?}", coords, self.status);
            return NoChange;
        }

        let Some(&before) = self.board.get(coords) else {
            log::trace!("flag {:?} ignored, out of range", coords);
            return NoChange;
        };
        let board = self.board.toggle_flag(coords);

        match (before.is_flagged(), board[coords].is_flagged()) {
            (false, true) => self.flags_count = self.flags_count.saturating_add(1),
            (true, false) => self.flags_count = self.flags_count.saturating_sub(1),
            _ => return NoChange,
        }

        self.board = board;
        Changed
    }

    /// Starts over with a fresh, unmined board of the current difficulty.
    pub fn reset(&mut self) {
        self.board = Board::empty(self.difficulty.rows(), self.difficulty.cols());
        self.status = GameStatus::Playing;
        self.flags_count = 0;
        self.started_at = None;
        self.ended_at = None;
        self.triggered_mine = None;
        log::debug!("new {} game", self.difficulty.name());
    }

    /// Switches difficulty and starts over, even when it is the same one.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        difficulty.validate()?;
        self.difficulty = difficulty;
        self.reset();
        Ok(())
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot<'_> {
        Snapshot {
            difficulty: self.difficulty.name(),
            status: self.status,
            mines_left: self.mines_left(),
            elapsed_secs: self.elapsed_secs(now),
            triggered_mine: self.triggered_mine,
            board: &self.board,
        }
    }

    fn end_game(&mut self, status: GameStatus, now: DateTime<Utc>) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        self.ended_at = Some(now);
        log::debug!("game ended: {:?}", status);
    }
}

/// What a presentation layer needs to draw the current state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub difficulty: &'a str,
    pub status: GameStatus,
    pub mines_left: i32,
    pub elapsed_secs: u32,
    pub triggered_mine: Option<Coord2>,
    pub board: &'a Board,
}
