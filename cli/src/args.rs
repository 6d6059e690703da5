use clap::{Parser, ValueEnum};
use mineboard_core::{CellCount, Coord, Difficulty, GameError};

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Preset to start with
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    pub difficulty: Preset,

    /// Rows of a custom board, overrides the preset
    #[arg(long, requires_all = ["cols", "mines"])]
    pub rows: Option<Coord>,

    /// Columns of a custom board
    #[arg(long, requires_all = ["rows", "mines"])]
    pub cols: Option<Coord>,

    /// Mines on a custom board
    #[arg(long, requires_all = ["rows", "cols"])]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print a JSON snapshot after every command instead of the board
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn starting_difficulty(&self) -> Result<Difficulty, GameError> {
        match (self.rows, self.cols, self.mines) {
            (Some(rows), Some(cols), Some(mines)) => Difficulty::new("Custom", rows, cols, mines),
            _ => Ok(self.difficulty.into()),
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => Difficulty::BEGINNER,
            Preset::Intermediate => Difficulty::INTERMEDIATE,
            Preset::Expert => Difficulty::EXPERT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_beginner() {
        let args = Args::try_parse_from(["mineboard"]).unwrap();
        assert_eq!(args.starting_difficulty(), Ok(Difficulty::BEGINNER));
        assert_eq!(args.seed, None);
        assert!(!args.json);
    }

    #[test]
    fn picks_preset_and_seed() {
        let args = Args::try_parse_from(["mineboard", "-d", "expert", "--seed", "42"]).unwrap();
        assert_eq!(args.starting_difficulty(), Ok(Difficulty::EXPERT));
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn custom_board_needs_all_three_values() {
        assert!(Args::try_parse_from(["mineboard", "--rows", "5"]).is_err());

        let args =
            Args::try_parse_from(["mineboard", "--rows", "5", "--cols", "6", "--mines", "4"]).unwrap();
        let difficulty = args.starting_difficulty().unwrap();
        assert_eq!((difficulty.rows(), difficulty.cols(), difficulty.mines()), (5, 6, 4));
    }

    #[test]
    fn custom_board_is_validated() {
        let args =
            Args::try_parse_from(["mineboard", "--rows", "2", "--cols", "2", "--mines", "4"]).unwrap();
        assert_eq!(args.starting_difficulty(), Err(GameError::TooManyMines));
    }
}
