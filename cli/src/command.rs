use std::str::FromStr;

use mineboard_core::{Coord, Coord2, Difficulty};
use thiserror::Error;

/// One line of player input.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    New,
    Difficulty(Difficulty),
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
commands:
  r X Y, reveal X Y    reveal the cell at column X, row Y
  f X Y, flag X Y      toggle a flag on a hidden cell
  n, new               start over
  d NAME, difficulty NAME
                       switch to beginner, intermediate or expert
  h, help              show this text
  q, quit              leave";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseCommandError {
    #[error("Empty command, try `help`")]
    Empty,
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("Expected two coordinates, column then row")]
    MissingCoords,
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
    #[error("Unknown difficulty `{0}`, expected beginner, intermediate or expert")]
    UnknownDifficulty(String),
    #[error("Unexpected argument `{0}`")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            "n" | "new" => Command::New,
            "d" | "difficulty" => {
                let preset = words.next().unwrap_or_default();
                Difficulty::preset(preset)
                    .map(Command::Difficulty)
                    .ok_or_else(|| ParseCommandError::UnknownDifficulty(preset.to_owned()))?
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, ParseCommandError> {
    let mut next = || -> Result<Coord, ParseCommandError> {
        let word = words.next().ok_or(ParseCommandError::MissingCoords)?;
        word.parse()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_owned()))
    };
    let x = next()?;
    let y = next()?;
    Ok((x, y))
}
