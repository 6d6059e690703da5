use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use mineboard_core::{GameError, GameSession, MarkOutcome, MinePlacer, RevealOutcome};

use crate::command::{Command, HELP};
use crate::render::render;

/// Drives a session from text commands and writes the resulting state back out.
pub(crate) struct Terminal<P> {
    session: GameSession<P>,
    json: bool,
}

impl<P: MinePlacer> Terminal<P> {
    pub fn new(session: GameSession<P>, json: bool) -> Self {
        Self { session, json }
    }

    pub fn run<R, W>(&mut self, input: R, mut output: W, clock: impl Fn() -> DateTime<Utc>) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.show(&mut output, clock())?;

        for line in input.lines() {
            let line = line.context("Could not read command")?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, clock(), &mut output)?,
                Err(err) => writeln!(output, "{err}")?,
            }
            output.flush()?;
        }

        Ok(())
    }

    fn execute(&mut self, command: Command, now: DateTime<Utc>, output: &mut impl Write) -> Result<()> {
        log::trace!("command: {:?}", command);

        let (has_update, message) = match command {
            Command::Reveal(coords) | Command::Flag(coords) if !self.session.board().contains(coords) => {
                (false, Some(GameError::InvalidCoords.to_string()))
            }
            Command::Reveal(coords) => match self.session.reveal(coords, now) {
                Ok(outcome) => (outcome.has_update(), self.reveal_message(outcome, now)),
                Err(err) => (false, Some(err.to_string())),
            },
            Command::Flag(coords) => {
                let outcome = self.session.toggle_flag(coords);
                let message = (outcome == MarkOutcome::NoChange && self.session.is_finished()).then(game_over);
                (outcome.has_update(), message)
            }
            Command::New => {
                self.session.reset();
                (true, None)
            }
            Command::Difficulty(difficulty) => match self.session.set_difficulty(difficulty) {
                Ok(()) => (true, None),
                Err(err) => (false, Some(err.to_string())),
            },
            Command::Help => {
                writeln!(output, "{HELP}")?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        if has_update {
            self.show(output, now)?;
        }
        if let Some(message) = message {
            writeln!(output, "{message}")?;
        }
        Ok(())
    }

    fn reveal_message(&self, outcome: RevealOutcome, now: DateTime<Utc>) -> Option<String> {
        match outcome {
            RevealOutcome::HitMine => Some("Boom! Type `n` for a new game.".to_owned()),
            RevealOutcome::Won => Some(format!("Cleared in {}s!", self.session.elapsed_secs(now))),
            RevealOutcome::NoChange if self.session.is_finished() => Some(game_over()),
            _ => None,
        }
    }

    fn show(&self, output: &mut impl Write, now: DateTime<Utc>) -> Result<()> {
        let snapshot = self.session.snapshot(now);
        if self.json {
            let json = serde_json::to_string(&snapshot).context("Could not encode snapshot")?;
            writeln!(output, "{json}")?;
        } else {
            write!(output, "{}", render(&snapshot))?;
        }
        Ok(())
    }
}

fn game_over() -> String {
    "The game is over, type `n` for a new game.".to_owned()
}
