//! Line-oriented front end.
//!
//! Reads one command per line and writes the board and notifications back.
//! Generic over reader and writer so a whole game can be scripted.

use crate::config::Messages;
use crate::games::tictactoe::{CellId, GameSession, MoveOutcome};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate a cell.
    Activate(CellId),
    /// Start a new game.
    Reset,
    /// Leave.
    Quit,
}

impl std::str::FromStr for Command {
    type Err = crate::games::tictactoe::CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" | "r" => Ok(Command::Reset),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => other.parse().map(Command::Activate),
        }
    }
}

/// Drives `session` from `input` until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    messages: &Messages,
    input: R,
    mut output: W,
) -> Result<()> {
    info!("Starting console game");
    render(session, &mut output)?;

    let mut lines = input.lines();
    loop {
        prompt(session, &mut output)?;
        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line.context("Failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(input = %line, error = %e, "Rejected input");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Reset => {
                session.reset();
                writeln!(output, "New game.")?;
            }
            Command::Activate(cell) => match session.activate(cell.coordinate()) {
                MoveOutcome::Ignored => {
                    writeln!(output, "{} is already taken.", cell)?;
                    continue;
                }
                MoveOutcome::Placed(_) => {}
                MoveOutcome::Won { winning_move, final_board } => {
                    writeln!(output, "{}", final_board.display())?;
                    let winner = session.players().get(winning_move.player);
                    writeln!(output, "{} {} wins!", messages.win(), winner)?;
                    report_score(session, &mut output)?;
                }
                MoveOutcome::Draw { final_board, .. } => {
                    writeln!(output, "{}", final_board.display())?;
                    writeln!(output, "{}", messages.draw())?;
                    report_score(session, &mut output)?;
                }
            },
        }
        render(session, &mut output)?;
    }

    output.flush().context("Failed to flush output")?;
    info!("Console game finished");
    Ok(())
}

fn render<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", session.board().display())?;
    Ok(())
}

fn prompt<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    write!(output, "{} to move (column-row, reset, quit)> ", session.current_player())?;
    output.flush()?;
    Ok(())
}

fn report_score<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    let score = session.score();
    let [first, second] = session.players().as_slice();
    writeln!(
        output,
        "Score: {} {}, {} {}, draws {}",
        first.label(),
        score.wins_for(0),
        second.label(),
        score.wins_for(1),
        score.draws()
    )?;
    Ok(())
}
