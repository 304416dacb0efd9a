//! Line-oriented front end.
//!
//! Reads one command per line and prints the board after each one. Works
//! over any reader/writer pair so it can be driven from tests.

use crate::game::{EngineError, Phase, Position, TurnReport, parse_coordinates};
use crate::session::{Command, Session};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  1-9          play the cell with that keypad number
  row,col      play by coordinates (0-2 each), e.g. 1,2
  new          start a new game (scores are kept)
  scores       show the scoreboard
  reset-scores zero both scores
  quit         leave";

/// Console behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Print every report as one JSON line instead of the drawn board.
    pub json: bool,
}

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Request {
    Engine(Command),
    Scores,
    Help,
    Quit,
}

impl Request {
    fn parse(line: &str) -> Option<Self> {
        let request = match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Request::Quit,
            "n" | "new" => Request::Engine(Command::Reset),
            "s" | "scores" => Request::Scores,
            "reset-scores" => Request::Engine(Command::ResetScores),
            "h" | "help" | "?" => Request::Help,
            other => {
                let (row, column) = parse_coordinates(other)?;
                Request::Engine(Command::PlayTurn { row, column })
            }
        };
        Some(request)
    }
}

/// Runs the prompt loop until `quit` or end of input.
///
/// The session must already have its players.
#[instrument(skip_all, fields(json = options.json))]
pub fn run_console<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    options: ConsoleOptions,
) -> Result<()> {
    let game = session
        .game()
        .context("Players must be set up before the console starts")?;
    let mut report = game.report(true, None);

    info!("Console started");
    writeln!(output, "Type 'help' for commands.")?;
    show(output, &report, options)?;

    let mut lines = input.lines();
    loop {
        prompt(output, &report)?;
        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match Request::parse(&line) {
            None => {
                writeln!(
                    output,
                    "Unrecognized input {:?}. Type 'help' for commands.",
                    line.trim()
                )?;
            }
            Some(Request::Quit) => break,
            Some(Request::Help) => writeln!(output, "{}", HELP)?,
            Some(Request::Scores) => scoreboard(output, &report)?,
            Some(Request::Engine(command)) => match session.dispatch(command) {
                Ok(event) => {
                    report = event.into_report();
                    show(output, &report, options)?;
                }
                Err(err @ EngineError::OutOfRange { .. }) => {
                    warn!(error = %err, "Rejected coordinates");
                    writeln!(output, "{}", err)?;
                }
                Err(err) => return Err(err).context("Session rejected command"),
            },
        }
    }

    info!("Console finished");
    writeln!(output, "Final score:")?;
    scoreboard(output, &report)?;
    Ok(())
}

fn show<W: Write>(output: &mut W, report: &TurnReport, options: ConsoleOptions) -> Result<()> {
    if options.json {
        let line = serde_json::to_string(report).context("Failed to encode report")?;
        writeln!(output, "{}", line)?;
        return Ok(());
    }

    let board = report.to_board();
    writeln!(output)?;
    writeln!(output, "{}", board)?;
    writeln!(output)?;
    writeln!(output, "{}", report.headline())?;
    match report.phase {
        Phase::AwaitingMove => {
            let open: Vec<String> = Position::open_cells(&board)
                .iter()
                .map(|pos| pos.keypad().to_string())
                .collect();
            writeln!(output, "Open cells: {}", open.join(" "))?;
        }
        Phase::GameOver if report.valid => {
            scoreboard(output, report)?;
            writeln!(output, "Type 'new' for another game or 'quit' to leave.")?;
        }
        Phase::GameOver => {}
    }
    Ok(())
}

fn prompt<W: Write>(output: &mut W, report: &TurnReport) -> Result<()> {
    match report.phase {
        Phase::AwaitingMove => write!(output, "{} > ", report.current_player)?,
        Phase::GameOver => write!(output, "> ")?,
    }
    output.flush()?;
    Ok(())
}

fn scoreboard<W: Write>(output: &mut W, report: &TurnReport) -> Result<()> {
    for player in &report.players {
        writeln!(output, "  {:<20} {}", player.to_string(), player.wins())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requests() {
        assert_eq!(Request::parse("QUIT"), Some(Request::Quit));
        assert_eq!(Request::parse(" new "), Some(Request::Engine(Command::Reset)));
        assert_eq!(
            Request::parse("5"),
            Some(Request::Engine(Command::PlayTurn { row: 1, column: 1 }))
        );
        assert_eq!(
            Request::parse("3,3"),
            Some(Request::Engine(Command::PlayTurn { row: 3, column: 3 }))
        );
        assert_eq!(Request::parse("banana"), None);
    }
}
