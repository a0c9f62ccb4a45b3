//! Line-oriented driver for stepping through a session.
//!
//! Reads one command per line and writes the resulting peg state. Invalid
//! input is reported and leaves the session as it was.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::TowerHeight;
use crate::error::CommandError;
use crate::listing::{format_step, format_towers};
use crate::session::Session;

const HELP: &str = "\
Commands:
  next, n      apply the next move
  restart, r   put all disks back on peg 0
  set <n>      start over with a tower of n disks
  show         print the pegs
  help         print this message
  quit, q      leave";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Restart,
    Set(TowerHeight),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "next" | "n" => Self::Next,
            "restart" | "r" => Self::Restart,
            "set" => {
                let height = words.next().ok_or(CommandError::MissingHeight)?;
                Self::Set(height.parse()?)
            }
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };
        Ok(Some(command))
    }
}

/// Runs commands from `input` against `session` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "Tower height = {}", session.height())?;
    write!(output, "{}", format_towers(session.towers()))?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                debug!(%err, line = %line, "rejected command");
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        match command {
            Command::Next => {
                if session.is_finished() {
                    writeln!(output, "Already solved; use `restart` or `set <n>`.")?;
                    continue;
                }
                let step = session.step();
                writeln!(output, "{}", format_step(&step))?;
                write!(output, "{}", format_towers(session.towers()))?;
                if session.is_finished() {
                    writeln!(output, "Solved in {} moves.", session.applied())?;
                }
            }
            Command::Restart => {
                session.restart();
                writeln!(output, "Tower height = {}", session.height())?;
                write!(output, "{}", format_towers(session.towers()))?;
            }
            Command::Set(height) => {
                session.set_height(height);
                writeln!(output, "Tower height = {}", session.height())?;
                write!(output, "{}", format_towers(session.towers()))?;
            }
            Command::Show => {
                write!(output, "{}", format_towers(session.towers()))?;
                writeln!(
                    output,
                    "{} of {} moves applied",
                    session.applied(),
                    session.applied() + session.remaining()
                )?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }

    Ok(())
}
