//! Command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the main loop can dispatch on.

use tracing::warn;

use crate::board::{Cell, MAX_SIZE};

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Start a new game, optionally overriding the configured board size.
    NewGame { size: Option<usize> },

    /// Replace the board with one given in notation.
    Position { notation: String },

    /// Write an owner tag (or `-1`) into a cell.
    Set { row: usize, column: usize, value: Cell },

    /// Score a single cell.
    Points { row: usize, column: usize },

    /// Score every free cell.
    Scores,

    /// Print the board, fill status and next player.
    Show,

    /// Print the game state as JSON.
    Snapshot,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&name, args) = tokens.split_first()?;

    match name {
        "isready" => Some(Command::IsReady),
        "scores" => Some(Command::Scores),
        "show" => Some(Command::Show),
        "snapshot" => Some(Command::Snapshot),
        "quit" => Some(Command::Quit),

        "newgame" => parse_newgame(args),
        "position" => parse_position(args),
        "set" => parse_set(args),
        "points" => parse_points(args),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses a numeric argument, logging when it is malformed.
fn parse_arg<T: std::str::FromStr>(command: &str, what: &str, token: &str) -> Option<T> {
    match token.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(command, "invalid {} value: '{}'", what, token);
            None
        }
    }
}

/// Parses `newgame [size]`.
fn parse_newgame(args: &[&str]) -> Option<Command> {
    match args {
        [] => Some(Command::NewGame { size: None }),
        [size] => {
            let size: usize = parse_arg("newgame", "size", size)?;
            if size == 0 {
                warn!("malformed newgame: size must be > 0");
                return None;
            }
            if size > MAX_SIZE {
                warn!(size, max = MAX_SIZE, "malformed newgame: size too large");
                return None;
            }
            Some(Command::NewGame { size: Some(size) })
        }
        _ => {
            warn!("malformed newgame: expected 'newgame [size]'");
            None
        }
    }
}

/// Parses `position <notation>`.
fn parse_position(args: &[&str]) -> Option<Command> {
    if args.is_empty() {
        warn!("malformed position: expected 'position <notation>'");
        return None;
    }
    // Notation may have been written with spaces after separators.
    Some(Command::Position {
        notation: args.concat(),
    })
}

/// Parses `set <row> <col> <value>`.
fn parse_set(args: &[&str]) -> Option<Command> {
    let [row, column, value] = args else {
        warn!("malformed set: expected 'set <row> <col> <value>'");
        return None;
    };
    Some(Command::Set {
        row: parse_arg("set", "row", row)?,
        column: parse_arg("set", "column", column)?,
        value: parse_arg("set", "cell", value)?,
    })
}

/// Parses `points <row> <col>`.
fn parse_points(args: &[&str]) -> Option<Command> {
    let [row, column] = args else {
        warn!("malformed points: expected 'points <row> <col>'");
        return None;
    };
    Some(Command::Points {
        row: parse_arg("points", "row", row)?,
        column: parse_arg("points", "column", column)?,
    })
}
