//! Engine state management.
//!
//! Holds the configuration and the current game state between commands and
//! answers the inspection commands of the text protocol.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::board::{Board, Cell, GameState};
use crate::config::{ConfigError, GameConfig};
use crate::protocol::notation::{format_board, parse_board, NotationError};
use crate::protocol::parser::Command;

/// Whether the main loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Holds the mutable state of the engine between commands.
pub struct Session {
    pub config: GameConfig,
    pub state: GameState,
}

impl Session {
    /// Creates a session with a fresh game from `config`, which is validated
    /// first.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::from_config(&config);
        Ok(Session { config, state })
    }

    /// Dispatches one command, writing any reply to `out`.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::IsReady => self.handle_isready(out)?,
            Command::NewGame { size } => self.new_game(size),
            Command::Position { notation } => {
                if let Err(e) = self.set_position(&notation) {
                    warn!("failed to parse board notation: {}", e);
                }
            }
            Command::Set { row, column, value } => self.set_cell(row, column, value),
            Command::Points { row, column } => self.handle_points(row, column, out)?,
            Command::Scores => self.handle_scores(out)?,
            Command::Show => self.handle_show(out)?,
            Command::Snapshot => self.handle_snapshot(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Resets the game, optionally with a different board size.
    pub fn new_game(&mut self, size: Option<usize>) {
        let size = size.unwrap_or(self.config.size);
        self.state = GameState::new(size, self.config.players.clone());
        debug!(size, "new game");
    }

    /// Replaces the board with one parsed from notation.
    pub fn set_position(&mut self, notation: &str) -> Result<(), NotationError> {
        let board = parse_board(notation)?;
        self.replace_board(board);
        Ok(())
    }

    fn replace_board(&mut self, board: Board) {
        debug!(size = board.size(), occupied = board.occupied_count(), "position set");
        self.state.size = board.size();
        self.state.board = board;
    }

    /// Writes a cell, ignoring coordinates outside the board.
    fn set_cell(&mut self, row: usize, column: usize, value: Cell) {
        let size = self.state.board.size();
        if row >= size || column >= size {
            warn!(row, column, size, "set: cell is outside the board");
            return;
        }
        self.state.board.set_cell(row, column, value);
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `points`: `points <n>`, or `points none` for a taken or
    /// off-board cell.
    pub fn handle_points<W: Write>(&self, row: usize, column: usize, out: &mut W) -> io::Result<()> {
        let board = &self.state.board;
        let points = if row < board.size() && column < board.size() {
            board.giving_points(row, column)
        } else {
            warn!(row, column, size = board.size(), "points: cell is outside the board");
            None
        };

        match points {
            Some(p) => writeln!(out, "points {}", p)?,
            None => writeln!(out, "points none")?,
        }
        out.flush()
    }

    /// Handles `scores`: one line per free cell, then `scoresok`.
    pub fn handle_scores<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let board = &self.state.board;
        for pos in board.free_positions() {
            if let Some(p) = board.giving_points_by_position(pos) {
                writeln!(out, "score {} {} {}", pos.row, pos.column, p)?;
            }
        }
        writeln!(out, "scoresok")?;
        out.flush()
    }

    /// Handles `show`.
    pub fn handle_show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "board {}", format_board(&self.state.board))?;
        writeln!(out, "filled {}", self.state.board.is_filled())?;
        writeln!(out, "next {}", self.state.next_player)?;
        out.flush()
    }

    /// Handles `snapshot`: the game state as one line of JSON.
    pub fn handle_snapshot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, &self.state)?;
        writeln!(out)?;
        out.flush()
    }
}
