//! Game state representation.
//!
//! Bundles the board with the ordered player list and the index of the player
//! to move. Turn advancement and scoring belong to the caller, which mutates
//! the public fields directly.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::player::Player;
use crate::config::GameConfig;

/// Complete game snapshot at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub size: usize,
    pub board: Board,
    pub players: Vec<Player>,
    /// Index into `players`.
    pub next_player: usize,
}

impl GameState {
    /// Creates a state with an empty board of `size` and player 0 to move.
    pub fn new(size: usize, players: Vec<Player>) -> Self {
        GameState {
            size,
            board: Board::new(size),
            players,
            next_player: 0,
        }
    }

    /// Creates a fresh state from a configuration.
    ///
    /// Panics if `config.size` is zero. Run `GameConfig::validate` first.
    pub fn from_config(config: &GameConfig) -> Self {
        GameState::new(config.size, config.players.clone())
    }

    /// The player whose turn it is, if `next_player` is in range.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.next_player)
    }
}
