//! Board representation and game-state types.
//!
//! Contains the square grid and its scoring rule, board coordinates, player
//! records, and the overall game state.

pub mod grid;
pub mod player;
pub mod points;
pub mod position;
pub mod state;

pub use grid::{Board, BoardError, Cell, EMPTY, MAX_SIZE};
pub use player::{ActorRef, HeuristicFamily, HeuristicFocus, Player, PlayerType};
pub use position::BoardPosition;
pub use state::GameState;
