//! gridpoints library.
//!
//! Square-grid placement board with a line-completion scoring rule, the game
//! state around it, the hint bundles handed to AI strategies, configuration,
//! and the text protocol used by the `gridpoints` binary.

pub mod board;
pub mod config;
pub mod engine;
pub mod protocol;
pub mod search;

pub use board::{Board, BoardPosition, GameState, Player, PlayerType, EMPTY};
pub use config::GameConfig;
