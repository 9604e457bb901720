//! Text protocol handling.
//!
//! Board notation used on the wire and the line-command parser for the
//! inspection binary's main loop.

pub mod notation;
pub mod parser;

pub use notation::{format_board, parse_board, NotationError};
pub use parser::{parse_command, Command};
