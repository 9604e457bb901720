//! Hint bundles handed to external AI strategies.
//!
//! Strategies that weight a single candidate receive an `AiWeightState`;
//! strategies that order candidates receive an `AiOrderState`. Both are plain
//! data. Ranking happens outside this crate, usually by calling
//! `Board::giving_points` on cloned boards.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardPosition};

/// Context for weighting one candidate move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiWeightState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<BoardPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_player: Option<usize>,
}

/// Candidate positions to be put in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOrderState {
    #[serde(default)]
    pub positions: Vec<BoardPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

impl AiOrderState {
    /// Lists every free cell of `board`, in row-major order.
    pub fn free_cells(board: &Board) -> Self {
        AiOrderState {
            positions: board.free_positions().collect(),
            size: Some(board.size()),
        }
    }
}
