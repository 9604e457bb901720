//! Compact text notation for boards.
//!
//! Rows are separated by `/` and cells by `,`. An empty cell is written `.`;
//! occupied cells carry their integer owner tag. `-1` is also accepted as an
//! empty cell on input. The board size is the number of rows.
//!
//! Example 3x3 board: `0,.,1/.,.,./1,0,.`

use std::fmt;
use std::str::FromStr;

use crate::board::grid::{Board, BoardError, Cell, EMPTY};

/// Errors that can occur during notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty board notation")]
    Empty,

    #[error("invalid cell '{token}' in row {row}")]
    InvalidCell { row: usize, token: String },

    #[error(transparent)]
    Shape(#[from] BoardError),
}

/// Parses one cell token.
fn parse_cell(row: usize, token: &str) -> Result<Cell, NotationError> {
    if token == "." {
        return Ok(EMPTY);
    }
    token.parse::<Cell>().map_err(|_| NotationError::InvalidCell {
        row,
        token: token.to_string(),
    })
}

/// Parses a board from its notation.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::Empty);
    }

    let rows = s
        .split('/')
        .enumerate()
        .map(|(row, line)| {
            line.split(',')
                .map(|token| parse_cell(row, token.trim()))
                .collect::<Result<Vec<Cell>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Board::from_rows(&rows)?)
}

/// Encodes a board into its notation.
pub fn format_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::with_capacity(size * size * 2);

    for row in 0..size {
        if row > 0 {
            out.push('/');
        }
        for (column, &cell) in board.row(row).iter().enumerate() {
            if column > 0 {
                out.push(',');
            }
            if cell == EMPTY {
                out.push('.');
            } else {
                out.push_str(&cell.to_string());
            }
        }
    }

    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_board(self))
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}
