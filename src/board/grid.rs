//! Square grid of integer cells.
//!
//! The board owns a row-major `size * size` buffer. Cloning a board, or building
//! one from a matrix, always copies into a fresh buffer, so search code can fork
//! a position per hypothetical move without touching the original.

use serde::{Deserialize, Serialize};

use super::position::BoardPosition;

/// Value stored in a cell: `EMPTY` or an owner tag.
pub type Cell = i32;

/// Sentinel marking an unoccupied cell.
pub const EMPTY: Cell = -1;

/// Largest side length accepted from configuration files and protocol input.
pub const MAX_SIZE: usize = 1024;

/// Errors raised when building a board from a caller-supplied matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board matrix has no rows")]
    Empty,

    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// An N x N board with a fixed size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell empty.
    ///
    /// Panics if `size` is zero or `size * size` overflows.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        let len = size.checked_mul(size).expect("board size overflows");
        Board {
            size,
            cells: vec![EMPTY; len],
        }
    }

    /// Copies a square matrix into a new board. The size is the row count.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Board { size, cells })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat index of `(row, column)`. Panics when either coordinate is out of
    /// range, so a column overflow never lands in the next row.
    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.size && column < self.size,
            "cell ({}, {}) is outside a {}x{} board",
            row,
            column,
            self.size,
            self.size
        );
        row * self.size + column
    }

    pub fn get_cell(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: Cell) {
        let idx = self.index(row, column);
        self.cells[idx] = value;
    }

    pub fn get_cell_by_position(&self, position: BoardPosition) -> Cell {
        self.get_cell(position.row, position.column)
    }

    /// Writes `value` at `position`. An absent position is ignored.
    pub fn set_cell_by_position(&mut self, position: impl Into<Option<BoardPosition>>, value: Cell) {
        if let Some(position) = position.into() {
            self.set_cell(position.row, position.column, value);
        }
    }

    /// Returns true if the cell holds the empty sentinel.
    pub fn is_free(&self, row: usize, column: usize) -> bool {
        self.get_cell(row, column) == EMPTY
    }

    pub fn is_free_by_position(&self, position: BoardPosition) -> bool {
        self.is_free(position.row, position.column)
    }

    /// Returns true if no cell on the board is empty.
    pub fn is_filled(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    /// Number of cells holding an owner tag.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Borrowed view of one row.
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.size, "row {} is outside a {}x{} board", row, self.size, self.size);
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterates the cells of one column from top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(
            column < self.size,
            "column {} is outside a {}x{} board",
            column,
            self.size,
            self.size
        );
        self.cells.iter().skip(column).step_by(self.size).copied()
    }

    /// Owned copy of the board as a matrix.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    /// Empty cells in row-major order.
    pub fn free_positions(&self) -> impl Iterator<Item = BoardPosition> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == EMPTY)
            .map(move |(i, _)| BoardPosition::new(i / self.size, i % self.size))
    }
}

impl From<&Board> for Board {
    fn from(other: &Board) -> Self {
        other.clone()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}
