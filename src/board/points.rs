//! Placement scoring.
//!
//! `giving_points` values an empty cell by how close the four lines through it
//! are to being completed:
//!
//! - row and column: worth `size` each when the target is the only empty cell
//!   left in that line;
//! - rising and falling diagonals: worth the diagonal's full span (target
//!   included) when every other cell on it is occupied and the span is at
//!   least two cells.
//!
//! Each diagonal is walked in two phases. The second direction is only walked
//! when the first one reached the edge without meeting an empty cell.

use super::grid::{Board, Cell, EMPTY};
use super::position::BoardPosition;

/// Shortest diagonal span that earns points.
const MIN_DIAGONAL_SPAN: usize = 2;

/// A step of `(row, column)` deltas.
type Step = (isize, isize);

/// The two diagonals through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Diagonal {
    /// Bottom-left to top-right (`/`).
    Rising,
    /// Top-left to bottom-right (`\`).
    Falling,
}

impl Diagonal {
    /// Walk directions, in scan order.
    const fn directions(self) -> (Step, Step) {
        match self {
            Diagonal::Rising => ((1, -1), (-1, 1)),
            Diagonal::Falling => ((-1, -1), (1, 1)),
        }
    }
}

/// Outcome of walking from a cell toward the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Walk {
    /// Cells examined, not counting the origin.
    visited: usize,
    /// Whether the walk stopped on an empty cell.
    found_empty: bool,
}

impl Board {
    /// Points for placing at `(row, column)`, or `None` if the cell is taken.
    pub fn giving_points(&self, row: usize, column: usize) -> Option<usize> {
        if !self.is_free(row, column) {
            return None;
        }

        let points = self.line_points(self.row(row).iter().copied())
            + self.line_points(self.column(column))
            + self.diagonal_points(row, column, Diagonal::Rising)
            + self.diagonal_points(row, column, Diagonal::Falling);

        Some(points)
    }

    pub fn giving_points_by_position(&self, position: BoardPosition) -> Option<usize> {
        self.giving_points(position.row, position.column)
    }

    /// `size` if the line holds at most one empty cell. Stops counting at two.
    fn line_points(&self, line: impl Iterator<Item = Cell>) -> usize {
        let empties = line.filter(|&c| c == EMPTY).take(2).count();
        if empties <= 1 {
            self.size()
        } else {
            0
        }
    }

    fn diagonal_points(&self, row: usize, column: usize, diagonal: Diagonal) -> usize {
        let (first, second) = diagonal.directions();

        let a = self.walk(row, column, first);
        if a.found_empty {
            return 0;
        }
        let b = self.walk(row, column, second);
        if b.found_empty {
            return 0;
        }

        let span = a.visited + b.visited + 1;
        if span >= MIN_DIAGONAL_SPAN {
            span
        } else {
            0
        }
    }

    /// Steps away from `(row, column)` until the edge or the first empty cell.
    fn walk(&self, row: usize, column: usize, (dr, dc): Step) -> Walk {
        let size = self.size();
        let mut walk = Walk {
            visited: 0,
            found_empty: false,
        };
        let (mut r, mut c) = (row, column);

        while !walk.found_empty {
            let next = r
                .checked_add_signed(dr)
                .zip(c.checked_add_signed(dc))
                .filter(|&(nr, nc)| nr < size && nc < size);
            let Some((nr, nc)) = next else { break };

            walk.visited += 1;
            if self.get_cell(nr, nc) == EMPTY {
                walk.found_empty = true;
            }
            (r, c) = (nr, nc);
        }

        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A board of `size` with every cell owned by player 0 except `free`.
    fn filled_except(size: usize, free: &[(usize, usize)]) -> Board {
        let mut board = Board::from_rows(&vec![vec![0; size]; size]).unwrap();
        for &(r, c) in free {
            board.set_cell(r, c, EMPTY);
        }
        board
    }

    #[test]
    fn occupied_cell_gives_none() {
        let mut board = Board::new(5);
        board.set_cell(1, 1, 0);
        assert_eq!(board.giving_points(1, 1), None);
        assert_eq!(board.giving_points_by_position(BoardPosition::new(1, 1)), None);
    }

    #[test]
    fn none_exactly_when_not_free() {
        let board = Board::from_rows(&[[EMPTY, 0, 1], [1, EMPTY, 0], [0, 0, EMPTY]]).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(board.giving_points(r, c).is_none(), !board.is_free(r, c));
            }
        }
    }

    #[test]
    fn empty_board_center_scores_zero() {
        // Every line through the center still has other empty cells.
        let board = Board::new(5);
        assert_eq!(board.giving_points(2, 2), Some(0));
    }

    #[test]
    fn last_empty_cell_in_center_completes_all_lines() {
        let board = filled_except(5, &[(2, 2)]);
        assert_eq!(board.giving_points(2, 2), Some(5 + 5 + 5 + 5));
    }

    #[test]
    fn corner_has_single_cell_rising_diagonal() {
        // Rising span through (0, 0) is just the corner itself.
        let board = filled_except(5, &[(0, 0)]);
        assert_eq!(board.diagonal_points(0, 0, Diagonal::Rising), 0);
        assert_eq!(board.diagonal_points(0, 0, Diagonal::Falling), 5);
        assert_eq!(board.giving_points(0, 0), Some(5 + 5 + 5));
    }

    #[test]
    fn second_empty_in_row_cancels_row_points() {
        let board = filled_except(5, &[(2, 2), (2, 4)]);
        assert_eq!(board.line_points(board.row(2).iter().copied()), 0);
        assert_eq!(board.giving_points(2, 2), Some(5 + 5 + 5));
    }

    #[test]
    fn second_empty_in_column_cancels_column_points() {
        let board = filled_except(4, &[(1, 3), (3, 3)]);
        // Rising span (0,4)..(3,1) is clipped to (1,3),(2,2),(3,1); falling
        // span is (0,2),(1,3).
        assert_eq!(board.line_points(board.column(3)), 0);
        assert_eq!(board.giving_points(1, 3), Some(4 + 0 + 3 + 2));
    }

    #[test]
    fn empty_cell_on_diagonal_cancels_diagonal() {
        let board = filled_except(5, &[(2, 2), (0, 0)]);
        assert_eq!(board.diagonal_points(2, 2, Diagonal::Falling), 0);
        assert_eq!(board.diagonal_points(2, 2, Diagonal::Rising), 5);
        assert_eq!(board.giving_points(2, 2), Some(15));
    }

    #[test]
    fn empty_found_in_first_direction_skips_second() {
        let board = filled_except(5, &[(2, 2), (3, 1)]);
        let a = board.walk(2, 2, (1, -1));
        assert_eq!(a, Walk { visited: 1, found_empty: true });
        assert_eq!(board.diagonal_points(2, 2, Diagonal::Rising), 0);
    }

    #[test]
    fn empty_found_in_second_direction() {
        let board = filled_except(5, &[(2, 2), (0, 4)]);
        let b = board.walk(2, 2, (-1, 1));
        assert_eq!(b, Walk { visited: 2, found_empty: true });
        assert_eq!(board.diagonal_points(2, 2, Diagonal::Rising), 0);
    }

    #[test]
    fn off_center_diagonals_are_shorter() {
        // (1, 0) on a 4x4 board: rising span is (1,0),(0,1); falling is
        // (1,0),(2,1),(3,2).
        let board = filled_except(4, &[(1, 0)]);
        assert_eq!(board.diagonal_points(1, 0, Diagonal::Rising), 2);
        assert_eq!(board.diagonal_points(1, 0, Diagonal::Falling), 3);
        assert_eq!(board.giving_points(1, 0), Some(4 + 4 + 2 + 3));
    }

    #[test]
    fn single_cell_board() {
        let board = Board::new(1);
        assert_eq!(board.giving_points(0, 0), Some(1 + 1));
    }

    #[test]
    fn two_by_two_anti_corner() {
        let board = filled_except(2, &[(0, 1)]);
        assert_eq!(board.giving_points(0, 1), Some(2 + 2 + 2));
    }

    #[test]
    fn owner_tags_do_not_matter() {
        let mut board = filled_except(3, &[(1, 1)]);
        board.set_cell(0, 0, 1);
        board.set_cell(2, 2, 42);
        assert_eq!(board.giving_points(1, 1), Some(3 * 4));
    }
}
