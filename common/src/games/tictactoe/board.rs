use std::fmt;

use super::error::GameError;
use super::types::{BOARD_SIZE, Cell, Mark, Outcome, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three row strings such as `"XO."`. Both `.` and
    /// space denote an empty cell. Returns `None` on malformed input.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != BOARD_SIZE {
                return None;
            }
            for (col, c) in text.chars().enumerate() {
                board.cells[row][col] = Cell::from_char(c)?;
            }
        }
        Some(board)
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn apply(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if self.cell(pos) != Some(Cell::Empty) {
            return Err(GameError::InvalidMove {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row][pos.col] = Cell::from(mark);
        Ok(())
    }

    /// Clears a cell again. Only search backtracking calls this.
    pub(crate) fn undo(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Cell::Empty;
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Win(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns `(x_count, o_count)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(x, o), cell| match cell {
                Cell::X => (x + 1, o),
                Cell::O => (x, o + 1),
                Cell::Empty => (x, o),
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let line: Vec<String> = cells.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
