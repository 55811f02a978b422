use super::types::{BOARD_SIZE, Cell, Mark, Position, WinningLine};

type Line = [(usize, usize); BOARD_SIZE];

/// Rows top to bottom, columns left to right, then the main diagonal and the
/// anti-diagonal. The scan order is fixed so results are reproducible.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Option<WinningLine> {
    for line in &LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let Some(mark) = cells[r0][c0].mark() else {
            continue;
        };
        if cells[r1][c1] == cells[r0][c0] && cells[r2][c2] == cells[r0][c0] {
            return Some(WinningLine {
                mark,
                cells: line.map(|(row, col)| Position::new(row, col)),
            });
        }
    }
    None
}
