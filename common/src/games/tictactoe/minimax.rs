use std::ops::{Deref, DerefMut};

use super::board::Board;
use super::types::{Mark, Outcome, Position};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const NEUTRAL_SCORE: i32 = 0;

/// The computer plays O and maximizes; the human plays X and minimizes.
pub const MAXIMIZING_MARK: Mark = Mark::O;

/// A mark placed on the board for the lifetime of the guard. Dropping the
/// guard clears the cell again, on every exit path.
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> TrialMove<'a> {
    /// `pos` must be one of `board.legal_moves()`.
    pub(crate) fn place(board: &'a mut Board, pos: Position, mark: Mark) -> Option<Self> {
        board.apply(pos, mark).ok()?;
        Some(Self { board, pos })
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.pos);
    }
}

/// Scores `board` from O's point of view by exhaustive minimax.
///
/// `maximizing` says whose hypothetical turn it is: `true` for O, `false`
/// for X. Wins score `+10`/`-10`; draws and states reached with no depth left
/// score `0`. The caller's board is never modified.
pub fn search(board: &Board, depth_remaining: u32, maximizing: bool) -> i32 {
    let mut scratch = *board;
    search_in_place(&mut scratch, depth_remaining, maximizing)
}

pub(crate) fn search_in_place(board: &mut Board, depth_remaining: u32, maximizing: bool) -> i32 {
    match board.outcome() {
        Outcome::Win(winner) if winner == MAXIMIZING_MARK => return WIN_SCORE,
        Outcome::Win(_) => return LOSS_SCORE,
        Outcome::Draw => return NEUTRAL_SCORE,
        Outcome::InProgress if depth_remaining == 0 => return NEUTRAL_SCORE,
        Outcome::InProgress => {}
    }

    let moves = board.legal_moves();

    if maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            let Some(mut trial) = TrialMove::place(board, pos, MAXIMIZING_MARK) else {
                continue;
            };
            let eval = search_in_place(&mut trial, depth_remaining - 1, false);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let opponent_mark = MAXIMIZING_MARK.opponent();
        let mut min_eval = i32::MAX;
        for pos in moves {
            let Some(mut trial) = TrialMove::place(board, pos, opponent_mark) else {
                continue;
            };
            let eval = search_in_place(&mut trial, depth_remaining - 1, true);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 3]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(search(&board(["OOO", "XX.", "X.."]), 5, false), WIN_SCORE);
        assert_eq!(search(&board(["XXX", "OO.", "O.."]), 5, true), LOSS_SCORE);
        assert_eq!(search(&board(["XOX", "XOO", "OXX"]), 5, true), NEUTRAL_SCORE);
    }

    #[test]
    fn test_depth_exhausted_is_neutral() {
        // O wins next ply, but there is no depth left to see it.
        let b = board(["XX.", "OO.", "X.."]);
        assert_eq!(search(&b, 0, true), NEUTRAL_SCORE);
        assert_eq!(search(&b, 1, true), WIN_SCORE);
    }

    #[test]
    fn test_minimizer_takes_immediate_win() {
        let b = board(["XX.", "OO.", "..."]);
        assert_eq!(search(&b, 1, false), LOSS_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_at_full_depth() {
        assert_eq!(search(&Board::new(), 9, false), NEUTRAL_SCORE);
        assert_eq!(search(&Board::new(), 9, true), NEUTRAL_SCORE);
    }

    #[test]
    fn test_fork_is_a_forced_win() {
        // O threatens both row 1 and the anti-diagonal; X can block only one.
        let b = board(["XXO", "OO.", "..X"]);
        assert_eq!(search(&b, 9, false), WIN_SCORE);
    }

    #[test]
    fn test_search_is_deterministic() {
        let b = board(["X..", ".O.", "..X"]);
        let first = search(&b, 6, true);
        for _ in 0..3 {
            assert_eq!(search(&b, 6, true), first);
        }
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let b = board(["X..", ".O.", "..."]);
        let before = b;
        search(&b, 9, false);
        assert_eq!(b, before);

        let mut in_place = b;
        search_in_place(&mut in_place, 9, false);
        assert_eq!(in_place, before);
    }

    #[test]
    fn test_trial_move_undoes_on_drop() {
        let mut b = Board::new();
        {
            let trial = TrialMove::place(&mut b, Position::new(1, 1), Mark::O).unwrap();
            assert_eq!(trial.winner(), None);
            assert_eq!(trial.legal_moves().len(), 8);
        }
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_trial_move_refuses_occupied_cell() {
        let mut b = board(["X..", "...", "..."]);
        assert!(TrialMove::place(&mut b, Position::new(0, 0), Mark::O).is_none());
        assert_eq!(b, board(["X..", "...", "..."]));
    }
}
