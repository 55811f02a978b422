use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::error::GameError;
use super::minimax::{MAXIMIZING_MARK, TrialMove, search_in_place};
use super::types::{Difficulty, Position};

/// Picks the computer's next move for `board` at the given difficulty.
///
/// The board is only borrowed; candidates are tried on a private copy and
/// cleared again before the next one is scored.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Position, GameError> {
    let selected = match difficulty.search_depth() {
        None => calculate_random_move(board, rng),
        Some(depth) => calculate_minimax_move(board, depth).map(|(pos, score)| {
            log!("{} bot scored {} at {}", difficulty, score, pos);
            pos
        }),
    };

    let pos = selected.ok_or(GameError::NoLegalMove)?;
    log!("{} bot selected {}", difficulty, pos);
    Ok(pos)
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.legal_moves();
    rng.choose(&available_moves).copied()
}

/// Returns the best move and its score. Ties go to the move that comes first
/// in `legal_moves()` order.
pub fn calculate_minimax_move(board: &Board, depth: u32) -> Option<(Position, i32)> {
    let mut scratch = *board;
    let mut best: Option<(Position, i32)> = None;

    for pos in board.legal_moves() {
        let Some(mut trial) = TrialMove::place(&mut scratch, pos, MAXIMIZING_MARK) else {
            continue;
        };
        let score = search_in_place(&mut trial, depth, false);
        drop(trial);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best
}
