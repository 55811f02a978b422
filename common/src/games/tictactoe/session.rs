use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::bot_controller::select_move;
use super::error::GameError;
use super::types::{Difficulty, Mark, Outcome, Position};

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingHumanMove,
    AwaitingComputerMove,
    Finished(Outcome),
}

/// One game of human (X, moves first) against the computer (O).
///
/// The computer replies inside [`Session::human_move`], so callers only ever
/// observe `AwaitingHumanMove` or `Finished`.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    difficulty: Difficulty,
    state: SessionState,
    rng: SessionRng,
    last_computer_move: Option<Position>,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, SessionRng::from_random())
    }

    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, SessionRng::new(seed))
    }

    pub fn with_rng(difficulty: Difficulty, rng: SessionRng) -> Self {
        log!("New {} session, seed {}", difficulty, rng.seed());
        Self {
            board: Board::new(),
            difficulty,
            state: SessionState::AwaitingHumanMove,
            rng,
            last_computer_move: None,
        }
    }

    pub fn human_move(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        if let SessionState::Finished(_) = self.state {
            return Err(GameError::GameOver);
        }

        let pos = Position::new(row, col);
        self.board.apply(pos, HUMAN_MARK)?;
        log!("Human played {}", pos);

        if self.finish_if_terminal() {
            return Ok(self.outcome());
        }

        self.state = SessionState::AwaitingComputerMove;
        self.play_computer_turn();
        Ok(self.outcome())
    }

    fn play_computer_turn(&mut self) {
        let placed = select_move(&self.board, self.difficulty, &mut self.rng)
            .and_then(|pos| self.board.apply(pos, COMPUTER_MARK).map(|_| pos));

        match placed {
            Ok(pos) => {
                self.last_computer_move = Some(pos);
                if !self.finish_if_terminal() {
                    self.state = SessionState::AwaitingHumanMove;
                }
            }
            Err(e) => {
                log!("Computer could not move ({}), scoring the game as a draw", e);
                self.state = SessionState::Finished(Outcome::Draw);
            }
        }
    }

    fn finish_if_terminal(&mut self) -> bool {
        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            log!("Game finished: {:?}", outcome);
            self.state = SessionState::Finished(outcome);
            return true;
        }
        false
    }

    pub fn current_board(&self) -> Board {
        self.board
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished(_))
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn last_computer_move(&self) -> Option<Position> {
        self.last_computer_move
    }
}
