mod board;
mod bot_controller;
mod error;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{calculate_minimax_move, select_move};
pub use error::GameError;
pub use minimax::{LOSS_SCORE, NEUTRAL_SCORE, WIN_SCORE, search};
pub use session::{COMPUTER_MARK, HUMAN_MARK, Session, SessionState};
pub use types::{BOARD_SIZE, Cell, Difficulty, Mark, Outcome, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
