pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::tictactoe::{
    Board, Cell, Difficulty, GameError, Mark, Outcome, Position, Session, SessionState,
    search, select_move,
};
