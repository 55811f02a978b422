use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move: cell ({row}, {col}) is occupied or off the board")]
    InvalidMove { row: usize, col: usize },

    #[error("no legal moves available")]
    NoLegalMove,

    #[error("game already over")]
    GameOver,
}
