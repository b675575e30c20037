//! Error types for the board model and move execution.

use crate::board::Point;

/// Errors raised by the board model.
///
/// These indicate malformed input from the caller rather than an ordinary
/// illegal move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("point ({row}, {col}) is off a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("unsupported board size {size}")]
    InvalidSize { size: usize },

    #[error("cannot parse vertex {0:?}")]
    BadVertex(String),
}

/// Reasons a placement was refused. Nothing is mutated in any of these cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("point ({row}, {col}) is off a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("illegal move at {0:?}: point not empty")]
    Occupied(Point),

    #[error("illegal move at {0:?}: suicide")]
    Suicide(Point),

    #[error("illegal move at {0:?}: repeats an earlier position")]
    Repetition(Point),

    #[error("game is over")]
    GameOver,
}

impl MoveError {
    /// True for the ordinary rule violations (occupied, suicide, repetition).
    ///
    /// Callers are expected to simply try another move after one of these.
    pub fn is_illegal(&self) -> bool {
        matches!(
            self,
            MoveError::Occupied(_) | MoveError::Suicide(_) | MoveError::Repetition(_)
        )
    }
}
