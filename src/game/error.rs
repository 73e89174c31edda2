//! Error types for turn and game operations.
//!
//! Every variant here marks an invalid operation: a caller bug, not a
//! transient failure. Correct the state before retrying. Defensive
//! leniencies (out-of-range hold indices, short dice slices) are absorbed
//! by the operations themselves and never reach this enum.

use thiserror::Error;

use crate::scoring::{Category, ScoreCardError};

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by the turn and game state machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game requires between two and four seated players.
    #[error("game requires 2-4 players, got {got}")]
    InvalidPlayerCount { got: usize },

    /// All three rolls of the turn are spent; only category selection is legal.
    #[error("no rolls remaining this turn")]
    NoRollsRemaining,

    /// Category selection needs a complete roll on the table.
    #[error("no dice rolled this turn")]
    NoDiceRolled,

    /// The active player already committed a score for this category.
    #[error("category {0:?} is already filled")]
    CategoryAlreadyFilled(Category),

    /// The game has not been started.
    #[error("game has not started")]
    GameNotStarted,

    /// The game is over; no further operations are legal.
    #[error("game is finished")]
    GameFinished,
}

impl From<ScoreCardError> for GameError {
    fn from(err: ScoreCardError) -> Self {
        match err {
            ScoreCardError::AlreadyFilled(category) => GameError::CategoryAlreadyFilled(category),
        }
    }
}
