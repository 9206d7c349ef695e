//! Error types for tour construction
//!
//! Configuration problems are reported before any attempt runs; search
//! exhaustion is reported once the attempt budget is spent.

use crate::Square;
use thiserror::Error;

/// Errors returned by the tour builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// Board size is zero or too large to address
    #[error("Invalid board size: {size}")]
    InvalidBoardSize { size: usize },

    /// Start square is not on the board
    #[error("Start square {start} is outside the {size}x{size} board")]
    StartOutOfBounds { start: Square, size: usize },

    /// Attempt budget must be positive
    #[error("Attempt budget must be at least 1")]
    InvalidAttemptBudget,

    /// Every attempt ended in a dead end
    #[error("Could not find a knight's tour after {attempts} attempts")]
    NotFound { attempts: usize },
}

impl TourError {
    /// Whether the error comes from the inputs rather than the search
    pub fn is_config_error(&self) -> bool {
        !matches!(self, TourError::NotFound { .. })
    }
}

/// Result type alias for tour operations
pub type TourResult<T> = Result<T, TourError>;

/// Ways a square sequence can fail to be a knight's tour
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathDefect {
    #[error("Board size {size} has too many squares to address")]
    UnaddressableSize { size: usize },

    #[error("Path has {actual} squares, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Square {square} at step {step} is off the board")]
    OutOfBounds { step: usize, square: Square },

    #[error("Square {square} visited again at step {step}")]
    Revisited { step: usize, square: Square },

    #[error("Step {step} from {from} to {to} is not a knight move")]
    NotAKnightMove { step: usize, from: Square, to: Square },
}
