use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("layout must contain exactly {expected} markers, got {actual}")]
    MalformedLayout { expected: CellCount, actual: usize },
    #[error("unrecognized marker {marker:?} at layout index {index}")]
    InvalidMarker { marker: char, index: usize },
    #[error("coordinates outside the board")]
    OutOfBounds,
    #[error("puzzle not found at specified index")]
    PuzzleNotFound { index: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
