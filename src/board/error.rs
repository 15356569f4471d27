//! Error types for board and turn operations.

use std::fmt;

use super::types::{Color, Coordinate};

/// Error type for malformed or out-of-range coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Column or row outside `[0, 7]`
    OutOfBounds { x: i32, y: i32 },
    /// Label not matching `[A-H][1-8]` (case-insensitive)
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OutOfBounds { x, y } => {
                write!(f, "Position ({x},{y}) is outside the board (0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(
                    f,
                    "Invalid square '{notation}': expected a letter A-H followed by a digit 1-8"
                )
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for rejected turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Start square empty or holding an opponent's piece
    WrongPiece { start: Coordinate, end: Coordinate },
    /// The piece cannot legally reach the destination
    IllegalDestination { start: Coordinate, end: Coordinate },
    /// The game already reached a terminal state
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::WrongPiece { start, end } => {
                write!(
                    f,
                    "This move is impossible, choose one of your pieces : {start} -> {end}"
                )
            }
            MoveError::IllegalDestination { start, end } => {
                write!(f, "This move is impossible : {start} -> {end}")
            }
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for label-based turn submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    InvalidPosition(PositionError),
    IllegalMove(MoveError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::InvalidPosition(err) => err.fmt(f),
            TurnError::IllegalMove(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::InvalidPosition(err) => Some(err),
            TurnError::IllegalMove(err) => Some(err),
        }
    }
}

impl From<PositionError> for TurnError {
    fn from(err: PositionError) -> Self {
        TurnError::InvalidPosition(err)
    }
}

impl From<MoveError> for TurnError {
    fn from(err: MoveError) -> Self {
        TurnError::IllegalMove(err)
    }
}

/// Error type for custom position construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    ExtraKing { color: Color },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing { color } => write!(f, "{color} has no king"),
            SetupError::ExtraKing { color } => write!(f, "{color} has more than one king"),
        }
    }
}

impl std::error::Error for SetupError {}
