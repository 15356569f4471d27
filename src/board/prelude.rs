//! Convenient re-exports for common usage.
//!
//! ```
//! use chess_referee::board::prelude::*;
//!
//! let board = Board::default();
//! assert_eq!(board.player(Color::Black).king(), "e8".parse::<Coordinate>().unwrap());
//! ```

pub use super::{Board, BoardBuilder, Color, Coordinate, MoveError, PieceKind, PositionError};
