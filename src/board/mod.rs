//! Board representation and move legality.
//!
//! The board owns every piece in an arena and maps each of the 64 squares to
//! the piece standing on it. Legality queries ([`Board::can_move_to`]) test
//! the move on the board itself and undo it before returning.
//!
//! # Example
//! ```
//! use chess_referee::board::{Board, Color};
//!
//! let mut board = Board::new("Ada", "Bob");
//! let e2 = "e2".parse().unwrap();
//! let pawn = board.piece_id_at(e2).unwrap();
//! assert!(board.can_move_to(pawn, "e4".parse().unwrap()));
//! assert!(!board.can_move_to(pawn, "e5".parse().unwrap()));
//! assert_eq!(board.player(Color::White).pieces().len(), 16);
//! ```

mod between;
mod builder;
mod error;
mod movegen;
mod notation;
mod piece;
mod player;
pub mod prelude;
mod render;
mod simulate;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, PositionError, SetupError, TurnError};
pub use notation::{castle_notation, classic_notation, promotion_notation, MoveFacts};
pub use piece::{Piece, PieceId};
pub use player::Player;
pub use render::SymbolSet;
pub use state::Board;
pub use types::{CastleSide, CastlingRights, Color, Coordinate, PieceKind};
