//! Core value types.
//!
//! - `Coordinate` - validated grid location
//! - `PieceKind` and `Color` - entity kinds and sides
//! - `CastleSide` and `CastlingRights` - castling state

mod castling;
mod coordinate;
mod piece;

pub use castling::{CastleSide, CastlingRights};
pub use coordinate::Coordinate;
pub use piece::{Color, PieceKind};
