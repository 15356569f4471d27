//! Chess move legality and game-state referee.
//!
//! [`board`] holds the rules: pieces, per-variant movement, check detection by
//! simulation, notation and rendering. [`engine`] drives a two-player game one
//! half-move at a time and decides when it ends.
//!
//! # Example
//! ```
//! use chess_referee::engine::{Game, GameOptions, GameState, ScriptedPrompter};
//!
//! let mut game = Game::new(GameOptions::default(), ScriptedPrompter::new());
//! for (from, to) in [("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")] {
//!     game.submit_turn(from, to).unwrap();
//! }
//! assert_eq!(game.state(), GameState::DecisiveEnd);
//! assert_eq!(game.last_move().unwrap().notation, "Qh4+ ");
//! ```

pub mod board;
pub mod engine;

pub use board::{Board, BoardBuilder, Color, Coordinate, PieceKind};
pub use engine::{Game, GameOptions, GameState};
