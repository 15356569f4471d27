//! Turn engine and its front-end protocol.
//!
//! [`Game`] owns the board and both players, validates and commits each
//! submitted move, and tracks check, checkmate, stalemate and the fifty-ply
//! rule. Front ends answer promotion and draw questions through
//! [`Prompter`].

mod game;
mod options;
mod protocol;


pub use game::{Game, GameState, MoveRecord, Outcome};
pub use options::{GameOptions, OptionError, DEFAULT_FIFTY_PLY_LIMIT};
pub use protocol::{parse_draw_answer, Prompter, ScriptedPrompter};
