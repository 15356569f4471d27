//! Fluent builder for constructing positions piece by piece.
//!
//! # Example
//! ```
//! use chess_referee::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.player(Color::White).pieces().len(), 2);
//! ```

use super::error::SetupError;
use super::piece::Piece;
use super::{Board, CastlingRights, Color, Coordinate, PieceKind};

/// A fluent builder for [`Board`] positions.
///
/// First-move flags are derived from where each piece stands: a pawn off its
/// start rank, a king off its home square or a rook off its corner counts as
/// having moved.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Coordinate, Color, PieceKind)>,
    names: [String; 2],
    no_castling: [bool; 2],
    double_step: Option<Coordinate>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            names: ["White".to_string(), "Black".to_string()],
            no_castling: [false; 2],
            double_step: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (file, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
                let file = file as i32;
                builder.pieces.push((at(file, color.back_rank()), color, kind));
                builder
                    .pieces
                    .push((at(file, color.pawn_start_rank()), color, PieceKind::Pawn));
            }
        }
        builder
    }

    #[must_use]
    pub fn names(mut self, white: &str, black: &str) -> Self {
        self.names = [white.to_string(), black.to_string()];
        self
    }

    /// Place a piece, replacing whatever was on that square.
    #[must_use]
    pub fn piece(mut self, square: Coordinate, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Coordinate) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Take away both castling rights of `color`.
    #[must_use]
    pub fn no_castling(mut self, color: Color) -> Self {
        self.no_castling[color.index()] = true;
        self
    }

    /// Mark the pawn on `pawn` as having just advanced two squares. Ignored
    /// unless a pawn stands there when the board is built.
    #[must_use]
    pub fn en_passant(mut self, pawn: Coordinate) -> Self {
        self.double_step = Some(pawn);
        self
    }

    /// Build the board.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] unless each color has exactly one king.
    pub fn build(self) -> Result<Board, SetupError> {
        for color in Color::BOTH {
            let kings = self
                .pieces
                .iter()
                .filter(|&&(_, c, kind)| c == color && kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(SetupError::MissingKing { color }),
                1 => {}
                _ => return Err(SetupError::ExtraKing { color }),
            }
        }

        let [white, black] = &self.names;
        let mut board = Board::empty(white, black);
        for &(square, color, kind) in &self.pieces {
            let mut piece = Piece::new(kind, color, square);
            if !on_home_square(square, color, kind) {
                piece = piece.moved();
            }
            board.spawn(piece);
        }

        for color in Color::BOTH {
            if !self.no_castling[color.index()] {
                continue;
            }
            if let Some(king) = board.king_id(color) {
                if let Some(state) = board.pieces[king.0].king_state_mut() {
                    state.rights = CastlingRights::none();
                }
            }
        }

        board.double_step = self
            .double_step
            .and_then(|square| board.piece_id_at(square))
            .filter(|&id| board.pieces[id.0].kind() == PieceKind::Pawn);

        Ok(board)
    }
}

fn on_home_square(square: Coordinate, color: Color, kind: PieceKind) -> bool {
    match kind {
        PieceKind::Pawn => square.y() == color.pawn_start_rank(),
        PieceKind::King => square == at(4, color.back_rank()),
        PieceKind::Rook => {
            square.y() == color.back_rank() && (square.x() == 0 || square.x() == 7)
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}

fn at(x: i32, y: i32) -> Coordinate {
    super::state::square(x, y)
}
