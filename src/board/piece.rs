//! Piece entities held in the board's arena.
//!
//! A piece carries its color, capture value and a cached copy of the square
//! it stands on. The board slot is authoritative; the cached position is kept
//! equal to it by every committed move. Variant-specific state (pawn and king
//! staging, castling flags, first-move flags) lives inside [`Variant`].

use std::cell::Cell;

use super::render::SymbolSet;
use super::types::{CastleSide, CastlingRights, Color, Coordinate, PieceKind};

/// Identity of a piece for the whole game.
///
/// Identities index the board's arena and are never reused, so a captured
/// piece keeps its id even after it left play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct Piece {
    color: Color,
    position: Coordinate,
    value: u32,
    pub(crate) variant: Variant,
}

#[derive(Clone, Debug)]
pub(crate) enum Variant {
    Pawn(PawnState),
    Knight,
    Bishop,
    Rook(RookState),
    Queen,
    King(KingState),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct PawnState {
    pub(crate) has_moved: bool,
    /// Target square and victim of an en-passant capture, staged by the last
    /// `is_valid_move` that accepted one.
    pub(crate) en_passant: Cell<Option<(Coordinate, PieceId)>>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct RookState {
    pub(crate) has_moved: bool,
}

/// A castle accepted by `is_valid_move` and waiting for the commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StagedCastle {
    pub(crate) target: Coordinate,
    pub(crate) side: CastleSide,
    pub(crate) rook: PieceId,
}

#[derive(Clone, Debug)]
pub(crate) struct KingState {
    pub(crate) has_moved: bool,
    /// Set once either castle has been performed.
    pub(crate) has_castled: bool,
    /// Sides not yet disabled.
    pub(crate) rights: CastlingRights,
    pub(crate) castle: Cell<Option<StagedCastle>>,
}

impl Default for KingState {
    fn default() -> Self {
        KingState {
            has_moved: false,
            has_castled: false,
            rights: CastlingRights::all(),
            castle: Cell::new(None),
        }
    }
}

impl Variant {
    fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Variant::Pawn(PawnState::default()),
            PieceKind::Knight => Variant::Knight,
            PieceKind::Bishop => Variant::Bishop,
            PieceKind::Rook => Variant::Rook(RookState::default()),
            PieceKind::Queen => Variant::Queen,
            PieceKind::King => Variant::King(KingState::default()),
        }
    }
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, position: Coordinate) -> Self {
        Piece {
            color,
            position,
            value: kind.value(),
            variant: Variant::for_kind(kind),
        }
    }

    /// Override the capture value (promoted pieces keep the pawn's value).
    #[must_use]
    pub(crate) fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Mark the piece as having moved before, disabling first-move privileges.
    #[must_use]
    pub(crate) fn moved(mut self) -> Self {
        match &mut self.variant {
            Variant::Pawn(state) => state.has_moved = true,
            Variant::Rook(state) => state.has_moved = true,
            Variant::King(state) => {
                state.has_moved = true;
                state.rights = CastlingRights::none();
            }
            Variant::Knight | Variant::Bishop | Variant::Queen => {}
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        match self.variant {
            Variant::Pawn(_) => PieceKind::Pawn,
            Variant::Knight => PieceKind::Knight,
            Variant::Bishop => PieceKind::Bishop,
            Variant::Rook(_) => PieceKind::Rook,
            Variant::Queen => PieceKind::Queen,
            Variant::King(_) => PieceKind::King,
        }
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Cached square; always equal to the board slot holding this piece
    /// while it is in play.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Points the capturer earns
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn symbol(&self, symbols: SymbolSet) -> char {
        match symbols {
            SymbolSet::Unicode => self.kind().glyph(self.color),
            SymbolSet::Ascii => self.kind().ascii(self.color),
        }
    }

    /// First-move flag for pawns, rooks and kings; always false otherwise.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        match &self.variant {
            Variant::Pawn(state) => state.has_moved,
            Variant::Rook(state) => state.has_moved,
            Variant::King(state) => state.has_moved,
            Variant::Knight | Variant::Bishop | Variant::Queen => false,
        }
    }

    pub(crate) fn set_position(&mut self, to: Coordinate) {
        self.position = to;
    }

    pub(crate) fn king_state(&self) -> Option<&KingState> {
        match &self.variant {
            Variant::King(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn king_state_mut(&mut self) -> Option<&mut KingState> {
        match &mut self.variant {
            Variant::King(state) => Some(state),
            _ => None,
        }
    }
}
