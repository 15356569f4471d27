//! Per-variant movement rules and the shared legality gate.
//!
//! Three layers, from cheapest to full:
//! - [`Board::is_valid_move`]: geometry and variant state only. Pawns and
//!   kings stage their special-move facts here.
//! - [`Board::attacks`]: the reach used by square safety. Geometry, friendly
//!   occupancy and obstruction, never a nested simulation.
//! - [`Board::can_move_to`]: the full gate, ending in a hypothetical move
//!   that checks the mover's king.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::piece::{Piece, PieceId, Variant};
use super::{Board, Coordinate, PieceKind};

impl Board {
    /// Geometric and state legality of moving `id` to `target`, ignoring
    /// friendly occupancy, obstruction and king safety.
    ///
    /// Never changes the position. A pawn or king may stage the en-passant
    /// victim or castling rook for a following [`Board::move_to`] to the same
    /// target.
    #[must_use]
    pub fn is_valid_move(&self, id: PieceId, target: Coordinate) -> bool {
        let Some(piece) = self.piece(id) else {
            return false;
        };
        let from = piece.position();
        if from == target {
            return false;
        }
        match &piece.variant {
            Variant::Pawn(_) => self.pawn_valid_move(id, piece, target),
            Variant::Knight => knights::knight_reach(from, target),
            Variant::Bishop | Variant::Rook(_) | Variant::Queen => {
                sliders::slider_reach(piece.kind(), from, target)
            }
            Variant::King(_) => self.king_valid_move(piece, target),
        }
    }

    /// Whether the live piece `id` reaches `target` for the purpose of square
    /// safety: it could capture there if an enemy stood on it.
    ///
    /// Pinned pieces still attack. Pawns attack their two forward diagonals,
    /// kings their eight neighbours.
    #[must_use]
    pub fn attacks(&self, id: PieceId, target: Coordinate) -> bool {
        let Some(piece) = self.piece(id) else {
            return false;
        };
        let from = piece.position();
        if from == target || self.is_friendly(piece, target) {
            return false;
        }
        match piece.kind() {
            PieceKind::Pawn => pawns::pawn_attack(piece.color(), from, target),
            PieceKind::Knight => knights::knight_reach(from, target),
            PieceKind::King => kings::king_step(from, target),
            kind => sliders::slider_reach(kind, from, target) && !self.path_blocked(from, target),
        }
    }

    /// The single legality gate: `id` is live, the move is geometrically
    /// valid, the target holds neither a friendly piece nor a king, no piece
    /// stands in the way, and the mover's king is safe afterwards.
    ///
    /// The board is unchanged when this returns, whatever the answer.
    pub fn can_move_to(&mut self, id: PieceId, target: Coordinate) -> bool {
        if !self.is_live(id) || !self.is_valid_move(id, target) {
            return false;
        }
        let piece = &self.pieces[id.0];
        let (color, kind, from) = (piece.color(), piece.kind(), piece.position());

        if self.is_friendly(piece, target) {
            return false;
        }
        if self
            .piece_at(target)
            .is_some_and(|p| p.kind() == PieceKind::King)
        {
            return false;
        }
        if kind.is_slider() && self.path_blocked(from, target) {
            return false;
        }

        let opponent = color.opponent();
        if kind == PieceKind::King {
            self.check_destination(id, target, opponent)
        } else {
            let king = self.player(color).king();
            self.check_square(king, id, target, opponent)
        }
    }

    /// Commit a move without checking it. Returns the captured piece, which
    /// has already left its owner's set and its slot.
    ///
    /// Run [`Board::can_move_to`] for the same target first: it stages the
    /// en-passant victim and the castling rook this commit consumes.
    pub fn move_to(&mut self, id: PieceId, target: Coordinate) -> Option<PieceId> {
        let from = self.pieces[id.0].position();
        let captured = match self.pieces[id.0].kind() {
            PieceKind::Pawn => self.commit_pawn(id, from, target),
            PieceKind::Rook => {
                self.commit_rook(id, from);
                self.double_step = None;
                self.piece_id_at(target)
            }
            PieceKind::King => {
                self.commit_king(id, target);
                self.double_step = None;
                self.piece_id_at(target)
            }
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => {
                self.double_step = None;
                self.piece_id_at(target)
            }
        };

        if let Some(victim) = captured {
            let victim_piece = &self.pieces[victim.0];
            let (at, color) = (victim_piece.position(), victim_piece.color());
            self.set_slot(at, None);
            self.player_mut(color).remove_piece(victim);
        }
        self.relocate(id, from, target);
        captured
    }

    /// Every square the piece on `at` can legally reach, a1 first.
    pub fn legal_destinations(&mut self, at: Coordinate) -> Vec<Coordinate> {
        let Some(id) = self.piece_id_at(at) else {
            return Vec::new();
        };
        Coordinate::all()
            .filter(|&target| self.can_move_to(id, target))
            .collect()
    }

    /// Replace a pawn by a freshly made piece of `kind` on the same square,
    /// in both the slot and the owner's set. The new piece is worth what the
    /// pawn was worth.
    pub fn promote(&mut self, pawn: PieceId, kind: PieceKind) -> PieceId {
        let old = &self.pieces[pawn.0];
        let (color, at, value) = (old.color(), old.position(), old.value());

        let mut piece = Piece::new(kind, color, at).with_value(value);
        if kind == PieceKind::Rook {
            piece = piece.moved();
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(piece);
        self.set_slot(at, Some(id));
        self.player_mut(color).replace_piece(pawn, id);
        if self.double_step == Some(pawn) {
            self.double_step = None;
        }
        id
    }

    fn relocate(&mut self, id: PieceId, from: Coordinate, to: Coordinate) {
        self.set_slot(from, None);
        self.set_slot(to, Some(id));
        self.pieces[id.0].set_position(to);
    }

    fn is_friendly(&self, piece: &Piece, target: Coordinate) -> bool {
        self.piece_at(target)
            .is_some_and(|other| other.color() == piece.color())
    }
}
