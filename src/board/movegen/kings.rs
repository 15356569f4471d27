use log::debug;

use super::super::piece::{Piece, PieceId, StagedCastle, Variant};
use super::super::state::square;
use super::super::{Board, CastleSide, CastlingRights, Coordinate, PieceKind};

const KING_HOME_FILE: i32 = 4;

/// One square in any of the eight directions.
pub(super) fn king_step(from: Coordinate, target: Coordinate) -> bool {
    let m = from.magnitude(target);
    m == 1 || (m == 2 && from.same_diagonal(target))
}

impl Board {
    pub(super) fn king_valid_move(&self, king: &Piece, target: Coordinate) -> bool {
        let Variant::King(state) = &king.variant else {
            return false;
        };
        state.castle.set(None);

        let from = king.position();
        if king_step(from, target) {
            return true;
        }

        let back = king.color().back_rank();
        if !(from == square(KING_HOME_FILE, back)
            && target.y() == back
            && (target.x() - from.x()).abs() == 2)
        {
            return false;
        }
        let side = if target.x() > from.x() {
            CastleSide::Little
        } else {
            CastleSide::Big
        };
        match self.castle_rook(king, side) {
            Some(rook) => {
                state.castle.set(Some(StagedCastle { target, side, rook }));
                true
            }
            None => false,
        }
    }

    /// The rook to castle with on `side`, if every castling condition holds:
    /// the right is still there, neither piece has moved, the king never
    /// castled, the squares between king and rook are empty, and no square
    /// the king stands on or crosses is attacked.
    fn castle_rook(&self, king: &Piece, side: CastleSide) -> Option<PieceId> {
        let state = king.king_state()?;
        if state.has_moved || state.has_castled || !state.rights.has(side) {
            return None;
        }

        let color = king.color();
        let from = king.position();
        let corner = square(side.rook_file(), color.back_rank());
        let rook = self.piece_id_at(corner)?;
        let rook_piece = &self.pieces[rook.0];
        if rook_piece.kind() != PieceKind::Rook
            || rook_piece.color() != color
            || rook_piece.has_moved()
        {
            return None;
        }

        if self.piece_between_row(from, corner) {
            return None;
        }

        let step = if side == CastleSide::Little { 1 } else { -1 };
        let opponent = color.opponent();
        let crossed = (0..=2).map(|i| square(from.x() + i * step, from.y()));
        for at in crossed {
            if !self.safe_square(at, opponent) {
                return None;
            }
        }
        Some(rook)
    }

    /// Side of the castle committed by the king's last move, if any. Clears
    /// the staged castle.
    pub(crate) fn take_castle(&self, king: PieceId) -> Option<CastleSide> {
        let piece = self.piece(king)?;
        let staged = piece.king_state()?.castle.take()?;
        (staged.target == piece.position()).then_some(staged.side)
    }

    /// Moves the paired rook for a staged castle, then retires every castling
    /// right and updates the king cache.
    pub(super) fn commit_king(&mut self, id: PieceId, target: Coordinate) {
        let color = self.pieces[id.0].color();
        let staged = self.pieces[id.0]
            .king_state()
            .and_then(|state| state.castle.get())
            .filter(|castle| castle.target == target);

        if let Some(castle) = staged {
            let rook_from = self.pieces[castle.rook.0].position();
            let rook_to = square(castle.side.rook_target_file(), color.back_rank());
            if let Variant::Rook(rook) = &mut self.pieces[castle.rook.0].variant {
                rook.has_moved = true;
            }
            self.relocate(castle.rook, rook_from, rook_to);
            debug!("{color} castles {}", castle.side.notation());
        }

        if let Some(state) = self.pieces[id.0].king_state_mut() {
            state.has_moved = true;
            state.rights = CastlingRights::none();
            if staged.is_some() {
                state.has_castled = true;
            }
        }
        self.player_mut(color).set_king(target);
    }
}
