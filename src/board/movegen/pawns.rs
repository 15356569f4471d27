use log::debug;

use super::super::piece::{Piece, PieceId, Variant};
use super::super::{Board, Color, Coordinate, PieceKind};

/// Diagonal step one rank forward.
pub(super) fn pawn_attack(color: Color, from: Coordinate, target: Coordinate) -> bool {
    (target.x() - from.x()).abs() == 1 && target.y() - from.y() == color.pawn_direction()
}

impl Board {
    pub(super) fn pawn_valid_move(&self, id: PieceId, pawn: &Piece, target: Coordinate) -> bool {
        let Variant::Pawn(state) = &pawn.variant else {
            return false;
        };
        state.en_passant.set(None);

        let color = pawn.color();
        let from = pawn.position();
        let dir = color.pawn_direction();
        let dy = target.y() - from.y();

        if from.same_column(target) {
            if dy == dir {
                return self.is_empty(target);
            }
            if dy == 2 * dir && !state.has_moved {
                return self.is_empty(target) && !self.piece_between_column(from, target);
            }
            return false;
        }

        if !pawn_attack(color, from, target) {
            return false;
        }
        if self
            .piece_at(target)
            .is_some_and(|other| other.color() != color)
        {
            return true;
        }
        match self.en_passant_victim(id, color, from, target) {
            Some(victim) => {
                state.en_passant.set(Some((target, victim)));
                true
            }
            None => false,
        }
    }

    /// The double-stepped enemy pawn a diagonal step onto the empty `target`
    /// would capture: it stands beside `from`, on `target`'s column.
    fn en_passant_victim(
        &self,
        id: PieceId,
        color: Color,
        from: Coordinate,
        target: Coordinate,
    ) -> Option<PieceId> {
        if !self.is_empty(target) {
            return None;
        }
        let victim = self.double_step.filter(|&v| v != id)?;
        let piece = self.piece(victim)?;
        let beside = Coordinate::new(target.x(), from.y()).ok()?;
        (piece.kind() == PieceKind::Pawn
            && piece.color() != color
            && piece.position() == beside
            && self.is_live(victim))
        .then_some(victim)
    }

    /// En-passant victim staged by the last validity check of `mover`
    /// towards `target`.
    pub(crate) fn staged_en_passant(&self, mover: PieceId, target: Coordinate) -> Option<PieceId> {
        match &self.pieces.get(mover.0)?.variant {
            Variant::Pawn(state) => state
                .en_passant
                .get()
                .filter(|&(at, _)| at == target)
                .map(|(_, victim)| victim),
            _ => None,
        }
    }

    /// Returns the captured piece. Sets the double-step marker when the pawn
    /// advanced two ranks and clears it otherwise.
    pub(super) fn commit_pawn(
        &mut self,
        id: PieceId,
        from: Coordinate,
        target: Coordinate,
    ) -> Option<PieceId> {
        let en_passant = self.staged_en_passant(id, target);
        if let Variant::Pawn(state) = &mut self.pieces[id.0].variant {
            state.has_moved = true;
            state.en_passant.set(None);
        }

        self.double_step = ((target.y() - from.y()).abs() == 2).then_some(id);

        match en_passant {
            Some(victim) => {
                let taken = self.pieces[victim.0].position();
                debug!("en passant {from} -> {target} takes the pawn on {taken}");
                Some(victim)
            }
            None => self.piece_id_at(target),
        }
    }
}
