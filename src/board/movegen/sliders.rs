use super::super::piece::{PieceId, Variant};
use super::super::{Board, CastleSide, Coordinate, PieceKind};

/// Line geometry of bishops, rooks and queens. Obstruction is checked
/// separately.
pub(super) fn slider_reach(kind: PieceKind, from: Coordinate, target: Coordinate) -> bool {
    if from.magnitude(target) == 0 {
        return false;
    }
    let straight = from.same_row(target) || from.same_column(target);
    let diagonal = from.same_diagonal(target);
    match kind {
        PieceKind::Bishop => diagonal,
        PieceKind::Rook => straight,
        PieceKind::Queen => straight || diagonal,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
    }
}

impl Board {
    /// A rook leaving its corner for the first time gives up the castle on
    /// that side.
    pub(super) fn commit_rook(&mut self, id: PieceId, from: Coordinate) {
        let color = self.pieces[id.0].color();
        let Variant::Rook(state) = &mut self.pieces[id.0].variant else {
            return;
        };
        if state.has_moved {
            return;
        }
        state.has_moved = true;

        if from.y() != color.back_rank() {
            return;
        }
        let side = match from.x() {
            0 => CastleSide::Big,
            7 => CastleSide::Little,
            _ => return,
        };
        if let Some(king) = self.king_id(color) {
            if let Some(state) = self.pieces[king.0].king_state_mut() {
                state.rights.remove(side);
            }
        }
    }
}
