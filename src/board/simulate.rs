//! Hypothetical moves and square safety.
//!
//! A legality check has to look at the position *after* a move without
//! committing it. [`Hypothetical`] applies the move to the board and undoes it
//! when dropped, so the board is restored on every exit path, including early
//! returns and panics inside the query.

use std::ops::Deref;

use super::piece::PieceId;
use super::{Board, Color, Coordinate};

/// A piece lifted out of play for the duration of a simulation.
#[derive(Clone, Copy, Debug)]
struct Lifted {
    id: PieceId,
    at: Coordinate,
    color: Color,
    /// Position in the owner's set, or `None` if it was not in the set.
    index: Option<usize>,
}

/// Scoped move: `mover` stands on `to` until the guard is dropped.
///
/// Only slots, cached positions and set membership are touched. The
/// double-step marker, flags and scores are left alone.
pub(crate) struct Hypothetical<'a> {
    board: &'a mut Board,
    mover: PieceId,
    from: Coordinate,
    to: Coordinate,
    lifted: Option<Lifted>,
}

impl<'a> Hypothetical<'a> {
    pub(crate) fn new(board: &'a mut Board, mover: PieceId, to: Coordinate) -> Self {
        let from = board.pieces[mover.0].position();
        let victim = board
            .staged_en_passant(mover, to)
            .or_else(|| board.piece_id_at(to).filter(|&id| id != mover));

        let lifted = victim.map(|id| {
            let piece = &board.pieces[id.0];
            let (at, color) = (piece.position(), piece.color());
            let index = board.player_mut(color).remove_piece(id);
            board.set_slot(at, None);
            Lifted {
                id,
                at,
                color,
                index,
            }
        });

        board.set_slot(from, None);
        board.set_slot(to, Some(mover));
        board.pieces[mover.0].set_position(to);

        Hypothetical {
            board,
            mover,
            from,
            to,
            lifted,
        }
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.set_slot(self.to, None);
        if let Some(lifted) = self.lifted {
            self.board.set_slot(lifted.at, Some(lifted.id));
            if let Some(index) = lifted.index {
                self.board.player_mut(lifted.color).restore_piece(index, lifted.id);
            }
        }
        self.board.set_slot(self.from, Some(self.mover));
        self.board.pieces[self.mover.0].set_position(self.from);
    }
}

impl Board {
    /// True iff no live piece of `opponent` reaches `target` on the current
    /// board.
    #[must_use]
    pub fn safe_square(&self, target: Coordinate, opponent: Color) -> bool {
        !self
            .live_pieces(opponent)
            .any(|(id, _)| self.attacks(id, target))
    }

    /// Whether `square` would be safe from `opponent` after `mover` went to
    /// `end`. Used for non-king moves with `square` set to the mover's king.
    pub fn check_square(
        &mut self,
        square: Coordinate,
        mover: PieceId,
        end: Coordinate,
        opponent: Color,
    ) -> bool {
        let after = Hypothetical::new(self, mover, end);
        after.safe_square(square, opponent)
    }

    /// Whether `target` would be safe from `opponent` once `mover` stood on
    /// it. Used for king moves.
    pub fn check_destination(&mut self, mover: PieceId, target: Coordinate, opponent: Color) -> bool {
        self.check_square(target, mover, target, opponent)
    }
}
