use std::fmt;

use super::piece::PieceId;
use super::types::{Color, Coordinate};

/// One side of the game: its live pieces, king square and score.
///
/// Membership is by identity: removing a piece deletes that exact id, and
/// removing an absent piece does nothing.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    color: Color,
    pieces: Vec<PieceId>,
    king: Coordinate,
    points: u32,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, color: Color, king: Coordinate) -> Self {
        Player {
            name: name.into(),
            color,
            pieces: Vec::with_capacity(16),
            king,
            points: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Live pieces, in the order they joined the set
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.contains(&id)
    }

    /// Cached king square
    #[must_use]
    pub fn king(&self) -> Coordinate {
        self.king
    }

    /// Sum of the values of every piece this player captured
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    pub(crate) fn add_piece(&mut self, id: PieceId) {
        if !self.contains(id) {
            self.pieces.push(id);
        }
    }

    /// Remove `id`, returning the slot it occupied in the set.
    pub(crate) fn remove_piece(&mut self, id: PieceId) -> Option<usize> {
        let index = self.pieces.iter().position(|&p| p == id)?;
        self.pieces.remove(index);
        Some(index)
    }

    /// Undo a [`Player::remove_piece`], putting `id` back at `index`.
    pub(crate) fn restore_piece(&mut self, index: usize, id: PieceId) {
        self.pieces.insert(index.min(self.pieces.len()), id);
    }

    pub(crate) fn replace_piece(&mut self, old: PieceId, new: PieceId) -> bool {
        match self.pieces.iter_mut().find(|p| **p == old) {
            Some(slot) => {
                *slot = new;
                true
            }
            None => false,
        }
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    pub(crate) fn set_king(&mut self, king: Coordinate) {
        self.king = king;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new("Ada", Color::White, Coordinate::new(4, 0).unwrap())
    }

    #[test]
    fn test_membership_by_identity() {
        let mut p = player();
        p.add_piece(PieceId(3));
        p.add_piece(PieceId(7));
        p.add_piece(PieceId(3));
        assert_eq!(p.pieces(), &[PieceId(3), PieceId(7)]);

        assert_eq!(p.remove_piece(PieceId(9)), None);
        assert_eq!(p.pieces().len(), 2);

        assert_eq!(p.remove_piece(PieceId(3)), Some(0));
        assert_eq!(p.pieces(), &[PieceId(7)]);
    }

    #[test]
    fn test_restore_keeps_order() {
        let mut p = player();
        for id in 0..4 {
            p.add_piece(PieceId(id));
        }
        let index = p.remove_piece(PieceId(2)).unwrap();
        p.restore_piece(index, PieceId(2));
        assert_eq!(p.pieces(), &[PieceId(0), PieceId(1), PieceId(2), PieceId(3)]);
    }

    #[test]
    fn test_points_accumulate() {
        let mut p = player();
        p.add_points(3);
        p.add_points(9);
        assert_eq!(p.points(), 12);
        assert_eq!(p.to_string(), "Ada");
    }
}
