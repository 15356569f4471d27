//! Obstruction queries over the open interval between two squares.

use super::state::square;
use super::{Board, Coordinate};

impl Board {
    /// Whether any slot strictly between `start` and `end` on their shared row
    /// is occupied.
    ///
    /// # Panics
    ///
    /// Panics if the two coordinates are not on the same row.
    #[must_use]
    pub fn piece_between_row(&self, start: Coordinate, end: Coordinate) -> bool {
        assert!(start.same_row(end), "{start} and {end} are not on the same row");
        let y = start.y();
        let (min, max) = (start.x().min(end.x()), start.x().max(end.x()));
        (min + 1..max).any(|x| !self.is_empty(square(x, y)))
    }

    /// Whether any slot strictly between `start` and `end` on their shared
    /// column is occupied.
    ///
    /// # Panics
    ///
    /// Panics if the two coordinates are not on the same column.
    #[must_use]
    pub fn piece_between_column(&self, start: Coordinate, end: Coordinate) -> bool {
        assert!(
            start.same_column(end),
            "{start} and {end} are not on the same column"
        );
        let x = start.x();
        let (min, max) = (start.y().min(end.y()), start.y().max(end.y()));
        (min + 1..max).any(|y| !self.is_empty(square(x, y)))
    }

    /// Whether any slot strictly between `start` and `end` on their shared
    /// diagonal is occupied.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are not on one diagonal, or are identical.
    #[must_use]
    pub fn piece_between_diagonal(&self, start: Coordinate, end: Coordinate) -> bool {
        assert!(
            start.same_diagonal(end) && start != end,
            "{start} and {end} are not on the same diagonal or are the same square"
        );
        let dx = (end.x() - start.x()).signum();
        let dy = (end.y() - start.y()).signum();
        let steps = (end.x() - start.x()).abs();
        (1..steps).any(|i| !self.is_empty(square(start.x() + i * dx, start.y() + i * dy)))
    }

    /// Whether a line move from `from` to `to` is blocked. Squares that share
    /// no line are never blocked.
    pub(crate) fn path_blocked(&self, from: Coordinate, to: Coordinate) -> bool {
        if from == to {
            false
        } else if from.same_column(to) {
            self.piece_between_column(from, to)
        } else if from.same_row(to) {
            self.piece_between_row(from, to)
        } else if from.same_diagonal(to) {
            self.piece_between_diagonal(from, to)
        } else {
            false
        }
    }
}
