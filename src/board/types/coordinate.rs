//! Board coordinates and their geometric relations.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

const MIN: i32 = 0;
const MAX: i32 = 7;

#[inline]
const fn in_range(v: i32) -> bool {
    MIN <= v && v <= MAX
}

/// A validated square on the 8x8 grid.
///
/// `x` is the column (file A = 0), `y` is the row (rank 1 = 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    y: u8,
    x: u8,
}

impl Coordinate {
    /// Create a coordinate, rejecting anything outside `[0, 7]` on either axis.
    pub fn new(x: i32, y: i32) -> Result<Self, PositionError> {
        if in_range(x) && in_range(y) {
            Ok(Coordinate {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(PositionError::OutOfBounds { x, y })
        }
    }

    /// Build from an index (0-63, a1=0, b1=1, ..., h8=63).
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Coordinate {
            x: (idx % 8) as u8,
            y: (idx / 8) as u8,
        }
    }

    /// All 64 squares, a1 first, rank by rank.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).map(Coordinate::from_index)
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x as i32
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y as i32
    }

    /// Slot index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 8 + self.x as usize
    }

    /// Replace the column, re-validating the range.
    pub fn set_x(&mut self, x: i32) -> Result<(), PositionError> {
        if !in_range(x) {
            return Err(PositionError::OutOfBounds { x, y: self.y() });
        }
        self.x = x as u8;
        Ok(())
    }

    /// Replace the row, re-validating the range.
    pub fn set_y(&mut self, y: i32) -> Result<(), PositionError> {
        if !in_range(y) {
            return Err(PositionError::OutOfBounds { x: self.x(), y });
        }
        self.y = y as u8;
        Ok(())
    }

    /// The coordinate shifted by `(dx, dy)`, if it stays on the board.
    pub fn offset(self, dx: i32, dy: i32) -> Result<Self, PositionError> {
        let mut shifted = self;
        shifted.set_x(self.x() + dx)?;
        shifted.set_y(self.y() + dy)?;
        Ok(shifted)
    }

    /// `|dx| + |dy|`.
    ///
    /// This is a coarse distance filter, not a chess metric: one diagonal
    /// step measures 2 and a knight jump measures 3.
    #[inline]
    #[must_use]
    pub const fn magnitude(self, other: Coordinate) -> u32 {
        (self.x() - other.x()).unsigned_abs() + (self.y() - other.y()).unsigned_abs()
    }

    #[inline]
    #[must_use]
    pub const fn same_row(self, other: Coordinate) -> bool {
        self.y == other.y
    }

    #[inline]
    #[must_use]
    pub const fn same_column(self, other: Coordinate) -> bool {
        self.x == other.x
    }

    /// True when `|dx| == |dy|`. A square is on its own diagonal.
    #[inline]
    #[must_use]
    pub const fn same_diagonal(self, other: Coordinate) -> bool {
        (self.x() - other.x()).unsigned_abs() == (self.y() - other.y()).unsigned_abs()
    }

    /// File letter, lower case (`'a'..='h'`)
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.x) as char
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.y + 1)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = PositionError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Coordinate::new(x, y)
    }
}

impl FromStr for Coordinate {
    type Err = PositionError;

    /// Parse a two-character label such as `"E2"` or `"e2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let x = match file.to_ascii_uppercase() {
            c @ 'A'..='H' => c as i32 - 'A' as i32,
            _ => return Err(invalid()),
        };
        let y = match rank {
            c @ '1'..='8' => c as i32 - '1' as i32,
            _ => return Err(invalid()),
        };

        Coordinate::new(x, y)
    }
}
