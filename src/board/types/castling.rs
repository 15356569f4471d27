//! Castling sides and per-player castling rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LITTLE: u8 = 1 << 0;
const BIG: u8 = 1 << 1;

/// Little castle is king-side (`0-0`), big castle is queen-side (`0-0-0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Little,
    Big,
}

impl CastleSide {
    /// Column of the rook taking part in this castle
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> i32 {
        match self {
            CastleSide::Little => 7,
            CastleSide::Big => 0,
        }
    }

    /// Column the rook lands on, next to the king
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> i32 {
        match self {
            CastleSide::Little => 5,
            CastleSide::Big => 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Little => "0-0",
            CastleSide::Big => "0-0-0",
        }
    }
}

/// One player's castling rights represented as a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// Both sides still available
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(LITTLE | BIG)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, side: CastleSide) -> bool {
        self.0 & Self::bit_for(side) != 0
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, side: CastleSide) {
        self.0 &= !Self::bit_for(side);
    }

    #[inline]
    const fn bit_for(side: CastleSide) -> u8 {
        match side {
            CastleSide::Little => LITTLE,
            CastleSide::Big => BIG,
        }
    }
}
