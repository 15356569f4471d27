//! Algebraic notation of committed half-moves.
//!
//! Grammar: `[Letter][x]<file><rank>[=Promo][+]` followed by either `e.p.`
//! or a single space. Castles are written `0-0` and `0-0-0`, with an
//! optional `+`.
//!
//! # Examples
//! ```
//! use chess_referee::board::{MoveFacts, PieceKind};
//!
//! let facts = MoveFacts::new(PieceKind::Knight, "g1".parse().unwrap(), "f3".parse().unwrap());
//! assert_eq!(facts.notation(), "Nf3 ");
//! ```

use super::{CastleSide, Coordinate, PieceKind};

/// Everything notation needs to know about one half-move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveFacts {
    /// Kind of the piece that moved (the pawn, for a promotion)
    pub kind: PieceKind,
    pub from: Coordinate,
    pub to: Coordinate,
    pub capture: bool,
    pub check: bool,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
}

impl MoveFacts {
    /// A quiet move with every flag cleared.
    #[must_use]
    pub fn new(kind: PieceKind, from: Coordinate, to: Coordinate) -> Self {
        MoveFacts {
            kind,
            from,
            to,
            capture: false,
            check: false,
            promotion: None,
            castle: None,
            en_passant: false,
        }
    }

    /// Castles first, then promotions, then everything else.
    #[must_use]
    pub fn notation(&self) -> String {
        if let Some(side) = self.castle {
            castle_notation(side, self.check)
        } else if let Some(promoted) = self.promotion {
            promotion_notation(promoted, self.to, self.capture, self.check, self.en_passant)
        } else {
            classic_notation(self.kind, self.to, self.capture, self.check, self.en_passant)
        }
    }
}

fn destination(to: Coordinate, capture: bool) -> String {
    format!("{}{to}", if capture { "x" } else { "" })
}

fn check_suffix(check: bool) -> &'static str {
    if check {
        "+"
    } else {
        ""
    }
}

fn en_passant_suffix(en_passant: bool) -> &'static str {
    if en_passant {
        "e.p."
    } else {
        " "
    }
}

/// Piece letter (none for pawns), capture mark, destination, check mark and
/// en-passant suffix.
#[must_use]
pub fn classic_notation(
    kind: PieceKind,
    to: Coordinate,
    capture: bool,
    check: bool,
    en_passant: bool,
) -> String {
    let mut out = String::with_capacity(10);
    if let Some(letter) = kind.letter() {
        out.push(letter);
    }
    out.push_str(&destination(to, capture));
    out.push_str(check_suffix(check));
    out.push_str(en_passant_suffix(en_passant));
    out
}

/// Destination followed by `=` and the letter of the promoted kind.
#[must_use]
pub fn promotion_notation(
    promoted: PieceKind,
    to: Coordinate,
    capture: bool,
    check: bool,
    en_passant: bool,
) -> String {
    let letter = promoted.letter().unwrap_or('?');
    format!(
        "{}={letter}{}{}",
        destination(to, capture),
        check_suffix(check),
        en_passant_suffix(en_passant)
    )
}

#[must_use]
pub fn castle_notation(side: CastleSide, check: bool) -> String {
    format!("{}{}", side.notation(), check_suffix(check))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Coordinate {
        label.parse().unwrap()
    }

    #[test]
    fn test_pawn_push_has_no_letter() {
        let facts = MoveFacts::new(PieceKind::Pawn, sq("e2"), sq("e4"));
        assert_eq!(facts.notation(), "e4 ");
    }

    #[test]
    fn test_capture_with_check() {
        let mut facts = MoveFacts::new(PieceKind::Queen, sq("d1"), sq("h5"));
        facts.capture = true;
        facts.check = true;
        assert_eq!(facts.notation(), "Qxh5+ ");
    }

    #[test]
    fn test_en_passant_suffix_replaces_space() {
        let mut facts = MoveFacts::new(PieceKind::Pawn, sq("e5"), sq("d6"));
        facts.capture = true;
        facts.en_passant = true;
        assert_eq!(facts.notation(), "xd6e.p.");
    }

    #[test]
    fn test_promotion() {
        let mut facts = MoveFacts::new(PieceKind::Pawn, sq("b7"), sq("a8"));
        facts.capture = true;
        facts.promotion = Some(PieceKind::Knight);
        assert_eq!(facts.notation(), "xa8=N ");

        facts.capture = false;
        facts.check = true;
        facts.promotion = Some(PieceKind::Queen);
        assert_eq!(facts.notation(), "a8=Q+ ");
    }

    #[test]
    fn test_castles() {
        let mut facts = MoveFacts::new(PieceKind::King, sq("e1"), sq("g1"));
        facts.castle = Some(CastleSide::Little);
        assert_eq!(facts.notation(), "0-0");
        facts.castle = Some(CastleSide::Big);
        facts.check = true;
        assert_eq!(facts.notation(), "0-0-0+");
    }
}
