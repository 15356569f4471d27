//! Text rendering of the board.

use std::fmt::{self, Write as _};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::square;
use super::Board;

const CELL_WIDTH: usize = 7;

/// Which characters draw the pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymbolSet {
    /// Chess glyphs U+2654..U+265F
    #[default]
    Unicode,
    /// `KQRBNP` for White, `kqrbnp` for Black
    Ascii,
}

impl Board {
    /// Bordered grid with one block per file (A at the top) and one cell per
    /// rank (1 on the left), followed by the rank legend.
    #[must_use]
    pub fn render(&self, symbols: SymbolSet) -> String {
        let border = "-".repeat(CELL_WIDTH * 8);
        let padding = "|     |".repeat(8);
        let mut out = String::with_capacity(2048);

        for x in 0..8 {
            out.push_str(&border);
            out.push('\n');
            out.push_str(&padding);
            out.push('\n');
            for y in 0..8 {
                match self.piece_at(square(x, y)) {
                    Some(piece) => {
                        let _ = write!(out, "|  {}  |", piece.symbol(symbols));
                    }
                    None => out.push_str("|     |"),
                }
            }
            let _ = writeln!(out, " {}", (b'A' + x as u8) as char);
            out.push_str(&padding);
            out.push('\n');
        }

        out.push_str(&border);
        out.push('\n');
        for rank in 1..=8 {
            let _ = write!(out, "   {rank}   ");
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SymbolSet::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shape() {
        let text = Board::default().render(SymbolSet::Ascii);
        let lines: Vec<&str> = text.lines().collect();
        // 8 blocks of 4 lines, the closing border and the legend
        assert_eq!(lines.len(), 8 * 4 + 2);
        assert!(lines[2].ends_with(" A"));
        assert!(lines[30].ends_with(" H"));
        assert!(lines.last().unwrap().starts_with("   1   "));
    }

    #[test]
    fn test_render_is_file_major() {
        let text = Board::default().render(SymbolSet::Ascii);
        let lines: Vec<&str> = text.lines().collect();
        // File A: rook on rank 1, pawn on rank 2, black pawn and rook on 7 and 8
        assert_eq!(
            lines[2],
            "|  R  ||  P  ||     ||     ||     ||     ||  p  ||  r  | A"
        );
        // File E holds both kings
        assert!(lines[4 * 4 + 2].starts_with("|  K  |"));
        assert!(lines[4 * 4 + 2].contains("|  k  | E"));
    }

    #[test]
    fn test_unicode_default() {
        let text = Board::default().to_string();
        assert!(text.contains('\u{2654}'));
        assert!(text.contains('\u{265F}'));
    }
}
