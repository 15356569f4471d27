//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Starting position and board accessors
//! - `between.rs` - Obstruction queries
//! - `simulate.rs` - Square safety and hypothetical moves
//! - `moves.rs` - Per-variant movement rules
//! - `edge_cases.rs` - En passant, castling and promotion
//! - `proptest.rs` - Property-based tests

mod proptest;
mod setup;

use crate::board::{Board, BoardBuilder, Color, Coordinate, PieceId, PieceKind};

pub(super) fn sq(label: &str) -> Coordinate {
    label.parse().unwrap()
}

/// Board with only the two kings plus `pieces`.
pub(super) fn position(
    white_king: &str,
    black_king: &str,
    pieces: &[(&str, Color, PieceKind)],
) -> Board {
    let mut builder = BoardBuilder::new()
        .piece(sq(white_king), Color::White, PieceKind::King)
        .piece(sq(black_king), Color::Black, PieceKind::King);
    for &(label, color, kind) in pieces {
        builder = builder.piece(sq(label), color, kind);
    }
    builder.build().unwrap()
}

pub(super) fn id_at(board: &Board, label: &str) -> PieceId {
    board
        .piece_id_at(sq(label))
        .unwrap_or_else(|| panic!("no piece on {label}"))
}

/// Everything a legality query must leave untouched.
#[derive(Debug, PartialEq)]
pub(super) struct Snapshot {
    slots: Vec<Option<PieceId>>,
    sets: [Vec<PieceId>; 2],
    positions: Vec<Coordinate>,
    kings: [Coordinate; 2],
    double_step: Option<PieceId>,
}

pub(super) fn snapshot(board: &Board) -> Snapshot {
    Snapshot {
        slots: board.slots.to_vec(),
        sets: Color::BOTH.map(|c| board.player(c).pieces().to_vec()),
        positions: board.pieces.iter().map(|p| p.position()).collect(),
        kings: Color::BOTH.map(|c| board.player(c).king()),
        double_step: board.double_step,
    }
}

/// Slots and cached positions agree for every live piece, no square holds
/// two pieces, and each side keeps exactly one king on its cached square.
pub(super) fn assert_consistent(board: &Board) {
    let mut seen = [false; 64];
    for color in Color::BOTH {
        let mut kings = 0;
        for (id, piece) in board.live_pieces(color) {
            let at = piece.position();
            assert_eq!(piece.color(), color);
            assert_eq!(board.piece_id_at(at), Some(id), "slot {at} out of sync");
            assert!(!seen[at.index()], "two pieces on {at}");
            seen[at.index()] = true;
            if piece.kind() == PieceKind::King {
                kings += 1;
                assert_eq!(board.player(color).king(), at);
            }
        }
        assert_eq!(kings, 1, "{color} must have exactly one king");
    }
    for square in Coordinate::all() {
        assert_eq!(board.piece_id_at(square).is_some(), seen[square.index()]);
    }
}
