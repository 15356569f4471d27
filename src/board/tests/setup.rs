//! Starting position and accessor tests.

use super::{assert_consistent, sq};
use crate::board::{Board, CastlingRights, Color, PieceKind};

#[test]
fn test_kings_start_on_file_e() {
    let board = Board::default();
    assert_eq!(board.player(Color::White).king(), sq("e1"));
    assert_eq!(board.player(Color::Black).king(), sq("e8"));
    for label in ["e1", "e8"] {
        assert_eq!(board.piece_at(sq(label)).unwrap().kind(), PieceKind::King);
    }
}

#[test]
fn test_back_ranks_mirror() {
    let board = Board::default();
    let expected = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (file, kind) in "abcdefgh".chars().zip(expected) {
        let white = board.piece_at(sq(&format!("{file}1"))).unwrap();
        let black = board.piece_at(sq(&format!("{file}8"))).unwrap();
        assert_eq!((white.kind(), white.color()), (kind, Color::White));
        assert_eq!((black.kind(), black.color()), (kind, Color::Black));
    }
}

#[test]
fn test_pawns_on_second_and_seventh_ranks() {
    let board = Board::default();
    for file in "abcdefgh".chars() {
        let white = board.piece_at(sq(&format!("{file}2"))).unwrap();
        let black = board.piece_at(sq(&format!("{file}7"))).unwrap();
        assert_eq!((white.kind(), white.color()), (PieceKind::Pawn, Color::White));
        assert_eq!((black.kind(), black.color()), (PieceKind::Pawn, Color::Black));
        for rank in 3..=6 {
            assert!(board.is_empty(sq(&format!("{file}{rank}"))));
        }
    }
}

#[test]
fn test_initial_bookkeeping() {
    let board = Board::new("Ada", "Bob");
    assert_consistent(&board);
    for color in Color::BOTH {
        let player = board.player(color);
        assert_eq!(player.pieces().len(), 16);
        assert_eq!(player.points(), 0);
        assert_eq!(board.castling_rights(color), CastlingRights::all());
        assert!(!board.in_check(color));
    }
    assert_eq!(board.player(Color::White).name(), "Ada");
    assert_eq!(board.player(Color::Black).name(), "Bob");
    assert_eq!(board.double_step_pawn(), None);
}

#[test]
fn test_piece_values() {
    let board = Board::default();
    let value = |label: &str| board.piece_at(sq(label)).unwrap().value();
    assert_eq!(value("a2"), 1);
    assert_eq!(value("b1"), 3);
    assert_eq!(value("c8"), 3);
    assert_eq!(value("h1"), 5);
    assert_eq!(value("d8"), 9);
    assert_eq!(value("e1"), 0);
}

#[test]
fn test_piece_lookup_by_id() {
    let board = Board::default();
    let id = board.piece_id_at(sq("g8")).unwrap();
    let piece = board.piece(id).unwrap();
    assert_eq!(piece.kind(), PieceKind::Knight);
    assert_eq!(piece.position(), sq("g8"));
    assert!(board.is_live(id));
    assert!(board.player(Color::Black).contains(id));
    assert!(!board.player(Color::White).contains(id));
}
