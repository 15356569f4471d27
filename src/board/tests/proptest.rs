//! Property-based tests using proptest.

use super::{assert_consistent, snapshot};
use crate::board::{Board, Color, Coordinate, PieceId, PieceKind, PositionError};
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn legal_moves(board: &mut Board, color: Color) -> Vec<(PieceId, Coordinate)> {
    let ids = board.player(color).pieces().to_vec();
    let mut moves = Vec::new();
    for id in ids {
        for target in Coordinate::all() {
            if board.can_move_to(id, target) {
                moves.push((id, target));
            }
        }
    }
    moves
}

proptest! {
    /// Property: every committed legal move keeps slots, sets, cached
    /// positions and king caches in agreement
    #[test]
    fn prop_playout_keeps_board_consistent(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut color = Color::White;

        for _ in 0..plies {
            let moves = legal_moves(&mut board, color);
            if moves.is_empty() {
                break;
            }
            let (id, target) = moves[rng.gen_range(0..moves.len())];
            prop_assert!(board.can_move_to(id, target));
            board.move_to(id, target);

            let piece = board.piece(id).unwrap();
            if piece.kind() == PieceKind::Pawn && target.y() == color.pawn_promotion_rank() {
                board.promote(id, PieceKind::Queen);
            }
            assert_consistent(&board);
            // The mover never leaves its own king attacked
            prop_assert!(!board.in_check(color));
            color = color.opponent();
        }
    }

    /// Property: the exhaustive legality search leaves no trace
    #[test]
    fn prop_legality_queries_leave_no_trace(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut color = Color::White;

        for _ in 0..plies {
            let before = snapshot(&board);
            let moves = legal_moves(&mut board, color);
            prop_assert_eq!(snapshot(&board), before);
            if moves.is_empty() {
                break;
            }
            let (id, target) = moves[rng.gen_range(0..moves.len())];
            prop_assert!(board.can_move_to(id, target));
            board.move_to(id, target);
            if board.piece(id).unwrap().kind() == PieceKind::Pawn
                && target.y() == color.pawn_promotion_rank()
            {
                board.promote(id, PieceKind::Knight);
            }
            color = color.opponent();
        }
    }

    /// Property: construction succeeds exactly on the 8x8 grid
    #[test]
    fn prop_coordinate_range(x in -20i32..20, y in -20i32..20) {
        let inside = (0..8).contains(&x) && (0..8).contains(&y);
        match Coordinate::new(x, y) {
            Ok(c) => {
                prop_assert!(inside);
                prop_assert_eq!((c.x(), c.y()), (x, y));
            }
            Err(PositionError::OutOfBounds { .. }) => prop_assert!(!inside),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    /// Property: labels parse iff they match `[A-Ha-h][1-8]`
    #[test]
    fn prop_label_grammar(label in "[A-Za-z0-9]{0,3}") {
        let bytes = label.as_bytes();
        let valid = bytes.len() == 2
            && (b'A'..=b'H').contains(&bytes[0].to_ascii_uppercase())
            && (b'1'..=b'8').contains(&bytes[1]);
        let parsed = label.parse::<Coordinate>();
        prop_assert_eq!(parsed.is_ok(), valid);
        if let Ok(c) = parsed {
            prop_assert_eq!(c.to_string(), label.to_ascii_lowercase());
        }
    }
}
