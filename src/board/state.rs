use super::piece::{Piece, PieceId};
use super::player::Player;
use super::types::{CastlingRights, Color, Coordinate, PieceKind};

/// The 8x8 slot store, both players and the double-step marker.
///
/// Pieces live in an arena (`pieces`) indexed by [`PieceId`]; each slot holds
/// the id of the piece standing on it. A piece is in play exactly while its
/// owner's set contains its id, and then `slots[piece.position()]` is that id.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) slots: [Option<PieceId>; 64],
    pub(crate) pieces: Vec<Piece>,
    pub(crate) players: [Player; 2],
    /// The pawn that advanced two squares on the previous ply, if any.
    pub(crate) double_step: Option<PieceId>,
}

impl Board {
    /// Standard 32-piece starting position.
    #[must_use]
    pub fn new(white: &str, black: &str) -> Self {
        let mut board = Board::empty(white, black);
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
                let file = file as i32;
                board.spawn(Piece::new(kind, color, square(file, back)));
                board.spawn(Piece::new(PieceKind::Pawn, color, square(file, pawns)));
            }
        }
        board
    }

    pub(crate) fn empty(white: &str, black: &str) -> Self {
        Board {
            slots: [None; 64],
            pieces: Vec::with_capacity(32),
            players: [
                Player::new(white, Color::White, square(4, Color::White.back_rank())),
                Player::new(black, Color::Black, square(4, Color::Black.back_rank())),
            ],
            double_step: None,
        }
    }

    /// Put a new piece into play: arena, slot and owner's set.
    pub(crate) fn spawn(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len());
        let at = piece.position();
        let color = piece.color();
        if piece.kind() == PieceKind::King {
            self.players[color.index()].set_king(at);
        }
        self.pieces.push(piece);
        self.slots[at.index()] = Some(id);
        self.players[color.index()].add_piece(id);
        id
    }

    #[inline]
    #[must_use]
    pub fn piece_id_at(&self, at: Coordinate) -> Option<PieceId> {
        self.slots[at.index()]
    }

    #[must_use]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.piece_id_at(at).map(|id| &self.pieces[id.0])
    }

    /// Look up a piece by identity, in play or captured.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    #[inline]
    pub(crate) fn set_slot(&mut self, at: Coordinate, id: Option<PieceId>) {
        self.slots[at.index()] = id;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.slots[at.index()].is_none()
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    pub(crate) fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    /// True while the piece belongs to its owner's live set.
    #[must_use]
    pub fn is_live(&self, id: PieceId) -> bool {
        self.piece(id)
            .is_some_and(|p| self.players[p.color().index()].contains(id))
    }

    /// Live pieces of one side, in set order.
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.players[color.index()]
            .pieces()
            .iter()
            .map(move |&id| (id, &self.pieces[id.0]))
    }

    /// The pawn that just advanced two squares, open to en-passant capture
    /// for exactly one ply.
    #[must_use]
    pub fn double_step_pawn(&self) -> Option<PieceId> {
        self.double_step
    }

    pub(crate) fn king_id(&self, color: Color) -> Option<PieceId> {
        self.piece_id_at(self.player(color).king())
            .filter(|&id| self.pieces[id.0].kind() == PieceKind::King)
    }

    /// Castling sides still available to `color`.
    #[must_use]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.king_id(color)
            .and_then(|id| self.pieces[id.0].king_state())
            .map_or(CastlingRights::none(), |state| {
                if state.has_castled {
                    CastlingRights::none()
                } else {
                    state.rights
                }
            })
    }

    /// Whether `color`'s king is currently attacked.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        !self.safe_square(self.player(color).king(), color.opponent())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new("White", "Black")
    }
}

/// Coordinate from in-range constants.
#[inline]
pub(crate) fn square(x: i32, y: i32) -> Coordinate {
    debug_assert!((0..8).contains(&x) && (0..8).contains(&y));
    Coordinate::from_index((y * 8 + x) as usize)
}
