//! The turn engine: validates, commits and scores each half-move, then
//! decides whether the game goes on.

use std::fmt::{self, Write as _};

use log::{debug, info, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::options::GameOptions;
use super::protocol::Prompter;
use crate::board::{Board, Color, Coordinate, MoveError, MoveFacts, PieceKind, Player, TurnError};

/// Where the game stands. Both end states are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    InProgress,
    /// Checkmate or forfeit; a winner is recorded
    DecisiveEnd,
    /// Stalemate, agreed draw or the fifty-ply rule
    DrawnEnd,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Forfeit { winner: Color },
    Stalemate,
    Agreement,
    FiftyPly { limit: u32 },
}

impl Outcome {
    #[must_use]
    pub fn state(self) -> GameState {
        match self {
            Outcome::Checkmate { .. } | Outcome::Forfeit { .. } => GameState::DecisiveEnd,
            Outcome::Stalemate | Outcome::Agreement | Outcome::FiftyPly { .. } => {
                GameState::DrawnEnd
            }
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Forfeit { winner } => Some(winner),
            Outcome::Stalemate | Outcome::Agreement | Outcome::FiftyPly { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            Outcome::Forfeit { winner } => {
                write!(f, "{} forfeited, {winner} wins", winner.opponent())
            }
            Outcome::Stalemate => write!(
                f,
                "The game is in a situation of stalemate, it's considered as null"
            ),
            Outcome::Agreement => write!(f, "Both players agreed to a draw"),
            Outcome::FiftyPly { limit } => write!(
                f,
                "No pieces have been captured and no pawns have been moved during the last \
                 {limit} plies, this game is declared as null"
            ),
        }
    }
}

/// One committed half-move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub facts: MoveFacts,
    /// Kind of the piece taken off the board, if any
    pub captured: Option<PieceKind>,
    pub notation: String,
}

/// A game between two players, driven one half-move at a time.
pub struct Game<P: Prompter> {
    board: Board,
    to_move: Color,
    state: GameState,
    outcome: Option<Outcome>,
    /// Notation pairs, White's half-move first
    history: Vec<(String, String)>,
    records: Vec<MoveRecord>,
    /// Plies since the last capture or pawn move
    quiet_plies: u32,
    options: GameOptions,
    prompter: P,
}

impl<P: Prompter> Game<P> {
    /// Standard starting position, players named "White" and "Black".
    pub fn new(options: GameOptions, prompter: P) -> Self {
        Self::from_board(Board::default(), Color::White, options, prompter)
    }

    /// Continue from an arbitrary position with `to_move` to play.
    pub fn from_board(board: Board, to_move: Color, options: GameOptions, prompter: P) -> Self {
        Game {
            board,
            to_move,
            state: GameState::InProgress,
            outcome: None,
            history: Vec::new(),
            records: Vec::new(),
            quiet_plies: 0,
            options,
            prompter,
        }
    }

    /// Name both players and reset to the starting position.
    pub fn add_players(&mut self, white: &str, black: &str) {
        self.board = Board::new(white, black);
        self.to_move = Color::White;
        self.state = GameState::InProgress;
        self.outcome = None;
        self.history.clear();
        self.records.clear();
        self.quiet_plies = 0;
    }

    /// Play the move given by two square labels such as `"E2"` and `"E4"`.
    ///
    /// # Errors
    ///
    /// [`TurnError::InvalidPosition`] for a malformed label,
    /// [`TurnError::IllegalMove`] when the move is rejected. Nothing changes
    /// in either case.
    pub fn submit_turn(&mut self, start: &str, end: &str) -> Result<MoveRecord, TurnError> {
        let start: Coordinate = start.trim().parse()?;
        let end: Coordinate = end.trim().parse()?;
        self.play(start, end).map_err(TurnError::from)
    }

    /// Play the move from `start` to `end` for the player to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongPiece`] if `start` holds no piece of the player to
    /// move, [`MoveError::IllegalDestination`] if that piece cannot reach
    /// `end`, [`MoveError::GameOver`] once the game has ended. Nothing
    /// changes on error.
    pub fn play(&mut self, start: Coordinate, end: Coordinate) -> Result<MoveRecord, MoveError> {
        if self.state != GameState::InProgress {
            return Err(MoveError::GameOver);
        }
        let mover = self.to_move;
        let opponent = mover.opponent();

        let Some((id, kind)) = self.board.piece_id_at(start).and_then(|id| {
            let piece = self.board.piece(id)?;
            (piece.color() == mover).then_some((id, piece.kind()))
        }) else {
            trace!("{mover} has no piece on {start}");
            return Err(MoveError::WrongPiece { start, end });
        };
        if !self.board.can_move_to(id, end) {
            trace!("{mover} cannot move {start} -> {end}");
            return Err(MoveError::IllegalDestination { start, end });
        }

        let captured = self.board.move_to(id, end);
        let taken = captured
            .and_then(|c| self.board.piece(c))
            .map(|p| (p.kind(), p.value(), p.position()));

        let mut facts = MoveFacts::new(kind, start, end);
        facts.capture = taken.is_some();
        facts.en_passant = kind == PieceKind::Pawn && taken.is_some_and(|(_, _, at)| at != end);

        if kind == PieceKind::Pawn && end.y() == mover.pawn_promotion_rank() {
            let promoted = self.ask_promotion(end);
            self.board.promote(id, promoted);
            facts.promotion = Some(promoted);
            debug!("{mover} promotes on {end} to {promoted}");
        }
        if kind == PieceKind::King {
            facts.castle = self.board.take_castle(id);
        }

        if let Some((_, value, _)) = taken {
            self.board.player_mut(mover).add_points(value);
        }

        facts.check = !self
            .board
            .safe_square(self.board.player(opponent).king(), mover);

        let notation = facts.notation();
        self.push_history(mover, &notation);
        debug!("{mover} plays {start} -> {end} ({})", notation.trim_end());

        if self.has_legal_move(opponent) {
            self.to_move = opponent;
        } else if facts.check {
            self.finish(Outcome::Checkmate { winner: mover });
        } else {
            self.finish(Outcome::Stalemate);
        }

        if taken.is_some() || kind == PieceKind::Pawn {
            self.quiet_plies = 0;
        } else {
            self.quiet_plies += 1;
        }
        let limit = self.options.fifty_ply_limit;
        if self.state == GameState::InProgress && limit > 0 && self.quiet_plies >= limit {
            self.finish(Outcome::FiftyPly { limit });
        }

        let record = MoveRecord {
            color: mover,
            facts,
            captured: taken.map(|(kind, _, _)| kind),
            notation,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    /// The player to move gives up; the opponent wins.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended.
    pub fn forfeit(&mut self) -> Result<(), MoveError> {
        if self.state != GameState::InProgress {
            return Err(MoveError::GameOver);
        }
        self.to_move = self.to_move.opponent();
        self.finish(Outcome::Forfeit {
            winner: self.to_move,
        });
        Ok(())
    }

    /// The player to move offers a draw; returns whether it was accepted.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended.
    pub fn offer_draw(&mut self) -> Result<bool, MoveError> {
        if self.state != GameState::InProgress {
            return Err(MoveError::GameOver);
        }
        let accepted = self
            .prompter
            .draw_response(self.board.player(self.to_move));
        if accepted {
            self.finish(Outcome::Agreement);
        } else {
            debug!("{} declined the draw", self.to_move.opponent());
        }
        Ok(accepted)
    }

    fn ask_promotion(&mut self, square: Coordinate) -> PieceKind {
        loop {
            let answer = self.prompter.promotion_choice(square);
            match PieceKind::from_promotion_choice(&answer) {
                Some(kind) => return kind,
                None => trace!("invalid promotion answer {answer:?}, asking again"),
            }
        }
    }

    /// Exhaustive search over every live piece and every square.
    fn has_legal_move(&mut self, color: Color) -> bool {
        let ids = self.board.player(color).pieces().to_vec();
        ids.into_iter().any(|id| {
            Coordinate::all().any(|target| self.board.can_move_to(id, target))
        })
    }

    fn push_history(&mut self, mover: Color, notation: &str) {
        match (mover, self.history.last_mut()) {
            (Color::Black, Some(entry)) if entry.1.is_empty() => entry.1 = notation.to_string(),
            (Color::Black, _) => self.history.push(("...".to_string(), notation.to_string())),
            (Color::White, _) => self.history.push((notation.to_string(), String::new())),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!("game over: {outcome}");
        self.state = outcome.state();
        self.outcome = Some(outcome);
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.outcome
            .and_then(Outcome::winner)
            .map(|color| self.board.player(color))
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.board.player(self.to_move)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Notation pairs; an entry opened by Black shows `...` for White.
    #[must_use]
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    #[must_use]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Plies since the last capture or pawn move.
    #[must_use]
    pub fn quiet_plies(&self) -> u32 {
        self.quiet_plies
    }

    /// `"<n> : <white>\t<black>\n"` per entry, then a blank line.
    #[must_use]
    pub fn move_history_text(&self) -> String {
        let mut out = String::new();
        for (i, (white, black)) in self.history.iter().enumerate() {
            let _ = writeln!(out, "{} : {white}\t{black}", i + 1);
        }
        out.push('\n');
        out
    }

    #[must_use]
    pub fn board_render_text(&self) -> String {
        self.board.render(self.options.symbols)
    }

    /// Board followed by the name, color and score of the player to move.
    #[must_use]
    pub fn turn_info(&self) -> String {
        let player = self.current_player();
        format!(
            "{}\n\n{}'s turn\n- Color ==> {}\n- Total points ==> {}\n",
            self.board_render_text(),
            player.name(),
            player.color(),
            player.points()
        )
    }

    /// Board, how the game ended and who won.
    #[must_use]
    pub fn end_info(&self) -> String {
        let mut out = self.board_render_text();
        out.push('\n');
        if let Some(outcome) = self.outcome {
            let _ = writeln!(out, "{outcome}");
        }
        match self.winner() {
            Some(player) => {
                let _ = write!(out, "{} has won", player.name());
            }
            None => out.push_str("The game ended null, no one won"),
        }
        out
    }
}
