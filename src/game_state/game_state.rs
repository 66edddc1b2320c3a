//! Immutable game snapshot.
//!
//! `GameState` bundles the board with turn, status, history and clock
//! bookkeeping. Transitions never mutate a published snapshot: `make_move`
//! and `undo_last_move` each return a brand-new value.

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, undo_last_move};
use crate::move_generation::legal_move_generator::legal_targets;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub status: GameStatus,
    /// Append-only record of committed moves, oldest first.
    pub history: Vec<Move>,

    // --- Presentation conveniences ---
    pub selected_square: Option<Square>,
    pub valid_moves: Vec<Square>,

    pub last_move: Option<Move>,
    /// Consumed by the pawn generator but never populated by a transition.
    pub en_passant_target: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            status: GameStatus::Playing,
            history: Vec::new(),
            selected_square: None,
            valid_moves: Vec::new(),
            last_move: None,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// See [`make_move`].
    #[inline]
    pub fn make_move(&self, from: Square, to: Square) -> Option<GameState> {
        make_move(self, from, to)
    }

    /// See [`undo_last_move`].
    #[inline]
    pub fn undo(&self) -> Option<GameState> {
        undo_last_move(self)
    }

    /// Legal destinations for the piece on `from`; empty unless it belongs
    /// to the side to move.
    #[inline]
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        legal_targets(self, from)
    }

    /// Copy of this state with `square` selected and its legal targets
    /// cached. Selecting an empty or opponent square clears the selection.
    pub fn select_square(&self, square: Square) -> GameState {
        let mut next = self.clone();
        match self.board.get(square) {
            Some(piece) if piece.color == self.side_to_move => {
                next.selected_square = Some(square);
                next.valid_moves = legal_targets(self, square);
            }
            _ => {
                next.selected_square = None;
                next.valid_moves.clear();
            }
        }
        next
    }

    /// Copy of this state with selection and cached targets cleared.
    pub fn clear_selection(&self) -> GameState {
        let mut next = self.clone();
        next.selected_square = None;
        next.valid_moves.clear();
        next
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, GameStatus, Square};

    #[test]
    fn new_game_defaults() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.status, GameStatus::Playing);
        assert!(game.history.is_empty());
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.fullmove_number, 1);
        assert_eq!(game.en_passant_target, None);
    }

    #[test]
    fn selecting_own_piece_caches_targets() {
        let game = GameState::new_game();
        let g1 = Square::new(7, 6);
        let selected = game.select_square(g1);

        assert_eq!(selected.selected_square, Some(g1));
        assert_eq!(selected.valid_moves.len(), 2);
        assert!(game.selected_square.is_none());
    }

    #[test]
    fn selecting_opponent_or_empty_square_clears_selection() {
        let game = GameState::new_game().select_square(Square::new(6, 0));
        assert!(game.selected_square.is_some());

        let opponent = game.select_square(Square::new(1, 0));
        assert!(opponent.selected_square.is_none());
        assert!(opponent.valid_moves.is_empty());

        let empty = game.select_square(Square::new(4, 4));
        assert!(empty.selected_square.is_none());
    }

    #[test]
    fn json_round_trip_preserves_state() {
        let game = GameState::new_game()
            .make_move(Square::new(6, 4), Square::new(4, 4))
            .expect("e4 is legal");
        let json = serde_json::to_string(&game).expect("state serializes");
        assert!(json.contains("\"side_to_move\":\"black\""));
        let back: GameState = serde_json::from_str(&json).expect("state deserializes");
        assert_eq!(back, game);
    }
}
