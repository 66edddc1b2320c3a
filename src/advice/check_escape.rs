//! Moves that answer a check.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{GameState, GameStatus, PieceKind, Square};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::utils::algebraic::move_notation;

/// A move offered to the player, with its short notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub from: Square,
    pub to: Square,
    pub notation: String,
}

/// Every move for the side to move whose resulting state is not reported
/// as `Check`, king moves first, then captures, otherwise in board order.
///
/// The filter looks at the status of the position after the move, which is
/// the opponent's status. A move that escapes check while giving check is
/// therefore left out.
pub fn escape_moves(game_state: &GameState) -> Vec<Suggestion> {
    let board = &game_state.board;
    let mut ranked = Vec::new();

    for (from, piece) in board.pieces_of(game_state.side_to_move) {
        for to in pseudo_legal_moves(board, from, game_state.en_passant_target) {
            let Some(next) = make_move(game_state, from, to) else {
                continue;
            };
            if next.status == GameStatus::Check {
                continue;
            }
            let is_capture = board.get(to).is_some();
            ranked.push((
                (piece.kind != PieceKind::King, !is_capture),
                Suggestion {
                    from,
                    to,
                    notation: move_notation(piece.kind, is_capture, to),
                },
            ));
        }
    }

    ranked.sort_by_key(|(key, _)| *key);
    ranked.into_iter().map(|(_, suggestion)| suggestion).collect()
}

#[cfg(test)]
mod tests {
    use super::escape_moves;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn king_capture_ranks_first() {
        let game = parse_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1").expect("fen should parse");
        let escapes = escape_moves(&game);
        let notations: Vec<&str> = escapes.iter().map(|s| s.notation.as_str()).collect();
        assert_eq!(notations, vec!["Kxd2", "Kf1"]);
    }

    #[test]
    fn escapes_that_give_check_are_left_out() {
        // Rxe4 removes the checker but checks the black king along the e-file.
        let game = parse_fen("4k3/8/8/8/R3r3/8/8/4K3 w - - 0 1").expect("fen should parse");
        let escapes = escape_moves(&game);

        assert!(escapes.iter().all(|s| s.from != Square::new(4, 0)));
        assert_eq!(escapes.len(), 4);
        assert!(escapes
            .iter()
            .all(|s| game.board.get(s.from).map(|p| p.kind) == Some(PieceKind::King)));
    }

    #[test]
    fn non_king_captures_precede_quiet_blocks() {
        // Bishop takes the checking rook or the knight blocks on e1.
        let game =
            parse_fen("7k/8/8/7B/8/8/2N2PPP/3r2K1 w - - 0 1").expect("fen should parse");
        let escapes = escape_moves(&game);
        let notations: Vec<&str> = escapes.iter().map(|s| s.notation.as_str()).collect();
        assert_eq!(notations, vec!["Bxd1", "Ke1"]);
        assert_eq!(
            game.board.get(escapes[1].from).map(|p| p.kind),
            Some(PieceKind::Knight)
        );
    }
}
