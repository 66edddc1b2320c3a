//! Hint generation for the side to move.

use crate::advice::check_escape::{escape_moves, Suggestion};
use crate::game_state::chess_types::{GameState, GameStatus, Square};
use crate::move_generation::legal_move_generator::legal_targets;
use crate::utils::algebraic::move_notation;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

const CAPTURE_BONUS: f64 = 10.0;
const CENTRALITY_WEIGHT: f64 = 0.5;

fn hint_score(is_capture: bool, to: Square) -> f64 {
    let capture = if is_capture { CAPTURE_BONUS } else { 0.0 };
    capture + (7.0 - to.center_distance()) * CENTRALITY_WEIGHT
}

/// Up to `limit` suggested moves, best first.
///
/// In check this is the head of [`escape_moves`]. Otherwise every legal
/// move is scored by a flat capture bonus plus destination centrality, and
/// ties keep board order.
pub fn suggest_moves(game_state: &GameState, limit: usize) -> Vec<Suggestion> {
    if game_state.status == GameStatus::Check {
        let mut escapes = escape_moves(game_state);
        escapes.truncate(limit);
        return escapes;
    }

    let board = &game_state.board;
    let mut scored: Vec<(f64, Suggestion)> = Vec::new();
    for (from, piece) in board.pieces_of(game_state.side_to_move) {
        for to in legal_targets(game_state, from) {
            let is_capture = board.get(to).is_some();
            scored.push((
                hint_score(is_capture, to),
                Suggestion {
                    from,
                    to,
                    notation: move_notation(piece.kind, is_capture, to),
                },
            ));
        }
    }

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, suggestion)| suggestion)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{suggest_moves, DEFAULT_SUGGESTION_LIMIT};
    use crate::game_state::chess_types::GameStatus;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    fn notations(game: &GameState, limit: usize) -> Vec<String> {
        suggest_moves(game, limit)
            .into_iter()
            .map(|s| s.notation)
            .collect()
    }

    #[test]
    fn opening_hints_prefer_central_pawn_pushes() {
        let game = GameState::new_game();
        assert_eq!(
            notations(&game, DEFAULT_SUGGESTION_LIMIT),
            vec!["d4", "e4", "c4", "d3", "e3"]
        );
    }

    #[test]
    fn captures_outrank_centrality() {
        let game = parse_fen("4k3/8/8/8/8/8/p7/R3K3 w - - 0 1").expect("fen should parse");
        let hints = notations(&game, 1);
        assert_eq!(hints, vec!["Rxa2"]);
    }

    #[test]
    fn in_check_hints_are_escape_moves() {
        let game = parse_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1").expect("fen should parse");
        assert_eq!(game.status, GameStatus::Check);
        assert_eq!(notations(&game, 1), vec!["Kxd2"]);
        assert_eq!(notations(&game, 10).len(), 2);
    }

    #[test]
    fn limit_zero_and_game_over_yield_nothing() {
        assert!(suggest_moves(&GameState::new_game(), 0).is_empty());
        let mated = parse_fen("R6k/6pp/8/8/8/8/8/6K1 b - - 0 1").expect("fen should parse");
        assert!(suggest_moves(&mated, DEFAULT_SUGGESTION_LIMIT).is_empty());
    }
}
