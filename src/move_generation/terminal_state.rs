//! Terminal-state classification.

use crate::game_state::chess_rules::DRAW_HALFMOVE_LIMIT;
use crate::game_state::chess_types::{Board, Color, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Status of the position for `side_to_move`.
///
/// Checkmate and stalemate take precedence over check, and check takes
/// precedence over the half-move draw.
pub fn classify(board: &Board, side_to_move: Color, halfmove_clock: u16) -> GameStatus {
    let in_check = is_king_in_check(board, side_to_move);
    let can_move = has_legal_move(board, side_to_move);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) if halfmove_clock >= DRAW_HALFMOVE_LIMIT => GameStatus::Draw,
        (false, true) => GameStatus::Playing,
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::game_state::chess_types::{Color, GameStatus};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::legal_targets;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_is_playing() {
        let game = GameState::new_game();
        assert_eq!(classify(&game.board, Color::White, 0), GameStatus::Playing);
    }

    #[test]
    fn back_rank_mate() {
        // Black king h8 boxed in by its own pawns, white rook delivers on a8.
        let game = parse_fen("R6k/6pp/8/8/8/8/8/6K1 b - - 0 1").expect("fen should parse");
        assert_eq!(classify(&game.board, Color::Black, 0), GameStatus::Checkmate);

        for (sq, _) in game.board.pieces_of(Color::Black) {
            assert!(legal_targets(&game, sq).is_empty(), "{sq} should have no moves");
        }
    }

    #[test]
    fn queen_back_rank_mate_with_escape_squares_covered() {
        // Lone black king e8; white queen e7 protected by the king on e6.
        let game = parse_fen("4k3/4Q3/4K3/8/8/8/8/8 b - - 0 1").expect("fen should parse");
        assert_eq!(classify(&game.board, Color::Black, 0), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_is_stalemated() {
        // Black king a8, white queen b6: every neighbour covered, a8 itself safe.
        let game = parse_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1").expect("fen should parse");
        assert_eq!(classify(&game.board, Color::Black, 0), GameStatus::Stalemate);
    }

    #[test]
    fn check_with_escape_is_check() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("fen should parse");
        assert_eq!(classify(&game.board, Color::Black, 0), GameStatus::Check);
    }

    #[test]
    fn fifty_halfmoves_is_a_draw_unless_in_check() {
        let game = GameState::new_game();
        assert_eq!(classify(&game.board, Color::White, 49), GameStatus::Playing);
        assert_eq!(classify(&game.board, Color::White, 50), GameStatus::Draw);

        let checked = parse_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("fen should parse");
        assert_eq!(classify(&checked.board, Color::Black, 80), GameStatus::Check);
    }
}
