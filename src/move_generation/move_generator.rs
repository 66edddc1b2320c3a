//! Pseudo-legal move generation.
//!
//! Dispatches on the piece kind to the per-piece target generators in
//! `crate::moves`. Nothing here looks at whether the mover's own king would
//! be left attacked; see `legal_move_generator` for that filter.

use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Target squares for whatever piece stands on `from`; empty for an empty
/// square.
pub fn pseudo_legal_moves(
    board: &Board,
    from: Square,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    match board.get(from) {
        Some(piece) => piece_targets(board, from, piece, en_passant_target),
        None => Vec::new(),
    }
}

#[inline]
pub fn piece_targets(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, from, piece.color, en_passant_target),
        PieceKind::Knight => knight_targets(board, from, piece.color),
        PieceKind::Bishop => bishop_targets(board, from, piece.color),
        PieceKind::Rook => rook_targets(board, from, piece.color),
        PieceKind::Queen => queen_targets(board, from, piece.color),
        PieceKind::King => king_targets(board, from, piece.color),
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn empty_square_has_no_moves() {
        let game = GameState::new_game();
        assert!(pseudo_legal_moves(&game.board, Square::new(4, 4), None).is_empty());
    }

    #[test]
    fn starting_position_has_twenty_pseudo_moves_per_side() {
        let game = GameState::new_game();
        for color in [Color::White, Color::Black] {
            let total: usize = game
                .board
                .pieces_of(color)
                .map(|(sq, _)| pseudo_legal_moves(&game.board, sq, None).len())
                .sum();
            assert_eq!(total, 20);
        }
    }
}
