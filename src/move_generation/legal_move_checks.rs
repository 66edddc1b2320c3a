//! King-attack detection.

use tracing::warn;

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::move_generation::move_generator::piece_targets;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(sq, _)| sq)
}

/// True when any opposing piece's pseudo-legal targets include the king of
/// `color`. En passant is not considered.
///
/// A board without a king for `color` violates the one-king invariant and
/// cannot be reached through `make_move`/`undo_last_move`; it is logged and
/// reported as not attacked.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        warn!(%color, "no king on board; treating as not attacked");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_targets(board, from, piece, None).contains(&square))
}
