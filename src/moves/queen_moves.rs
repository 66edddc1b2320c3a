use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

/// Union of the rook and bishop rays, rook directions first.
#[inline]
pub fn queen_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut out = rook_targets(board, from, color);
    out.extend(bishop_targets(board, from, color));
    out
}
