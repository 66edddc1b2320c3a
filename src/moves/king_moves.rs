use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::knight_moves::jump_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent squares only; castling is never generated.
#[inline]
pub fn king_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    jump_targets(board, from, color, &KING_OFFSETS)
}
