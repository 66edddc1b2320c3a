use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::rook_moves::trace_ray;

/// Diagonal ray directions as (row, col) steps.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(13);
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        trace_ray(board, from, color, d_row, d_col, &mut out);
    }
    out
}
