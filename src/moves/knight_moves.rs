use crate::game_state::chess_types::{Board, Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    jump_targets(board, from, color, &KNIGHT_OFFSETS)
}

/// Fixed-offset movement shared by knights and kings: a target is kept when
/// it is on the board and not occupied by a friendly piece.
pub(crate) fn jump_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&target| board.color_at(target) != Some(color))
        .collect()
}
