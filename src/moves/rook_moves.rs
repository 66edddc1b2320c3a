use crate::game_state::chess_types::{Board, Color, Square};

/// Orthogonal ray directions as (row, col) steps.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, from, color, d_row, d_col, &mut out);
    }
    out
}

/// Walk from `from` in one direction, collecting empty squares and stopping
/// at the first occupied one, which is kept only if it holds an enemy.
pub(crate) fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<Square>,
) {
    let mut cursor = from.offset(d_row, d_col);

    while let Some(target) = cursor {
        match board.color_at(target) {
            None => out.push(target),
            Some(occupant) => {
                if occupant != color {
                    out.push(target);
                }
                break;
            }
        }
        cursor = target.offset(d_row, d_col);
    }
}

#[cfg(test)]
mod tests {
    use super::rook_targets;
    use crate::game_state::chess_types::{Board, Color, Square};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn rook_on_empty_board_has_fourteen_squares() {
        let d4 = Square::new(4, 3);
        assert_eq!(rook_targets(&Board::empty(), d4, Color::White).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        // White rook a1, black pawn a4, white pawn c1.
        let game = parse_fen("4k3/8/8/8/p7/8/8/R1P1K3 w - - 0 1").expect("fen should parse");
        let a1 = Square::new(7, 0);
        let targets = rook_targets(&game.board, a1, Color::White);

        assert!(targets.contains(&Square::new(4, 0)), "enemy blocker is capturable");
        assert!(!targets.contains(&Square::new(3, 0)), "ray stops at blocker");
        assert!(targets.contains(&Square::new(7, 1)));
        assert!(!targets.contains(&Square::new(7, 2)), "own piece is excluded");
        assert_eq!(targets.len(), 4);
    }
}
