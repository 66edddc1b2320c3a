use crate::game_state::chess_types::{Board, Color, Square};

/// Pawn pushes, diagonal captures and the supplied en-passant square.
///
/// The en-passant target is trusted as given: it is added whenever it sits
/// on one of the two forward diagonals, without checking which pawn last
/// moved.
pub fn pawn_targets(
    board: &Board,
    from: Square,
    color: Color,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row == color.pawn_start_row() {
                if let Some(two_steps) = from.offset(2 * direction, 0) {
                    if board.is_empty_at(two_steps) {
                        out.push(two_steps);
                    }
                }
            }
        }
    }

    let diagonals = [from.offset(direction, -1), from.offset(direction, 1)];

    for target in diagonals.into_iter().flatten() {
        if matches!(board.color_at(target), Some(occupant) if occupant != color) {
            out.push(target);
        }
    }

    if let Some(ep) = en_passant_target {
        for target in diagonals.into_iter().flatten() {
            if target == ep && !out.contains(&target) {
                out.push(target);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::pawn_targets;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let e2 = Square::new(6, 4);
        let targets = pawn_targets(&game.board, e2, Color::White, None);
        assert_eq!(targets, vec![Square::new(5, 4), Square::new(4, 4)]);

        let d7 = Square::new(1, 3);
        let targets = pawn_targets(&game.board, d7, Color::Black, None);
        assert_eq!(targets, vec![Square::new(2, 3), Square::new(3, 3)]);
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        // Black knight directly in front of the e2 pawn.
        let game = parse_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("fen should parse");
        let e2 = Square::new(6, 4);
        assert!(pawn_targets(&game.board, e2, Color::White, None).is_empty());
    }

    #[test]
    fn double_push_needs_empty_destination() {
        let game = parse_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("fen should parse");
        let e2 = Square::new(6, 4);
        assert_eq!(
            pawn_targets(&game.board, e2, Color::White, None),
            vec![Square::new(5, 4)]
        );
    }

    #[test]
    fn pawn_captures_enemies_diagonally_only() {
        // White pawn d4, black pawn e5, white knight c5.
        let game = parse_fen("4k3/8/8/2N1p3/3P4/8/8/4K3 w - - 0 1").expect("fen should parse");
        let d4 = Square::new(4, 3);
        let targets = pawn_targets(&game.board, d4, Color::White, None);
        assert_eq!(targets, vec![Square::new(3, 3), Square::new(3, 4)]);
    }

    #[test]
    fn en_passant_target_is_added_without_validation() {
        let game = parse_fen("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1").expect("fen should parse");
        let e5 = Square::new(3, 4);
        let d6 = Square::new(2, 3);
        let targets = pawn_targets(&game.board, e5, Color::White, Some(d6));
        assert!(targets.contains(&d6));

        let far = Square::new(2, 0);
        let targets = pawn_targets(&game.board, e5, Color::White, Some(far));
        assert!(!targets.contains(&far));
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let game = parse_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("fen should parse");
        assert!(pawn_targets(&game.board, Square::new(0, 0), Color::White, None).is_empty());
    }
}
