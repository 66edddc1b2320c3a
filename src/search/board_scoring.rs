//! Static evaluation used by the bot strategies.
//!
//! Scores are `f64` pawn units from the point of view of one color:
//! material plus a few positional nudges for centralisation and pawn
//! advancement.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

/// Centre bonus the greedy strategy adds for landing on d4/e4/d5/e5.
pub const CENTER_MOVE_BONUS: f64 = 0.3;
/// Greedy bonus for a knight or bishop leaving its back row.
pub const DEVELOPMENT_BONUS: f64 = 0.5;

#[inline]
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.25,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 1000.0,
    }
}

/// Positional term for a piece standing on `square`.
pub fn positional_value(piece: Piece, square: Square) -> f64 {
    let center_distance = square.center_distance();
    let mut value = (7.0 - center_distance) * 0.1;

    match piece.kind {
        PieceKind::Pawn => {
            let ranks_advanced = match piece.color {
                Color::White => 7 - square.row,
                Color::Black => square.row,
            };
            value += f64::from(ranks_advanced) * 0.1;
        }
        PieceKind::Knight if center_distance < 2.0 => value += 0.2,
        PieceKind::Bishop if center_distance < 3.0 => value += 0.15,
        _ => {}
    }

    value
}

/// Material plus positional balance, positive when `perspective` is ahead.
pub fn evaluate_board(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .map(|(square, piece)| {
            let value = piece_value(piece.kind) + positional_value(piece, square);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{evaluate_board, piece_value, positional_value};
    use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::new(kind, color, PieceId(0))
    }

    #[test]
    fn starting_position_is_balanced() {
        let game = GameState::new_game();
        assert!(evaluate_board(&game.board, Color::White).abs() < 1e-9);
        assert!(evaluate_board(&game.board, Color::Black).abs() < 1e-9);
    }

    #[test]
    fn extra_queen_shows_up_for_its_owner() {
        let game = parse_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("fen should parse");
        let white = evaluate_board(&game.board, Color::White);
        assert!(white > piece_value(PieceKind::Queen) - 1.0);
        assert!((white + evaluate_board(&game.board, Color::Black)).abs() < 1e-9);
    }

    #[test]
    fn centre_outranks_corner() {
        let knight = piece(PieceKind::Knight, Color::White);
        let centre = positional_value(knight, Square::new(3, 3));
        let corner = positional_value(knight, Square::new(0, 0));
        assert!((centre - (0.6 + 0.2)).abs() < 1e-9);
        assert!(corner.abs() < 1e-9);
    }

    #[test]
    fn pawn_advancement_depends_on_color() {
        let e4 = Square::new(4, 4);
        let white = positional_value(piece(PieceKind::Pawn, Color::White), e4);
        let black = positional_value(piece(PieceKind::Pawn, Color::Black), e4);
        assert!((white - black - 0.1 * (3.0 - 4.0)).abs() < 1e-9);
    }
}
