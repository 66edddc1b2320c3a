//! GameState-to-FEN serializer for diagnostics.
//!
//! The castling field is always `-` because castling is never generated.

use crate::game_state::chess_types::*;

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = game_state
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |sq| sq.to_string());

    format!(
        "{} {} - {} {} {}",
        generate_board_field(&game_state.board),
        side_to_move,
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

/// Placement field only, rank 8 first.
pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::with_capacity(64);

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match board.get(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
