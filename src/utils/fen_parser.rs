//! FEN-to-GameState parser.
//!
//! Only the piece placement field is required. Missing trailing fields fall
//! back to white to move, no en-passant target and clocks `0 1`. Castling
//! rights are validated but not stored since castling is never generated.
//! Piece identity tokens are handed out in row-major order from a8.
//!
//! Positions the game could never reach are refused: each color needs
//! exactly one king, and the side that just moved must not be in check.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::terminal_state::classify;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts.next().unwrap_or("w");
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    let board = parse_board(board_part)?;
    let side_to_move: Color = side_part.parse()?;
    validate_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("fullmove number: {fullmove_part}")))?;

    validate_position(&board, side_to_move)?;

    Ok(GameState {
        board,
        side_to_move,
        status: classify(&board, side_to_move, halfmove_clock),
        en_passant_target,
        halfmove_clock,
        fullmove_number,
        ..GameState::default()
    })
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();
    let mut next_id = 0u8;

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFenToken(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or(ChessError::InvalidFenToken(ch))?;
            if col >= 8 {
                return Err(ChessError::InvalidFen(format!("rank {rank_str} has too many files")));
            }

            board.set(
                Square::new(row as u8, col as u8),
                Some(Piece::new(kind, color, PieceId(next_id))),
            );
            next_id = next_id.wrapping_add(1);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!("rank {rank_str} does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn validate_position(board: &Board, side_to_move: Color) -> ChessResult<()> {
    for color in [Color::White, Color::Black] {
        let kings = board.count_kind(PieceKind::King, color);
        if kings != 1 {
            return Err(ChessError::InvalidFen(format!("{color} has {kings} kings")));
        }
    }
    let waiting = side_to_move.opposite();
    if is_king_in_check(board, waiting) {
        return Err(ChessError::InvalidFen(format!(
            "{waiting} is in check but {side_to_move} is to move"
        )));
    }
    Ok(())
}

fn validate_castling_rights(castling_part: &str) -> ChessResult<()> {
    if castling_part == "-" {
        return Ok(());
    }
    match castling_part.chars().find(|ch| !matches!(ch, 'K' | 'Q' | 'k' | 'q')) {
        Some(ch) => Err(ChessError::InvalidFenToken(ch)),
        None => Ok(()),
    }
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    Ok(Some(algebraic_to_square(en_passant_part)?))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
