//! Conversions between board squares and algebraic coordinates.
//!
//! Row 0 is rank 8 and column 0 is file a, so `a8` is `(0, 0)` and `h1` is
//! `(7, 7)`. Also builds the short notation recorded on every move.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{CandidateMove, PieceKind, Square};

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank as char));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Parse a from/to pair written as `e2e4`, `e2-e4` or `e2 e4`.
pub fn parse_candidate_move(text: &str) -> ChessResult<CandidateMove> {
    let compact: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidAlgebraicString(text.to_owned()));
    }
    let from = algebraic_to_square(&compact[..2])?;
    let to = algebraic_to_square(&compact[2..])?;
    Ok(CandidateMove::new(from, to))
}

/// Short notation: piece letter (none for pawns), `x` on capture, then
/// the destination square.
pub fn move_notation(kind: PieceKind, is_capture: bool, to: Square) -> String {
    let mut out = String::with_capacity(4);
    if let Some(symbol) = kind.notation_symbol() {
        out.push(symbol);
    }
    if is_capture {
        out.push('x');
    }
    out.push_str(&to.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, move_notation, parse_candidate_move};
    use crate::game_state::chess_types::{PieceKind, Square};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::new(7, 7));
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), Square::new(6, 4));
        assert_eq!(Square::new(4, 4).to_string(), "e4");
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a10").is_err());
        assert!(algebraic_to_square("").is_err());
    }

    #[test]
    fn candidate_moves_accept_common_separators() {
        for text in ["e2e4", "e2-e4", "e2 e4"] {
            let mv = parse_candidate_move(text).expect("move should parse");
            assert_eq!(mv.from, Square::new(6, 4));
            assert_eq!(mv.to, Square::new(4, 4));
        }
        assert!(parse_candidate_move("e2").is_err());
    }

    #[test]
    fn notation_marks_piece_and_capture() {
        assert_eq!(move_notation(PieceKind::Pawn, false, Square::new(4, 4)), "e4");
        assert_eq!(move_notation(PieceKind::Pawn, true, Square::new(3, 3)), "xd5");
        assert_eq!(move_notation(PieceKind::Queen, true, Square::new(1, 5)), "Qxf7");
        assert_eq!(move_notation(PieceKind::Knight, false, Square::new(5, 5)), "Kf3");
    }
}
