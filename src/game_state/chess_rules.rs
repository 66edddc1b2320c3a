//! Canonical chess-rule constants.

use crate::game_state::chess_types::PieceKind;

/// Standard starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece order along each back row, file a to file h.
pub const BACK_ROW_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Half-move clock value at which a position is classified as drawn.
pub const DRAW_HALFMOVE_LIMIT: u16 = 50;
