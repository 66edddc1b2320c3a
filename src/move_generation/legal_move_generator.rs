//! Legal move generation.
//!
//! A pseudo-legal move is legal when, after relocating the piece on a copy
//! of the board, the mover's own king is not attacked. This single trial is
//! the only legality filter: it covers pins, check evasions and king safety
//! alike. `make_move`, the terminal classifier and the bot strategies all go
//! through [`leaves_king_safe`].

use tracing::trace;

use crate::game_state::chess_types::{Board, CandidateMove, Color, GameState, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{piece_targets, pseudo_legal_moves};

/// Trial-apply `from -> to` and report whether `color`'s king is safe on the
/// resulting board.
#[inline]
pub fn leaves_king_safe(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let trial = board.with_move(from, to);
    let safe = !is_king_in_check(&trial, color);
    if !safe {
        trace!(%from, %to, %color, "rejected: leaves own king attacked");
    }
    safe
}

/// Legal destinations for the piece on `from`.
///
/// Empty when the square is empty or holds a piece that is not the side to
/// move's. The state's en-passant target is passed through to the pawn
/// generator.
pub fn legal_targets(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = game_state.board.get(from) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move {
        return Vec::new();
    }

    pseudo_legal_moves(&game_state.board, from, game_state.en_passant_target)
        .into_iter()
        .filter(|&to| leaves_king_safe(&game_state.board, from, to, piece.color))
        .collect()
}

/// Every legal move for `color`, scanning the board row-major and keeping
/// each piece's generation order. No en-passant target is used.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(48);
    for (from, piece) in board.pieces_of(color) {
        for to in piece_targets(board, from, piece, None) {
            if leaves_king_safe(board, from, to, color) {
                out.push(CandidateMove::new(from, to));
            }
        }
    }
    out
}

/// Short-circuiting form of `!all_legal_moves(board, color).is_empty()`.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|(from, piece)| {
        piece_targets(board, from, piece, None)
            .into_iter()
            .any(|to| leaves_king_safe(board, from, to, color))
    })
}
