//! State transitions: commit and undo.
//!
//! Both operations take a snapshot by reference and return a new one. The
//! input is never modified, and an absent result means "nothing happened".

use tracing::{debug, trace};

use crate::game_state::chess_types::{Color, GameState, Move, PieceKind, Square};
use crate::move_generation::legal_move_generator::leaves_king_safe;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::move_generation::terminal_state::classify;

/// Commit `from -> to` for the side to move.
///
/// Returns `None` when `from` does not hold a piece of the side to move,
/// when `to` is not among that piece's pseudo-legal targets, or when the
/// move would leave the mover's own king attacked.
pub fn make_move(game_state: &GameState, from: Square, to: Square) -> Option<GameState> {
    let board = &game_state.board;
    let piece = board.get(from)?;

    if piece.color != game_state.side_to_move {
        trace!(%from, %to, "rejected: not the side to move");
        return None;
    }
    if !pseudo_legal_moves(board, from, game_state.en_passant_target).contains(&to) {
        trace!(%from, %to, kind = %piece.kind, "rejected: not a pseudo-legal target");
        return None;
    }
    if !leaves_king_safe(board, from, to, piece.color) {
        return None;
    }

    let captured = board.get(to);
    let next_board = board.with_move(from, to);
    let mv = Move::new(from, to, piece, captured);
    debug!(notation = %mv.notation, %from, %to, "move committed");

    let halfmove_clock = if captured.is_some() || piece.kind == PieceKind::Pawn {
        0
    } else {
        game_state.halfmove_clock.saturating_add(1)
    };
    let fullmove_number = if piece.color == Color::Black {
        game_state.fullmove_number.saturating_add(1)
    } else {
        game_state.fullmove_number
    };
    let side_to_move = piece.color.opposite();

    let mut history = Vec::with_capacity(game_state.history.len() + 1);
    history.extend_from_slice(&game_state.history);
    history.push(mv.clone());

    Some(GameState {
        board: next_board,
        side_to_move,
        status: classify(&next_board, side_to_move, halfmove_clock),
        history,
        selected_square: None,
        valid_moves: Vec::new(),
        last_move: Some(mv),
        en_passant_target: None,
        halfmove_clock,
        fullmove_number,
    })
}

/// Take back the most recent move; `None` when the history is empty.
///
/// The half-move clock is only decremented (floored at zero). When the
/// undone move had reset a non-zero clock, the earlier value is not
/// recovered.
pub fn undo_last_move(game_state: &GameState) -> Option<GameState> {
    let (last, rest) = game_state.history.split_last()?;

    let mut board = game_state.board;
    board.set(last.from, Some(last.piece));
    board.set(last.to, last.captured);

    let side_to_move = last.piece.color;
    let halfmove_clock = game_state.halfmove_clock.saturating_sub(1);
    let fullmove_number = if last.piece.color == Color::Black {
        game_state.fullmove_number.saturating_sub(1)
    } else {
        game_state.fullmove_number
    };
    debug!(notation = %last.notation, "move undone");

    Some(GameState {
        board,
        side_to_move,
        status: classify(&board, side_to_move, halfmove_clock),
        history: rest.to_vec(),
        selected_square: None,
        valid_moves: Vec::new(),
        last_move: rest.last().cloned(),
        en_passant_target: None,
        halfmove_clock,
        fullmove_number,
    })
}
