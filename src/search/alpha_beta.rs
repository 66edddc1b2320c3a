//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The searching color maximizes and its opponent minimizes. Leaves are
//! scored with [`evaluate_board`] from the searching color's side. A node
//! whose mover has no legal move scores as a loss for that mover
//! (negative infinity when maximizing, positive infinity when minimizing),
//! whether the position is checkmate or stalemate.
//!
//! Children are visited in `all_legal_moves` order and the root keeps the
//! first move among equal scores, so the result is deterministic for a given
//! board.

use crate::game_state::chess_types::{Board, CandidateMove, Color};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::evaluate_board;

/// Plies searched by the hard strategy, root move included.
pub const HARD_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Legal moves available at the root.
    pub root_moves: usize,
    /// Positions visited below the root, leaves included.
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub best_move: CandidateMove,
    pub score: f64,
    pub stats: SearchStats,
}

/// Best root move for `color` searching `depth` plies; `None` when `color`
/// has no legal move.
pub fn search_best_move(board: &Board, color: Color, depth: u8) -> Option<SearchOutcome> {
    let root_moves = all_legal_moves(board, color);
    let mut stats = SearchStats {
        root_moves: root_moves.len(),
        ..SearchStats::default()
    };
    let mut best: Option<(CandidateMove, f64)> = None;
    let mut alpha = f64::NEG_INFINITY;

    for mv in root_moves {
        let child = board.with_move(mv.from, mv.to);
        let score = alpha_beta(
            &child,
            depth.saturating_sub(1),
            alpha,
            f64::INFINITY,
            false,
            color,
            &mut stats,
        );
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    best.map(|(best_move, score)| SearchOutcome {
        best_move,
        score,
        stats,
    })
}

fn alpha_beta(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    searcher: Color,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;
    if depth == 0 {
        return evaluate_board(board, searcher);
    }

    let mover = if maximizing { searcher } else { searcher.opposite() };
    let moves = all_legal_moves(board, mover);
    if moves.is_empty() {
        return if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            let child = board.with_move(mv.from, mv.to);
            value = value.max(alpha_beta(&child, depth - 1, alpha, beta, false, searcher, stats));
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        value
    } else {
        let mut value = f64::INFINITY;
        for mv in moves {
            let child = board.with_move(mv.from, mv.to);
            value = value.min(alpha_beta(&child, depth - 1, alpha, beta, true, searcher, stats));
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        value
    }
}

/// Plain minimax over the same tree, without pruning. Returns the best root
/// move and score exactly as [`search_best_move`] would; used to validate
/// the pruned search and as a benchmark baseline.
pub fn minimax_best_move(board: &Board, color: Color, depth: u8) -> Option<SearchOutcome> {
    let root_moves = all_legal_moves(board, color);
    let mut stats = SearchStats {
        root_moves: root_moves.len(),
        ..SearchStats::default()
    };
    let mut best: Option<(CandidateMove, f64)> = None;

    for mv in root_moves {
        let child = board.with_move(mv.from, mv.to);
        let score = minimax(&child, depth.saturating_sub(1), false, color, &mut stats);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best.map(|(best_move, score)| SearchOutcome {
        best_move,
        score,
        stats,
    })
}

fn minimax(board: &Board, depth: u8, maximizing: bool, searcher: Color, stats: &mut SearchStats) -> f64 {
    stats.nodes += 1;
    if depth == 0 {
        return evaluate_board(board, searcher);
    }

    let mover = if maximizing { searcher } else { searcher.opposite() };
    let moves = all_legal_moves(board, mover);
    if moves.is_empty() {
        return if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let scores = moves.into_iter().map(|mv| {
        let child = board.with_move(mv.from, mv.to);
        minimax(&child, depth - 1, !maximizing, searcher, stats)
    });
    if maximizing {
        scores.fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.fold(f64::INFINITY, f64::min)
    }
}
