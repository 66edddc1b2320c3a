//! Medium strategy: one-ply greedy scoring with a little randomness.
//!
//! Each legal move is scored by the value of what it captures plus small
//! bonuses for landing in the centre and for developing a minor piece. The
//! engine then picks uniformly among the three best-scoring moves.

use std::cmp::Ordering;

use rand::prelude::IndexedRandom;
use rand::RngCore;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Board, CandidateMove, Color, GameState, PieceKind};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{piece_value, CENTER_MOVE_BONUS, DEVELOPMENT_BONUS};

/// How many of the best-scoring moves are candidates for the final pick.
pub const GREEDY_SHORTLIST: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    /// One-ply score of `mv` for `color` on `board`.
    pub fn move_score(board: &Board, mv: CandidateMove, color: Color) -> f64 {
        let mut score = board
            .get(mv.to)
            .map(|captured| piece_value(captured.kind))
            .unwrap_or(0.0);

        if mv.to.is_central() {
            score += CENTER_MOVE_BONUS;
        }

        let developing = board.get(mv.from).is_some_and(|moving| {
            matches!(moving.kind, PieceKind::Knight | PieceKind::Bishop)
                && mv.from.row == color.back_row()
        });
        if developing {
            score += DEVELOPMENT_BONUS;
        }

        score
    }

    /// Legal moves with their scores, best first. Equal scores keep
    /// enumeration order.
    pub fn ranked_moves(board: &Board, color: Color) -> Vec<(CandidateMove, f64)> {
        let mut scored: Vec<(CandidateMove, f64)> = all_legal_moves(board, color)
            .into_iter()
            .map(|mv| (mv, Self::move_score(board, mv, color)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move_with_rng(
        &mut self,
        game_state: &GameState,
        color: Color,
        rng: &mut dyn RngCore,
    ) -> EngineOutput {
        let ranked = Self::ranked_moves(&game_state.board, color);
        let shortlist = &ranked[..ranked.len().min(GREEDY_SHORTLIST)];
        let picked = shortlist.choose(rng).copied();
        debug!(
            engine = self.name(),
            legal_moves = ranked.len(),
            picked = ?picked.map(|(mv, _)| mv),
            score = ?picked.map(|(_, score)| score),
            "greedy engine chose"
        );

        EngineOutput {
            best_move: picked.map(|(mv, _)| mv),
            score: picked.map(|(_, score)| score),
            legal_moves: ranked.len(),
        }
    }
}
