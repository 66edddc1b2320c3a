//! Hard strategy: fixed-depth alpha-beta search.

use rand::RngCore;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Color, GameState};
use crate::search::alpha_beta::{search_best_move, HARD_SEARCH_DEPTH};

/// Deterministic: the random source is ignored.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxEngine {
    depth: u8,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_depth(HARD_SEARCH_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self { depth: depth.max(1) }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move_with_rng(
        &mut self,
        game_state: &GameState,
        color: Color,
        _rng: &mut dyn RngCore,
    ) -> EngineOutput {
        let Some(outcome) = search_best_move(&game_state.board, color, self.depth) else {
            debug!(engine = self.name(), "no legal moves");
            return EngineOutput::default();
        };

        debug!(
            engine = self.name(),
            depth = self.depth,
            nodes = outcome.stats.nodes,
            best = %outcome.best_move,
            score = outcome.score,
            "minimax engine chose"
        );

        EngineOutput {
            best_move: Some(outcome.best_move),
            score: Some(outcome.score),
            legal_moves: outcome.stats.root_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn two_calls_on_the_same_state_agree() {
        let game = GameState::new_game()
            .make_move(Square::new(6, 4), Square::new(4, 4))
            .expect("e4 is legal");
        let mut engine = MinimaxEngine::new();
        let first = engine.choose_move(&game, Color::Black);
        let second = engine.choose_move(&game, Color::Black);
        assert!(first.best_move.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn depth_is_at_least_one() {
        assert_eq!(MinimaxEngine::with_depth(0).depth(), 1);
        assert_eq!(MinimaxEngine::new().depth(), 3);
    }

    #[test]
    fn stalemate_branch_is_scored_like_a_win() {
        // Qb6 stalemates the cornered king, which scores +inf like a mate.
        let game = parse_fen("k7/8/8/1Q6/8/8/8/7K w - - 0 1").expect("fen should parse");
        let out = MinimaxEngine::new().choose_move(&game, Color::White);
        assert_eq!(out.score, Some(f64::INFINITY));
    }
}
