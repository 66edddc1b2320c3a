//! Easy strategy: a uniformly random legal move.

use rand::prelude::IndexedRandom;
use rand::RngCore;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move_with_rng(
        &mut self,
        game_state: &GameState,
        color: Color,
        rng: &mut dyn RngCore,
    ) -> EngineOutput {
        let legal_moves = all_legal_moves(&game_state.board, color);
        let picked = legal_moves.as_slice().choose(rng).copied();
        debug!(
            engine = self.name(),
            legal_moves = legal_moves.len(),
            picked = ?picked,
            "random engine chose"
        );

        EngineOutput {
            best_move: picked,
            score: None,
            legal_moves: legal_moves.len(),
        }
    }
}
