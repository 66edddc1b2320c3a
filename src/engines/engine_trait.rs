//! Engine abstraction layer used by the bot.
//!
//! Defines the common output payload so the three strategies can be
//! selected at runtime behind a single trait interface.

use rand::RngCore;

use crate::game_state::chess_types::{CandidateMove, Color, GameState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    pub best_move: Option<CandidateMove>,
    /// Strategy-specific score of `best_move`, when the strategy has one.
    pub score: Option<f64>,
    pub legal_moves: usize,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick a move for `color` on `game_state`'s board. `best_move` is
    /// `None` only when `color` has no legal move.
    fn choose_move_with_rng(
        &mut self,
        game_state: &GameState,
        color: Color,
        rng: &mut dyn RngCore,
    ) -> EngineOutput;

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> EngineOutput {
        let mut rng = rand::rng();
        self.choose_move_with_rng(game_state, color, &mut rng)
    }
}
