//! The computer opponent.
//!
//! A `SearchBot` plays one color at one difficulty for the lifetime of a
//! session. Difficulty selects the strategy:
//!
//! | Difficulty | Engine            | Behaviour                               |
//! |------------|-------------------|-----------------------------------------|
//! | Easy       | [`RandomEngine`]  | uniform random legal move               |
//! | Medium     | [`GreedyEngine`]  | random pick among the 3 best one-ply    |
//! | Hard       | [`MinimaxEngine`] | 3-ply alpha-beta, deterministic         |
//!
//! The search runs synchronously to completion. Callers that need a
//! responsive front end should invoke it off their interaction path.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chess_errors::ChessError;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{CandidateMove, Color, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    fn build_engine(self) -> Box<dyn Engine> {
        match self {
            Difficulty::Easy => Box::new(RandomEngine::new()),
            Difficulty::Medium => Box::new(GreedyEngine::new()),
            Difficulty::Hard => Box::new(MinimaxEngine::new()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::UnknownDifficulty(s.to_owned())),
        }
    }
}

pub struct SearchBot {
    difficulty: Difficulty,
    color: Color,
    engine: Box<dyn Engine>,
}

impl SearchBot {
    pub fn new(difficulty: Difficulty, color: Color) -> Self {
        info!(%difficulty, %color, "bot configured");
        Self {
            difficulty,
            color,
            engine: difficulty.build_engine(),
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Move for the bot's color on `game_state`, or `None` if it has none.
    pub fn choose_move(&mut self, game_state: &GameState) -> Option<CandidateMove> {
        self.analyse(game_state).best_move
    }

    pub fn choose_move_with_rng(
        &mut self,
        game_state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Option<CandidateMove> {
        self.engine
            .choose_move_with_rng(game_state, self.color, rng)
            .best_move
    }

    /// Full engine output, including the strategy's score if it has one.
    pub fn analyse(&mut self, game_state: &GameState) -> EngineOutput {
        self.engine.choose_move(game_state, self.color)
    }
}

impl fmt::Debug for SearchBot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBot")
            .field("difficulty", &self.difficulty)
            .field("color", &self.color)
            .field("engine", &self.engine.name())
            .finish()
    }
}
