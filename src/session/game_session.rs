//! One game between a presentation layer and the rules core.
//!
//! A `GameSession` owns the current immutable [`GameState`] and replaces it
//! wholesale on every accepted move, bot reply or undo. Turn gating, two-ply
//! undo against the bot and hint requests live here so a front end only
//! forwards clicks and renders the state it reads back.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::advice::check_escape::Suggestion;
use crate::advice::suggestions::{suggest_moves, DEFAULT_SUGGESTION_LIMIT};
use crate::chess_errors::{ChessError, SessionError};
use crate::engines::search_bot::{Difficulty, SearchBot};
use crate::game_state::chess_types::{CandidateMove, Color, GameState, Move, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsBot,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsBot => "human-vs-bot",
        })
    }
}

impl FromStr for GameMode {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human-vs-human" | "hvh" | "pvp" => Ok(GameMode::HumanVsHuman),
            "human-vs-bot" | "hvb" | "bot" => Ok(GameMode::HumanVsBot),
            _ => Err(ChessError::UnknownGameMode(s.to_owned())),
        }
    }
}

/// Session settings chosen before the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Color the human plays in bot mode. Ignored for human-vs-human.
    pub player_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsBot,
            difficulty: Difficulty::Medium,
            player_color: Color::White,
        }
    }
}

/// What a click did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Game over or the bot is to move.
    Ignored,
    Selected(Square),
    Deselected,
    Moved(Move),
}

#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    bot: Option<SearchBot>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_state(config, GameState::new_game())
    }

    /// Start from an arbitrary position, for example one parsed from FEN.
    pub fn with_state(config: GameConfig, state: GameState) -> Self {
        let bot = match config.mode {
            GameMode::HumanVsBot => Some(SearchBot::new(
                config.difficulty,
                config.player_color.opposite(),
            )),
            GameMode::HumanVsHuman => None,
        };
        info!(mode = %config.mode, difficulty = %config.difficulty, "session started");
        Self { config, state, bot }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True when a bot is configured and owns the side to move.
    pub fn is_bot_turn(&self) -> bool {
        self.bot
            .as_ref()
            .is_some_and(|bot| bot.color() == self.state.side_to_move)
    }

    /// Selection handling for a board click.
    ///
    /// Clicking the selected square deselects it, clicking one of its cached
    /// legal targets plays the move, clicking an own piece selects it and
    /// anything else clears the selection. Clicks are accepted while the
    /// side to move is in check; only a finished game or the bot's turn
    /// ignores them.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.state.is_game_over() || self.is_bot_turn() {
            return ClickOutcome::Ignored;
        }

        if let Some(selected) = self.state.selected_square {
            if selected == square {
                self.state = self.state.clear_selection();
                return ClickOutcome::Deselected;
            }
            if self.state.valid_moves.contains(&square) {
                if let Some(next) = self.state.make_move(selected, square) {
                    self.state = next;
                    if let Some(mv) = self.state.last_move.clone() {
                        return ClickOutcome::Moved(mv);
                    }
                }
            }
        }

        self.state = self.state.select_square(square);
        match self.state.selected_square {
            Some(selected) => ClickOutcome::Selected(selected),
            None => ClickOutcome::Deselected,
        }
    }

    /// Play `from -> to` for the human side to move.
    pub fn commit_move(&mut self, from: Square, to: Square) -> Result<Move, SessionError> {
        if self.state.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if self.is_bot_turn() {
            return Err(SessionError::NotPlayersTurn);
        }
        self.apply(from, to)
    }

    pub fn play_bot_turn(&mut self) -> Result<Move, SessionError> {
        self.play_bot_turn_with(|bot, state| bot.choose_move(state))
    }

    pub fn play_bot_turn_with_rng(&mut self, rng: &mut dyn RngCore) -> Result<Move, SessionError> {
        self.play_bot_turn_with(|bot, state| bot.choose_move_with_rng(state, rng))
    }

    /// The bot also moves while in check; only a finished game stops it.
    fn play_bot_turn_with<F>(&mut self, choose: F) -> Result<Move, SessionError>
    where
        F: FnOnce(&mut SearchBot, &GameState) -> Option<CandidateMove>,
    {
        if self.state.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if !self.is_bot_turn() {
            return Err(if self.bot.is_none() {
                SessionError::NoBot
            } else {
                SessionError::NotBotsTurn
            });
        }
        let bot = self.bot.as_mut().ok_or(SessionError::NoBot)?;
        let choice = choose(bot, &self.state).ok_or(SessionError::GameOver)?;
        self.apply(choice.from, choice.to)
    }

    fn apply(&mut self, from: Square, to: Square) -> Result<Move, SessionError> {
        let next = self
            .state
            .make_move(from, to)
            .ok_or(SessionError::IllegalMove { from, to })?;
        let mv = next.last_move.clone().ok_or(SessionError::IllegalMove { from, to })?;
        debug!(notation = %mv.notation, status = %next.status, "session advanced");
        self.state = next;
        Ok(mv)
    }

    /// Take back the last ply. Against a bot, a second ply is taken back if
    /// the first one leaves the bot to move.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let mut next = self.state.undo().ok_or(SessionError::NothingToUndo)?;
        if self.config.mode == GameMode::HumanVsBot
            && next.side_to_move != self.config.player_color
        {
            if let Some(second) = next.undo() {
                next = second;
            }
        }
        debug!(plies = next.history.len(), "session rewound");
        self.state = next;
        Ok(())
    }

    /// Hints for the side to move.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        suggest_moves(&self.state, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Back to the starting position with the same configuration.
    pub fn restart(&mut self) {
        info!("session restarted");
        self.state = GameState::new_game();
    }
}
