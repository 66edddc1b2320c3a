//! Errors used throughout the chess engine.
//!
//! In the rules layer illegal moves and empty selections are ordinary
//! outcomes reported through `Option`. `ChessError` covers malformed input
//! handed to the crate (square text, FEN fields, configuration names), and
//! `SessionError` is what a game session refuses at its boundary.

use crate::game_state::chess_types::Square;

/// Unified error type for parsing and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square string such as `e4` could not be interpreted.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// A single character of a square string was out of range.
    #[error("invalid algebraic character: {0}")]
    InvalidAlgebraicChar(char),

    /// The FEN text was structurally malformed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Found an unexpected piece character in a FEN placement field.
    #[error("invalid FEN piece character: {0}")]
    InvalidFenToken(char),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("unknown game mode: {0}")]
    UnknownGameMode(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

/// Refusals raised by a [`GameSession`](crate::session::game_session::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,

    #[error("it is not the human player's turn")]
    NotPlayersTurn,

    #[error("it is not the bot's turn")]
    NotBotsTurn,

    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("no bot is configured for this session")]
    NoBot,
}
