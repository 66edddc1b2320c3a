//! Move records.
//!
//! A [`Move`] is the committed, history-bearing record produced by
//! `make_move`; a [`CandidateMove`] is the bare from/to pair the legal-move
//! enumerators and bot strategies pass around.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::utils::algebraic::move_notation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
    /// Declared for presentation layers; never set by the engine.
    pub is_en_passant: bool,
    /// Declared for presentation layers; never set by the engine.
    pub is_castling: bool,
    /// Declared for presentation layers; never set by the engine.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Builds the record for an already-validated relocation.
    pub(crate) fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            notation: move_notation(piece.kind, captured.is_some(), to),
            is_en_passant: false,
            is_castling: false,
            promotion: None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
}

impl CandidateMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
