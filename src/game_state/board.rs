//! 8x8 mailbox board.
//!
//! `Board` is a plain `Copy` array of optional pieces. Every transition works
//! on a fresh copy, so two live game states can never share row storage.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::BACK_ROW_ORDER;
use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting arrangement: black on rows 0-1, white on rows 6-7.
    ///
    /// Identity tokens are numbered 0..32 row-major from a8, the same order
    /// the FEN parser uses.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        let rows = [
            (Color::Black.back_row(), Color::Black, None),
            (Color::Black.pawn_start_row(), Color::Black, Some(PieceKind::Pawn)),
            (Color::White.pawn_start_row(), Color::White, Some(PieceKind::Pawn)),
            (Color::White.back_row(), Color::White, None),
        ];

        let mut next_id = 0u8;
        for (row, color, pawn) in rows {
            for (col, back_kind) in BACK_ROW_ORDER.iter().enumerate() {
                let kind = pawn.unwrap_or(*back_kind);
                board.set(
                    Square::new(row, col as u8),
                    Some(Piece::new(kind, color, PieceId(next_id))),
                );
                next_id += 1;
            }
        }

        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Copy of this board with the piece on `from` relocated to `to`.
    ///
    /// Whatever stood on `to` is dropped; the caller reads it beforehand if
    /// it needs the captured piece.
    #[inline]
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let moving = next.get(from);
        next.set(to, moving);
        next.set(from, None);
        next
    }

    /// Occupied squares in row-major order with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares belonging to `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count_kind(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }
}
