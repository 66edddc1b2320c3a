//! Core value types shared by every subsystem.
//!
//! Squares, pieces, colors and the game status enum are all small `Copy`
//! values so boards built from them can be duplicated wholesale on every
//! transition without any shared storage between snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessError;

pub use crate::game_state::board::Board;
pub use crate::game_state::chess_move::{CandidateMove, Move};
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step (row 0 is rank 8).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding this color's pieces at the start of the game.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ChessError::UnknownColor(s.to_owned())),
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Prefix used in move notation: the capitalised first letter of the
    /// kind name, omitted for pawns. Knights and kings therefore share `K`.
    pub const fn notation_symbol(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('K'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque identity token used by presentation layers to track a piece
/// across moves. Carries no rules meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub id: PieceId,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, id: PieceId) -> Self {
        Self { kind, color, id }
    }
}

/// A board coordinate. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Builds a square; callers must pass coordinates in `0..8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The square `d_row`/`d_col` away, if it is still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Manhattan distance from the geometric centre of the board.
    #[inline]
    pub fn center_distance(self) -> f64 {
        (3.5 - self.row as f64).abs() + (3.5 - self.col as f64).abs()
    }

    /// True for d4, e4, d5 and e5.
    #[inline]
    pub fn is_central(self) -> bool {
        (3..=4).contains(&self.row) && (3..=4).contains(&self.col)
    }

    /// All 64 squares in row-major order, starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.col),
            char::from(b'8' - self.row)
        )
    }
}

/// Classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    /// Checkmate, stalemate and draw end the game.
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }

    /// Check and checkmate: the side to move's king is attacked.
    #[inline]
    pub const fn is_king_attacked(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, GameStatus, PieceKind, Square};

    #[test]
    fn square_display_uses_row_zero_as_rank_eight() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
        assert_eq!(Square::new(6, 4).to_string(), "e2");
    }

    #[test]
    fn offset_stays_on_board() {
        let a8 = Square::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn central_squares_are_d4_e4_d5_e5() {
        let central: Vec<String> = Square::all()
            .filter(|sq| sq.is_central())
            .map(|sq| sq.to_string())
            .collect();
        assert_eq!(central, vec!["d5", "e5", "d4", "e4"]);
    }

    #[test]
    fn color_parsing_accepts_names_and_letters() {
        assert_eq!("white".parse::<Color>().expect("white parses"), Color::White);
        assert_eq!("B".parse::<Color>().expect("b parses"), Color::Black);
        assert!("green".parse::<Color>().is_err());
    }

    #[test]
    fn notation_symbols_use_first_letter() {
        assert_eq!(PieceKind::Pawn.notation_symbol(), None);
        assert_eq!(PieceKind::Knight.notation_symbol(), Some('K'));
        assert_eq!(PieceKind::Queen.notation_symbol(), Some('Q'));
    }

    #[test]
    fn only_terminal_statuses_end_the_game() {
        assert!(!GameStatus::Playing.is_game_over());
        assert!(!GameStatus::Check.is_game_over());
        assert!(GameStatus::Checkmate.is_game_over());
        assert!(GameStatus::Stalemate.is_game_over());
        assert!(GameStatus::Draw.is_game_over());
    }
}
