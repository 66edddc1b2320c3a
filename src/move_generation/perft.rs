//! Perft: leaf-node counts over the legal move tree.
//!
//! Used to validate move generation against published counts for positions
//! shallow enough that castling, en passant and promotion cannot arise.

use crate::game_state::chess_types::{GameState, GameStatus};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(&game_state.board, game_state.side_to_move) {
        let Some(next) = make_move(game_state, mv.from, mv.to) else {
            continue;
        };

        if depth == 1 {
            let committed = next.last_move.as_ref();
            total.merge(PerftCounts {
                nodes: 1,
                captures: usize::from(committed.is_some_and(|m| m.is_capture())),
                checks: usize::from(next.status.is_king_attacked()),
                checkmates: usize::from(next.status == GameStatus::Checkmate),
            });
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }

    total
}
