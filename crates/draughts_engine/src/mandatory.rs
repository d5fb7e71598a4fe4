//! Mandatory capture resolution
//!
//! In Russian draughts a capture, when available, must be made. This module answers the two
//! questions the session asks before offering any move:
//!
//! - does the side to move have a capture anywhere on the board ([`has_any_capture`])
//! - which of its pieces can make one ([`forced_origins`])
//!
//! While a capture chain is in progress only the chain piece may move, so it is the sole forced
//! origin, and its search is seeded with the squares already captured in the chain.

use std::collections::BTreeSet;

use crate::bitset::SquareSet;
use crate::move_gen::has_capture;
use crate::state::GameState;
use crate::types::Square;

/// True if any piece of the side to move can capture.
///
/// Stops at the first capturing piece found.
pub fn has_any_capture(state: &GameState) -> bool {
    capturing_pieces(state).next().is_some()
}

/// Squares holding a piece of the side to move that has at least one capture
pub fn forced_origins(state: &GameState) -> BTreeSet<Square> {
    capturing_pieces(state).collect()
}

fn capturing_pieces(state: &GameState) -> Box<dyn Iterator<Item = Square> + '_> {
    if state.must_continue_capture {
        let chain = state.chain_set();
        let continuing = state.selected.filter(|&square| {
            state.board.get(square).is_ok_and(|piece| {
                piece.belongs_to(state.side_to_move)
                    && has_capture(&state.board, square, piece, &chain)
            })
        });
        return Box::new(continuing.into_iter());
    }

    let empty = SquareSet::new();
    Box::new(
        state
            .board
            .pieces_of(state.side_to_move)
            .filter(move |&(square, piece)| has_capture(&state.board, square, piece, &empty))
            .map(|(square, _)| square),
    )
}
