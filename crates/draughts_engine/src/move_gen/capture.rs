//! Capture chain search
//!
//! ## Algorithm
//!
//! The search is a depth-first walk over jumps. From the current square it tries all four
//! diagonals, records every landing square it can reach, and recurses from each landing with the
//! jumped piece added to the captured set:
//!
//! - **Man**: the adjacent square must hold an enemy piece not yet captured and the square right
//!   behind it must be empty. Men capture backwards as well as forwards.
//! - **King** (flying king): slide over empty squares to the first occupied one. If that is an
//!   enemy not yet captured, every empty square behind it, up to the next obstruction, is a
//!   separate landing.
//!
//! A man that lands on its promotion row in the middle of a chain continues the same chain with
//! king movement.
//!
//! ## Chain State
//!
//! Squares in the captured set are obstacles for the rest of the chain: they can be neither
//! jumped again nor landed on, whether the captured piece is still physically on the board (deep
//! in the recursion) or has already been removed by the session. The square the piece started
//! from is treated as vacant, so a king may pass over or land on it.
//!
//! ## Termination
//!
//! The recursion is keyed by `(square, captured set, rank)` in a visited table threaded through
//! the search. A state is expanded at most once, so the walk is finite even for kings facing each
//! other on open diagonals. [`MAX_CHAIN_DEPTH`] bounds the depth as a backstop.
//!
//! ## Output
//!
//! Every landing square reachable by a partial or maximal chain is reported once per distinct
//! captured set, together with the full path that reached it. The session only offers the single
//! jumps ([`CaptureMove::is_single_jump`]) and walks a chain one jump at a time; the deeper entries
//! serve callers that want to score whole sequences.

use std::collections::HashSet;

use tracing::trace;

use crate::bitset::SquareSet;
use crate::board::Board;
use crate::constants::{DIAGONALS, MAX_CHAIN_DEPTH};
use crate::types::{CaptureStep, Piece, Rank, Side, Square};

/// A landing square reachable by a capture chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureMove {
    /// Where the chain (so far) ends
    pub landing: Square,
    /// Enemy piece taken by the last jump of the path
    pub captured: Square,
    /// Every square captured in the chain, seed squares included
    pub captured_set: SquareSet,
    /// Jumps from the origin to `landing`
    pub path: Vec<CaptureStep>,
    /// The piece was a man at the origin and is a king on `landing`
    pub promoted: bool,
}

impl CaptureMove {
    /// True for a capture made by one jump from the origin
    pub fn is_single_jump(&self) -> bool {
        self.path.len() == 1
    }

    /// Number of pieces taken along `path`
    pub fn jumps(&self) -> usize {
        self.path.len()
    }
}

/// Enumerate every capture sequence for `piece` standing on `from`.
///
/// `already_captured` seeds the captured set when continuing a chain; pass an empty set at the
/// start of a turn.
///
/// # Examples
///
/// ```rust
/// use draughts_engine::bitset::SquareSet;
/// use draughts_engine::board::Board;
/// use draughts_engine::move_gen::generate_captures;
/// use draughts_engine::types::{Piece, Side, Square};
///
/// let man = Piece::Man(Side::White);
/// let board = Board::from_pieces(&[
///     (Square::new(4, 1), man),
///     (Square::new(3, 2), Piece::Man(Side::Black)),
/// ])
/// .unwrap();
///
/// let captures = generate_captures(&board, Square::new(4, 1), man, &SquareSet::new());
/// assert_eq!(captures.len(), 1);
/// assert_eq!(captures[0].landing, Square::new(2, 3));
/// assert_eq!(captures[0].captured, Square::new(3, 2));
/// ```
pub fn generate_captures(
    board: &Board,
    from: Square,
    piece: Piece,
    already_captured: &SquareSet,
) -> Vec<CaptureMove> {
    let (Some(side), Some(rank)) = (piece.side(), piece.rank()) else {
        return Vec::new();
    };
    if !from.is_playable() {
        return Vec::new();
    }

    let mut view = *board;
    view.put(from, Piece::Empty);

    let mut search = CaptureSearch {
        board: &view,
        side,
        start_rank: rank,
        visited: HashSet::new(),
        recorded: HashSet::new(),
        moves: Vec::new(),
    };
    let mut path = Vec::with_capacity(MAX_CHAIN_DEPTH);
    search.extend(from, rank, *already_captured, &mut path);

    trace!(
        "[CAPTURE] {} from {}: {} landings, {} states expanded",
        side,
        from,
        search.moves.len(),
        search.visited.len()
    );
    search.moves
}

/// True if `piece` on `from` has at least one capture.
///
/// Looks one jump deep only, which is enough to decide whether a capture exists.
pub fn has_capture(
    board: &Board,
    from: Square,
    piece: Piece,
    already_captured: &SquareSet,
) -> bool {
    let (Some(side), Some(rank)) = (piece.side(), piece.rank()) else {
        return false;
    };
    if !from.is_playable() {
        return false;
    }

    let mut view = *board;
    view.put(from, Piece::Empty);

    DIAGONALS.iter().any(|&direction| {
        !jumps_along(&view, side, from, rank, direction, already_captured).is_empty()
    })
}

struct CaptureSearch<'a> {
    board: &'a Board,
    side: Side,
    start_rank: Rank,
    visited: HashSet<(Square, SquareSet, Rank)>,
    recorded: HashSet<(Square, SquareSet)>,
    moves: Vec<CaptureMove>,
}

impl CaptureSearch<'_> {
    fn extend(&mut self, at: Square, rank: Rank, captured: SquareSet, path: &mut Vec<CaptureStep>) {
        if path.len() >= MAX_CHAIN_DEPTH {
            return;
        }
        if !self.visited.insert((at, captured, rank)) {
            return;
        }

        for &direction in &DIAGONALS {
            for step in jumps_along(self.board, self.side, at, rank, direction, &captured) {
                let next_captured = captured.with(step.captured);
                let crowned =
                    rank == Rank::Man && step.landing.row == self.side.promotion_row();
                let next_rank = if crowned { Rank::King } else { rank };

                path.push(step);
                if self.recorded.insert((step.landing, next_captured)) {
                    self.moves.push(CaptureMove {
                        landing: step.landing,
                        captured: step.captured,
                        captured_set: next_captured,
                        path: path.clone(),
                        promoted: self.start_rank == Rank::Man && next_rank == Rank::King,
                    });
                }
                self.extend(step.landing, next_rank, next_captured, path);
                path.pop();
            }
        }
    }
}

/// Single jumps available from `at` along one diagonal
fn jumps_along(
    board: &Board,
    side: Side,
    at: Square,
    rank: Rank,
    direction: (i8, i8),
    captured: &SquareSet,
) -> Vec<CaptureStep> {
    match rank {
        Rank::Man => {
            let Some(target) = at.offset(direction, 1) else {
                return Vec::new();
            };
            if !is_capturable(board, side, target, captured) {
                return Vec::new();
            }
            match at.offset(direction, 2) {
                Some(landing) if is_open(board, landing, captured) => vec![CaptureStep {
                    landing,
                    captured: target,
                }],
                _ => Vec::new(),
            }
        }
        Rank::King => {
            let mut step = 1;
            let target = loop {
                let Some(square) = at.offset(direction, step) else {
                    return Vec::new();
                };
                if captured.contains(square) {
                    return Vec::new();
                }
                if !board.is_empty_at(square) {
                    break square;
                }
                step += 1;
            };
            if !is_capturable(board, side, target, captured) {
                return Vec::new();
            }

            let mut landings = Vec::new();
            step += 1;
            while let Some(landing) = at.offset(direction, step) {
                if !is_open(board, landing, captured) {
                    break;
                }
                landings.push(CaptureStep {
                    landing,
                    captured: target,
                });
                step += 1;
            }
            landings
        }
    }
}

#[inline]
fn is_capturable(board: &Board, side: Side, square: Square, captured: &SquareSet) -> bool {
    !captured.contains(square) && board.piece_at(square).belongs_to(side.opponent())
}

#[inline]
fn is_open(board: &Board, square: Square, captured: &SquareSet) -> bool {
    !captured.contains(square) && board.is_empty_at(square)
}
