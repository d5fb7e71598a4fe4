//! Quiet (non-capturing) move generation
//!
//! ## Movement Rules
//!
//! - **Man**: one step along either forward diagonal onto an empty square. White moves toward
//!   row 0, Black toward row 7. Men never step backwards without capturing.
//! - **King**: slides along any of the four diagonals over empty squares, stopping before the
//!   first occupied square or the board edge.

use crate::board::Board;
use crate::constants::DIAGONALS;
use crate::types::{Piece, Square};

/// Destinations of every quiet move available to the piece on `from`.
///
/// Returns an empty list for an empty or unplayable square. Mandatory capture is not considered
/// here.
///
/// # Examples
///
/// ```rust
/// use draughts_engine::board::Board;
/// use draughts_engine::move_gen::generate_simple_moves;
/// use draughts_engine::types::Square;
///
/// let board = Board::initial();
/// let moves = generate_simple_moves(&board, Square::new(5, 0));
/// assert_eq!(moves, vec![Square::new(4, 1)]);
/// ```
pub fn generate_simple_moves(board: &Board, from: Square) -> Vec<Square> {
    if !from.is_playable() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    match board.piece_at(from) {
        Piece::Empty => {}
        Piece::Man(side) => {
            for dc in [-1, 1] {
                if let Some(to) = from.offset((side.forward(), dc), 1) {
                    if board.is_empty_at(to) {
                        moves.push(to);
                    }
                }
            }
        }
        Piece::King(_) => {
            for &direction in &DIAGONALS {
                let mut step = 1;
                while let Some(to) = from.offset(direction, step) {
                    if !board.is_empty_at(to) {
                        break;
                    }
                    moves.push(to);
                    step += 1;
                }
            }
        }
    }
    moves
}
