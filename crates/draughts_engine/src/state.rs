//! Complete game state as mutated by a session
//!
//! `GameState` is plain data. The rules that keep it consistent live in [`crate::api`]; the
//! persisted form lives in [`crate::persist`].

use crate::bitset::SquareSet;
use crate::board::Board;
use crate::types::{GameOutcome, MoveRecord, PieceCounts, Side, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    /// Piece picked by the side to move, or the chain piece mid-capture
    pub selected: Option<Square>,
    /// The chain piece has just captured and must capture again
    pub must_continue_capture: bool,
    /// Squares captured so far in the current chain, in capture order
    pub chain_captured: Vec<Square>,
    pub move_history: Vec<MoveRecord>,
    pub active: bool,
    /// Result once the game is decided; `InProgress` while active
    pub outcome: GameOutcome,
}

impl GameState {
    /// Fresh game: initial board, White to move
    pub fn new() -> Self {
        GameState::with_board(Board::initial(), Side::White)
    }

    /// Active game starting from an arbitrary position
    pub fn with_board(board: Board, side_to_move: Side) -> Self {
        GameState {
            board,
            side_to_move,
            selected: None,
            must_continue_capture: false,
            chain_captured: Vec::new(),
            move_history: Vec::new(),
            active: true,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Captured squares of the current chain as a set
    pub fn chain_set(&self) -> SquareSet {
        self.chain_captured.iter().collect()
    }

    pub fn piece_counts(&self) -> PieceCounts {
        self.board.counts()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
