//! Game state queries
//!
//! Legal destinations, forced origins and game-over detection. These never mutate the board;
//! `check_game_over` only records a decided result.

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::GameSession;
use crate::mandatory;
use crate::move_gen::{generate_captures, generate_simple_moves, CaptureMove};
use crate::types::{Destination, GameOutcome, LegalMove, Square};

/// Where the session stands within the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// Waiting for the side to move to pick a piece
    AwaitingSelection,
    /// A piece is picked, waiting for a destination
    PieceSelected,
    /// The chain piece has captured and must capture again
    CaptureContinuation,
    /// Game over
    Terminal,
}

impl GameSession {
    pub fn phase(&self) -> TurnPhase {
        let state = &self.state;
        if !state.active {
            TurnPhase::Terminal
        } else if state.must_continue_capture {
            TurnPhase::CaptureContinuation
        } else if state.selected.is_some() {
            TurnPhase::PieceSelected
        } else {
            TurnPhase::AwaitingSelection
        }
    }

    /// True if the side to move has a capture anywhere
    pub fn has_any_capture(&self) -> bool {
        mandatory::has_any_capture(&self.state)
    }

    /// Pieces the side to move may pick while a capture is mandatory.
    ///
    /// Empty when no capture exists.
    pub fn forced_origins(&self) -> BTreeSet<Square> {
        mandatory::forced_origins(&self.state)
    }

    /// Destinations available to the piece on `square` this ply.
    ///
    /// Captures only if any capture exists for the side to move, quiet moves otherwise. Empty for
    /// empty squares, the opponent's pieces, pieces that are not forced while a capture is
    /// mandatory, and any square but the chain piece mid-chain.
    pub fn legal_destinations(&self, square: Square) -> Vec<Destination> {
        let state = &self.state;
        if !state.active || !square.is_playable() {
            return Vec::new();
        }
        let piece = state.board.piece_at(square);
        if !piece.belongs_to(state.side_to_move) {
            return Vec::new();
        }

        if state.must_continue_capture {
            if state.selected != Some(square) {
                return Vec::new();
            }
            return capture_destinations(self.jumps_from(square));
        }

        if mandatory::has_any_capture(state) {
            return capture_destinations(self.jumps_from(square));
        }

        generate_simple_moves(&state.board, square)
            .into_iter()
            .map(|to| Destination {
                to,
                is_capture: false,
                captured: None,
            })
            .collect()
    }

    /// Every `(from, to)` pair the side to move can play right now
    pub fn all_legal_moves(&self) -> Vec<LegalMove> {
        let origins: Vec<Square> = self
            .state
            .board
            .pieces_of(self.state.side_to_move)
            .map(|(square, _)| square)
            .collect();

        origins
            .into_iter()
            .flat_map(|from| {
                self.legal_destinations(from)
                    .into_iter()
                    .map(move |destination| LegalMove {
                        from,
                        to: destination.to,
                        is_capture: destination.is_capture,
                    })
            })
            .collect()
    }

    /// Move an automated player falls back to: the first forced capture, else the first quiet
    /// move, in board order. `None` when the side to move is stuck or the game is over.
    pub fn fallback_move(&self) -> Option<LegalMove> {
        let moves = self.all_legal_moves();
        moves
            .iter()
            .find(|candidate| candidate.is_capture)
            .or_else(|| moves.first())
            .copied()
    }

    /// Full capture-chain search for the piece on `square`, for scoring whole sequences.
    ///
    /// Mid-chain the search is seeded with the squares already captured.
    pub fn capture_sequences(&self, square: Square) -> Vec<CaptureMove> {
        let state = &self.state;
        let Ok(piece) = state.board.get(square) else {
            return Vec::new();
        };
        let seed = if state.must_continue_capture {
            state.chain_set()
        } else {
            Default::default()
        };
        generate_captures(&state.board, square, piece, &seed)
    }

    /// Decide whether the game is over.
    ///
    /// A side without pieces loses; otherwise the side to move loses if it has no legal move.
    /// A decided result is recorded and the session becomes inactive.
    pub fn check_game_over(&mut self) -> GameOutcome {
        if self.state.outcome.is_over() {
            return self.state.outcome;
        }

        let counts = self.state.piece_counts();
        let side = self.state.side_to_move;
        let outcome = if counts.white == 0 {
            GameOutcome::BlackWins
        } else if counts.black == 0 {
            GameOutcome::WhiteWins
        } else if !self.side_can_move() {
            debug!("[SESSION] {} has no legal moves", side);
            GameOutcome::won_by(side.opponent())
        } else {
            GameOutcome::InProgress
        };

        if outcome.is_over() {
            info!(
                "[SESSION] Game over: {} (white={}, black={})",
                outcome, counts.white, counts.black
            );
            self.finish(outcome);
        }
        outcome
    }

    fn side_can_move(&self) -> bool {
        let state = &self.state;
        if state.must_continue_capture {
            return mandatory::has_any_capture(state);
        }
        mandatory::has_any_capture(state)
            || state
                .board
                .pieces_of(state.side_to_move)
                .any(|(square, _)| !generate_simple_moves(&state.board, square).is_empty())
    }

    /// Single jumps for the piece on `square`, seeded with the current chain
    pub(crate) fn jumps_from(&self, square: Square) -> Vec<CaptureMove> {
        let mut captures = self.capture_sequences(square);
        captures.retain(CaptureMove::is_single_jump);
        captures
    }
}

fn capture_destinations(captures: Vec<CaptureMove>) -> Vec<Destination> {
    captures
        .into_iter()
        .map(|capture| Destination {
            to: capture.landing,
            is_capture: true,
            captured: Some(capture.captured),
        })
        .collect()
}
