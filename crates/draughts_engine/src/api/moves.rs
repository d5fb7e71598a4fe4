//! Selection and move execution
//!
//! A move is applied one jump at a time. After a capturing jump the session searches again from
//! the landing square with the chain's captured squares; if another capture exists the same side
//! keeps the turn and must continue with the same piece.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::GameSession;
use crate::error::{MoveError, MoveResult};
use crate::types::{GameOutcome, MoveRecord, Piece, Square};

/// Result of a successfully applied step or jump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Human-readable summary for the transport layer
    pub message: String,
    /// The moving man became a king on this step
    pub promoted: bool,
    /// The same piece must capture again before the turn passes
    pub chain_continues: bool,
    /// Enemy square removed by this step
    pub captured: Option<Square>,
    /// Game result after the step
    pub outcome: GameOutcome,
}

impl GameSession {
    /// Pick the piece on `square` for the side to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameFinished`] if the game is over
    /// - [`MoveError::InvalidSquare`] for a light or off-board square
    /// - [`MoveError::NoPieceAtSquare`] for an empty square
    /// - [`MoveError::NotYourPiece`] for an opponent's piece
    /// - [`MoveError::MustCapture`] if a capture is mandatory and this piece cannot capture, or if
    ///   a chain is in progress with another piece
    pub fn select_square(&mut self, square: Square) -> MoveResult<()> {
        self.ensure_active()?;

        let piece = self.state.board.get(square)?;
        if piece.is_empty() {
            return Err(MoveError::NoPieceAtSquare { square });
        }
        if !piece.belongs_to(self.state.side_to_move) {
            return Err(MoveError::NotYourPiece { square });
        }

        if self.state.must_continue_capture {
            return match self.state.selected {
                Some(chain_square) if chain_square == square => Ok(()),
                Some(chain_square) => Err(MoveError::MustCapture {
                    forced: vec![chain_square],
                }),
                None => Err(MoveError::MustCapture { forced: Vec::new() }),
            };
        }

        let forced = self.forced_origins();
        if !forced.is_empty() && !forced.contains(&square) {
            debug!("[SESSION] {} rejected, capture is mandatory", square);
            return Err(MoveError::MustCapture {
                forced: forced.into_iter().collect(),
            });
        }

        self.state.selected = Some(square);
        debug!("[SESSION] {} selected {}", self.state.side_to_move, square);
        Ok(())
    }

    /// Drop the current selection. Not allowed in the middle of a capture chain.
    pub fn deselect(&mut self) -> MoveResult<()> {
        if self.state.must_continue_capture {
            return Err(MoveError::MustCapture {
                forced: self.state.selected.into_iter().collect(),
            });
        }
        self.state.selected = None;
        Ok(())
    }

    /// Move the piece on `from` to `to`.
    ///
    /// `from` must be the selected square; if nothing or another piece is selected outside a
    /// chain, `from` is selected first with the checks of [`GameSession::select_square`].
    ///
    /// # Errors
    ///
    /// Any error of [`GameSession::select_square`], or [`MoveError::IllegalDestination`] if `to`
    /// is not a legal destination of `from`. A failed call leaves the state unchanged, except
    /// that a successful implicit selection of `from` is kept.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveResult<MoveOutcome> {
        self.ensure_active()?;
        if !to.is_playable() {
            return Err(MoveError::InvalidSquare { square: to });
        }
        if self.state.selected != Some(from) {
            self.select_square(from)?;
        }

        let destination = self
            .legal_destinations(from)
            .into_iter()
            .find(|destination| destination.to == to)
            .ok_or(MoveError::IllegalDestination { from, to })?;

        let side = self.state.side_to_move;
        let piece = self.state.board.take(from);
        if let Some(captured) = destination.captured {
            self.state.board.take(captured);
            self.state.chain_captured.push(captured);
        }

        let promoted = matches!(piece, Piece::Man(_)) && to.row == side.promotion_row();
        let landed = if promoted { piece.promoted() } else { piece };
        self.state.board.put(to, landed);

        self.state.move_history.push(MoveRecord {
            side,
            from,
            to,
            piece,
            captured: destination.captured,
            promoted,
        });
        debug!(
            "[SESSION] {} {} -> {}{}",
            side,
            from,
            to,
            if destination.is_capture { " (capture)" } else { "" }
        );

        if destination.is_capture && !self.jumps_from(to).is_empty() {
            self.state.must_continue_capture = true;
            self.state.selected = Some(to);
            return Ok(MoveOutcome {
                message: with_promotion("Captured! Keep capturing.", promoted),
                promoted,
                chain_continues: true,
                captured: destination.captured,
                outcome: GameOutcome::InProgress,
            });
        }

        let chain_length = self.state.chain_captured.len();
        self.state.selected = None;
        self.state.must_continue_capture = false;
        self.state.chain_captured.clear();
        self.state.side_to_move = side.opponent();

        let outcome = self.check_game_over();
        info!(
            "[SESSION] {} finished turn, {} to move ({})",
            side, self.state.side_to_move, outcome
        );

        let message = if chain_length > 0 {
            format!("Captured {chain_length} piece(s).")
        } else {
            "Move made.".to_string()
        };
        Ok(MoveOutcome {
            message: with_promotion(&message, promoted),
            promoted,
            chain_continues: false,
            captured: destination.captured,
            outcome,
        })
    }

    fn ensure_active(&self) -> MoveResult<()> {
        if self.state.active {
            Ok(())
        } else {
            Err(MoveError::GameFinished)
        }
    }
}

fn with_promotion(message: &str, promoted: bool) -> String {
    if promoted {
        format!("{message} The man is crowned king!")
    } else {
        message.to_string()
    }
}
