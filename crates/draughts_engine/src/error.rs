//! Error types for the draughts engine
//!
//! Every error here is recoverable: a rejected selection or move leaves the session untouched,
//! and a corrupted saved game can always be replaced by a fresh one.

use thiserror::Error;

use crate::types::Square;

/// Errors returned by selection and move operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Square is off the board or a light square
    #[error("Invalid square {square}: not a playable dark square")]
    InvalidSquare { square: Square },

    /// No piece at the source square
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece belongs to the side not on move
    #[error("Piece at square {square} does not belong to the side to move")]
    NotYourPiece { square: Square },

    /// A capture is available and the chosen piece cannot make one
    #[error("A capture is mandatory: move one of {forced:?}")]
    MustCapture { forced: Vec<Square> },

    /// Destination is not among the legal moves of the selected piece
    #[error("Illegal destination {to} for piece at {from}")]
    IllegalDestination { from: Square, to: Square },

    /// Session is no longer active
    #[error("Game is already finished")]
    GameFinished,
}

/// Errors raised while saving or restoring a session
#[derive(Error, Debug)]
pub enum PersistError {
    /// Saved state could not be encoded
    #[error("Failed to serialize game state: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Saved state is malformed or violates a board invariant
    #[error("Failed to restore game state: {reason}")]
    DeserializationFailure { reason: String },
}

/// Result type alias for move operations
pub type MoveResult<T> = Result<T, MoveError>;

/// Result type alias for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;
