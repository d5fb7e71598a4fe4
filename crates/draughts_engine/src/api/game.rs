//! Game lifecycle management
//!
//! Creating, restarting and ending sessions.

use tracing::info;

use crate::board::Board;
use crate::state::GameState;
use crate::types::{GameOutcome, PieceCounts, Side};

/// One game of draughts and the rules that drive it.
///
/// A session is exclusively owned and performs no locking; callers that share one across
/// threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSession {
    pub(crate) state: GameState,
}

impl GameSession {
    /// Create a new game with the initial position, White to move
    pub fn new() -> Self {
        GameSession {
            state: GameState::new(),
        }
    }

    /// Create a game from an arbitrary position
    pub fn with_board(board: Board, side_to_move: Side) -> Self {
        GameSession {
            state: GameState::with_board(board, side_to_move),
        }
    }

    /// Wrap an existing state without validating it
    pub fn from_state(state: GameState) -> Self {
        GameSession { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn piece_counts(&self) -> PieceCounts {
        self.state.piece_counts()
    }

    /// Restart with a fresh board
    pub fn reset(&mut self) {
        self.state = GameState::new();
        info!("[SESSION] Game reset");
    }

    /// End the game with `side` conceding.
    ///
    /// Resigning an already finished game keeps the recorded result.
    pub fn resign(&mut self, side: Side) -> GameOutcome {
        if !self.state.active {
            return self.state.outcome;
        }
        info!("[SESSION] {} resigned", side);
        self.finish(GameOutcome::won_by(side.opponent()));
        self.state.outcome
    }

    /// Mark the game as decided and drop any selection or chain state
    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        self.state.active = false;
        self.state.outcome = outcome;
        self.state.selected = None;
        self.state.must_continue_capture = false;
        self.state.chain_captured.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_active_with_white_to_move() {
        let session = GameSession::new();
        assert!(session.is_active());
        assert_eq!(session.side_to_move(), Side::White);
        assert_eq!(session.state().outcome, GameOutcome::InProgress);
        assert!(session.state().move_history.is_empty());
    }

    #[test]
    fn test_resign_awards_opponent() {
        let mut session = GameSession::new();
        assert_eq!(session.resign(Side::White), GameOutcome::BlackWins);
        assert!(!session.is_active());
        assert_eq!(session.state().outcome.winner(), Some(Side::Black));
        // A second resignation does not overturn the result
        assert_eq!(session.resign(Side::Black), GameOutcome::BlackWins);
    }

    #[test]
    fn test_reset_restores_initial_position() {
        let mut session = GameSession::new();
        session.resign(Side::Black);
        session.reset();
        assert_eq!(session, GameSession::new());
        assert_eq!(session.into_state(), GameState::new());
    }
}
