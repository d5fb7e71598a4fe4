//! JSON save and restore
//!
//! A session is persisted as a [`PersistedGame`] encoded with `serde_json`. The board travels as
//! eight rows of eight cells so the blob stays readable; piece counts are stored alongside it and
//! checked on the way back in.
//!
//! [`GameSession::try_deserialize`] rejects anything that does not describe a reachable state.
//! [`GameSession::deserialize`] never fails: a blob it cannot accept is logged and replaced with
//! a fresh game.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::GameSession;
use crate::bitset::SquareSet;
use crate::board::Board;
use crate::constants::MEN_PER_SIDE;
use crate::error::{PersistError, PersistResult};
use crate::move_gen::has_capture;
use crate::state::GameState;
use crate::types::{GameOutcome, MoveRecord, Piece, Side, Square};

/// Serialized shape of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedGame {
    pub board: [[Piece; 8]; 8],
    pub selected: Option<Square>,
    pub side_to_move: Side,
    pub active: bool,
    #[serde(default)]
    pub outcome: GameOutcome,
    pub white_count: usize,
    pub black_count: usize,
    #[serde(default)]
    pub move_history: Vec<MoveRecord>,
    #[serde(default)]
    pub must_capture: bool,
    #[serde(default)]
    pub capture_chain: Vec<Square>,
}

impl From<&GameState> for PersistedGame {
    fn from(state: &GameState) -> Self {
        let counts = state.piece_counts();
        PersistedGame {
            board: state.board.to_rows(),
            selected: state.selected,
            side_to_move: state.side_to_move,
            active: state.active,
            outcome: state.outcome,
            white_count: counts.white,
            black_count: counts.black,
            move_history: state.move_history.clone(),
            must_capture: state.must_continue_capture,
            capture_chain: state.chain_captured.clone(),
        }
    }
}

impl TryFrom<PersistedGame> for GameState {
    type Error = PersistError;

    fn try_from(saved: PersistedGame) -> PersistResult<Self> {
        let board = Board::from_rows(&saved.board)
            .map_err(|err| invalid(format!("piece on a light square: {err}")))?;

        for (square, piece) in board.occupied() {
            if let Piece::Man(side) = piece {
                if square.row == side.promotion_row() {
                    return Err(invalid(format!("{side} man left unpromoted on {square}")));
                }
            }
        }

        let counts = board.counts();
        if counts.white > MEN_PER_SIDE || counts.black > MEN_PER_SIDE {
            return Err(invalid(format!(
                "too many pieces (white={}, black={})",
                counts.white, counts.black
            )));
        }
        if counts.white != saved.white_count || counts.black != saved.black_count {
            return Err(invalid(format!(
                "stored counts {}/{} disagree with the board {}/{}",
                saved.white_count, saved.black_count, counts.white, counts.black
            )));
        }

        if let Some(square) = saved.selected {
            if !board.get(square).is_ok_and(|piece| piece.belongs_to(saved.side_to_move)) {
                return Err(invalid(format!(
                    "selected square {square} holds no {} piece",
                    saved.side_to_move
                )));
            }
        }
        if saved.must_capture && saved.selected.is_none() {
            return Err(invalid("capture chain in progress without a chain piece".to_string()));
        }
        if !saved.must_capture && !saved.capture_chain.is_empty() {
            return Err(invalid("captured squares recorded outside a chain".to_string()));
        }
        for &square in &saved.capture_chain {
            if !board.get(square).is_ok_and(Piece::is_empty) {
                return Err(invalid(format!(
                    "chain square {square} is not an emptied dark square"
                )));
            }
        }
        if let (true, Some(square)) = (saved.must_capture, saved.selected) {
            let chain: SquareSet = saved.capture_chain.iter().collect();
            let piece = board.piece_at(square);
            if !has_capture(&board, square, piece, &chain) {
                return Err(invalid(format!("chain piece on {square} has no capture left")));
            }
        }

        if saved.active == saved.outcome.is_over() {
            return Err(invalid(format!(
                "active flag {} contradicts outcome '{}'",
                saved.active, saved.outcome
            )));
        }

        let state = GameState {
            board,
            side_to_move: saved.side_to_move,
            selected: saved.selected,
            must_continue_capture: saved.must_capture,
            chain_captured: saved.capture_chain,
            move_history: saved.move_history,
            active: saved.active,
            outcome: saved.outcome,
        };

        if state.active {
            let decided = GameSession::from_state(state.clone()).check_game_over();
            if decided.is_over() {
                return Err(invalid(format!("active game is already decided: {decided}")));
            }
        }
        Ok(state)
    }
}

impl GameSession {
    /// Encode the session as a JSON blob
    pub fn serialize(&self) -> PersistResult<String> {
        let blob = serde_json::to_string(&PersistedGame::from(&self.state))?;
        debug!("[SESSION] Serialized {} bytes", blob.len());
        Ok(blob)
    }

    /// Restore a session, rejecting malformed or inconsistent blobs.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::DeserializationFailure`] if the JSON does not parse or describes a
    /// state the rules cannot reach.
    pub fn try_deserialize(blob: &str) -> PersistResult<GameSession> {
        let saved: PersistedGame =
            serde_json::from_str(blob).map_err(|err| invalid(err.to_string()))?;
        GameState::try_from(saved).map(GameSession::from_state)
    }

    /// Restore a session, falling back to a fresh game when the blob is unusable
    pub fn deserialize(blob: &str) -> GameSession {
        match GameSession::try_deserialize(blob) {
            Ok(session) => session,
            Err(err) => {
                warn!("[SESSION] {}; starting a new game", err);
                GameSession::new()
            }
        }
    }
}

fn invalid(reason: String) -> PersistError {
    PersistError::DeserializationFailure { reason }
}
