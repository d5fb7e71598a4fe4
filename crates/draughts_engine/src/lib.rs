//! # Draughts Engine
//!
//! Rules engine for Russian draughts (shashki) on an 8x8 board.
//!
//! The engine owns the board, enforces move legality (mandatory capture, multi-jump chains,
//! flying kings, promotion), tracks whose turn it is and detects the end of the game. It has no
//! I/O of its own: a transport layer drives a [`GameSession`] with square taps and persists it
//! through [`persist`].
//!
//! ## Module Organization
//!
//! - `constants` - board geometry and limits
//! - `types` - sides, pieces, squares and move records
//! - `bitset` - 64-bit square sets used as capture-chain keys
//! - `board` - the 8x8 grid
//! - `move_gen` - quiet moves and the capture-chain search
//! - `mandatory` - forced-capture resolution
//! - `state` - the mutable game state
//! - `api` - the session state machine
//! - `persist` - JSON save and restore
//! - `store` - sessions keyed by short identifiers
//!
//! ## Example
//!
//! ```rust
//! use draughts_engine::{GameSession, Square};
//!
//! let mut game = GameSession::new();
//! game.select_square(Square::new(5, 2)).unwrap();
//! let outcome = game.apply_move(Square::new(5, 2), Square::new(4, 3)).unwrap();
//! assert_eq!(outcome.message, "Move made.");
//! ```

pub mod api;
pub mod bitset;
pub mod board;
pub mod constants;
pub mod error;
pub mod mandatory;
pub mod move_gen;
pub mod persist;
pub mod state;
pub mod store;
pub mod types;

pub use api::{GameSession, MoveOutcome, TurnPhase};
pub use board::Board;
pub use error::{MoveError, MoveResult, PersistError, PersistResult};
pub use persist::PersistedGame;
pub use state::GameState;
pub use store::SessionStore;
pub use types::{
    Destination, GameOutcome, LegalMove, MoveRecord, Piece, PieceCounts, Rank, Side, Square,
};
