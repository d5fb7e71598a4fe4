//! Public API for the draughts engine
//!
//! [`GameSession`] is the state machine a transport layer drives: it owns one [`GameState`],
//! accepts square taps, and reports legal destinations, move results and the game outcome.
//!
//! ## Module Organization
//!
//! - `game` - session lifecycle (new, reset, resign, accessors)
//! - `moves` - selection and move execution (select_square, apply_move)
//! - `state` - queries (legal_destinations, forced_origins, check_game_over)
//!
//! ## Turn Flow
//!
//! ```text
//! AwaitingSelection --select_square--> PieceSelected --apply_move--> TurnComplete
//!                                            |                         |
//!                                            | capture with more       | side flips,
//!                                            v captures available      v game over checked
//!                                      CaptureContinuation       AwaitingSelection / Terminal
//! ```
//!
//! [`GameState`]: crate::state::GameState

mod game;
mod moves;
mod state;

pub use game::GameSession;
pub use moves::MoveOutcome;
pub use state::TurnPhase;
