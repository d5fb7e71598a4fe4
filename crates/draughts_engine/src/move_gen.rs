//! Move generation for men and kings
//!
//! Two generators live here, matching the two kinds of action in draughts:
//!
//! - [`simple`] - quiet diagonal moves (men one step forward, kings sliding)
//! - [`capture`] - recursive capture-chain search, including flying-king captures and
//!   promotion in the middle of a chain
//!
//! Neither generator looks at whose turn it is or at mandatory capture. Combining them into the
//! set of legal actions is the job of [`crate::mandatory`] and the session in [`crate::api`].

pub mod capture;
pub mod simple;

#[cfg(test)]
mod tests;

pub use capture::{generate_captures, has_capture, CaptureMove};
pub use simple::generate_simple_moves;
