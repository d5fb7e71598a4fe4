//! Command-line front end for the draughts engine
//!
//! The binary stands in for a chat transport: it loads or creates a session, replays taps
//! against it and saves the result.

pub mod replay;

pub use replay::{autoplay, replay, ReplayError, ReplayReport, Tap};
