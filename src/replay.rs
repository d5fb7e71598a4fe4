//! Tap replay
//!
//! Drives a [`GameSession`] the way a chat transport would: a list of `from-to` taps is applied
//! in order, and the first rejected tap stops the run. An automated side can then be played with
//! the engine's fallback move.

use std::fmt;
use std::str::FromStr;

use draughts_engine::{GameOutcome, GameSession, MoveError, MoveOutcome, Square};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors produced while parsing or applying taps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Tap text is not of the form `row,col-row,col`
    #[error("Malformed tap '{input}': {reason}")]
    MalformedTap { input: String, reason: String },

    /// The session refused the tap
    #[error("Tap #{index} ({tap}) rejected: {source}")]
    Rejected {
        index: usize,
        tap: Tap,
        #[source]
        source: MoveError,
    },
}

/// A source and destination square, as tapped by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Tap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}-{},{}",
            self.from.row, self.from.col, self.to.row, self.to.col
        )
    }
}

impl FromStr for Tap {
    type Err = ReplayError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| ReplayError::MalformedTap {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (from, to) = input
            .trim()
            .split_once('-')
            .ok_or_else(|| malformed("expected '-' between squares"))?;
        let parse_square = |text: &str| -> Result<Square, ReplayError> {
            let (row, col) = text
                .trim()
                .split_once(',')
                .ok_or_else(|| malformed("expected 'row,col'"))?;
            let row: u8 = row.trim().parse().map_err(|_| malformed("row is not a number"))?;
            let col: u8 = col.trim().parse().map_err(|_| malformed("col is not a number"))?;
            Ok(Square::from((row, col)))
        };

        Ok(Tap {
            from: parse_square(from)?,
            to: parse_square(to)?,
        })
    }
}

/// What a replay run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Outcomes of the taps that were applied, in order
    pub applied: Vec<MoveOutcome>,
    /// The tap that stopped the run, if any
    pub rejected: Option<ReplayError>,
    /// Game result after the run
    pub outcome: GameOutcome,
}

impl ReplayReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Apply `taps` to `session` in order, stopping at the first one the session refuses
pub fn replay(session: &mut GameSession, taps: &[Tap]) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (index, &tap) in taps.iter().enumerate() {
        match session.apply_move(tap.from, tap.to) {
            Ok(outcome) => {
                debug!("[REPLAY] #{} {}: {}", index, tap, outcome.message);
                report.applied.push(outcome);
            }
            Err(source) => {
                warn!("[REPLAY] #{} {} rejected: {}", index, tap, source);
                report.rejected = Some(ReplayError::Rejected { index, tap, source });
                break;
            }
        }
    }

    report.outcome = session.state().outcome;
    info!(
        "[REPLAY] Applied {}/{} taps, game {}",
        report.applied.len(),
        taps.len(),
        report.outcome
    );
    report
}

/// Play up to `max_steps` steps with the engine's fallback move for whichever side is to move
pub fn autoplay(session: &mut GameSession, max_steps: usize) -> Vec<MoveOutcome> {
    let mut outcomes = Vec::new();

    for _ in 0..max_steps {
        let Some(candidate) = session.fallback_move() else {
            break;
        };
        match session.apply_move(candidate.from, candidate.to) {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                warn!("[REPLAY] Fallback move {:?} refused: {}", candidate, err);
                break;
            }
        }
    }
    outcomes
}
