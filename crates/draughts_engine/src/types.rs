//! # Draughts Engine Core Types
//!
//! ## Overview
//!
//! Value types shared by every layer of the engine. They are all small `Copy` types except
//! [`MoveRecord`], and all of them derive `Serialize`/`Deserialize` so a saved game can be
//! restored exactly.
//!
//! ## Piece Representation
//!
//! A piece is a closed variant over `Empty`, `Man(Side)` and `King(Side)`. Every cell of the
//! board holds exactly one of these, so states like "a king with no side" or "a piece of a third
//! colour" cannot be expressed:
//!
//! ```rust
//! use draughts_engine::types::{Piece, Rank, Side};
//!
//! let man = Piece::Man(Side::White);
//! assert_eq!(man.side(), Some(Side::White));
//! assert_eq!(man.promoted(), Piece::King(Side::White));
//! assert_eq!(Piece::Empty.rank(), None);
//! assert_eq!(Piece::King(Side::Black).rank(), Some(Rank::King));
//! ```
//!
//! Promotion only ever turns a man into a king of the same side; a king stays a king.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// One of the two players
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Moves first, toward row 0
    #[default]
    White,
    /// Moves toward row 7
    Black,
}

impl Side {
    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward step for this side's men
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which this side's men are promoted
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Movement class of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Man,
    King,
}

/// Content of a single board cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Piece {
    #[default]
    Empty,
    Man(Side),
    King(Side),
}

impl Piece {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Side owning this piece, `None` for an empty cell
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Piece::Empty => None,
            Piece::Man(side) | Piece::King(side) => Some(side),
        }
    }

    #[inline]
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Piece::Empty => None,
            Piece::Man(_) => Some(Rank::Man),
            Piece::King(_) => Some(Rank::King),
        }
    }

    #[inline]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::King(_))
    }

    /// The same piece after promotion. Kings and empty cells are unchanged.
    #[inline]
    #[must_use]
    pub const fn promoted(self) -> Piece {
        match self {
            Piece::Man(side) => Piece::King(side),
            other => other,
        }
    }

    /// Single-character glyph used by the text board dump
    pub const fn glyph(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Man(Side::White) => 'w',
            Piece::King(Side::White) => 'W',
            Piece::Man(Side::Black) => 'b',
            Piece::King(Side::Black) => 'B',
        }
    }
}

/// A board coordinate `(row, col)`.
///
/// Construction does not validate; use [`Square::is_playable`] or the checked board accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// On the board and on a dark square
    #[inline]
    pub const fn is_playable(self) -> bool {
        self.is_on_board() && (self.row + self.col) % 2 == 1
    }

    /// Linear index 0-63 into the physical grid
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Square {
            row: (index / BOARD_SIZE as usize) as u8,
            col: (index % BOARD_SIZE as usize) as u8,
        }
    }

    /// The square `steps` diagonal steps away in direction `(dr, dc)`, if still on the board
    pub fn offset(self, (dr, dc): (i8, i8), steps: i8) -> Option<Square> {
        let row = self.row as i16 + dr as i16 * steps as i16;
        let col = self.col as i16 + dc as i16 * steps as i16;
        let size = BOARD_SIZE as i16;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterator over every playable square in row-major order
    pub fn playable() -> impl Iterator<Item = Square> {
        (0..CELL_COUNT)
            .map(Square::from_index)
            .filter(|square| square.is_playable())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

/// One jump of a capture chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureStep {
    /// Square the capturing piece lands on
    pub landing: Square,
    /// Square of the enemy piece jumped over
    pub captured: Square,
}

/// A single applied step or jump, as kept in the move history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub from: Square,
    pub to: Square,
    /// Piece as it stood on `from`, before any promotion
    pub piece: Piece,
    pub captured: Option<Square>,
    pub promoted: bool,
}

/// A destination offered to the caller for a selected square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    pub to: Square,
    pub is_capture: bool,
    /// Enemy square removed when this destination is taken
    pub captured: Option<Square>,
}

/// A complete `(from, to)` pair available to the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
}

/// Engine-detected result of a game
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
}

impl GameOutcome {
    /// Outcome in which `side` has won
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::White => GameOutcome::WhiteWins,
            Side::Black => GameOutcome::BlackWins,
        }
    }

    pub const fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::WhiteWins => Some(Side::White),
            GameOutcome::BlackWins => Some(Side::Black),
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::WhiteWins => write!(f, "White wins"),
            GameOutcome::BlackWins => write!(f, "Black wins"),
        }
    }
}

/// Piece totals per side
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCounts {
    pub white: usize,
    pub black: usize,
}

impl PieceCounts {
    pub const fn of(self, side: Side) -> usize {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
}
