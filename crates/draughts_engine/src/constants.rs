//! # Draughts Engine Constants - Board Geometry & Rule Limits
//!
//! ## Overview
//!
//! This module centralizes the fixed values of Russian draughts: board geometry, the initial
//! setup, diagonal direction vectors used by both move generators, and the safety bound on
//! capture chains.
//!
//! ## Coordinate System
//!
//! Squares are addressed as `(row, col)` with row 0 at the top of the board (Black's back rank)
//! and row 7 at the bottom (White's back rank). Only dark squares, where `(row + col)` is odd,
//! are playable:
//!
//! ```text
//!      0 1 2 3 4 5 6 7
//!   0  . b . b . b . b     Black men start on rows 0-2
//!   1  b . b . b . b .
//!   2  . b . b . b . b
//!   3  . . . . . . . .
//!   4  . . . . . . . .
//!   5  w . w . w . w .     White men start on rows 5-7
//!   6  . w . w . w . w
//!   7  w . w . w . w .
//! ```
//!
//! White moves toward row 0 and promotes there; Black moves toward row 7.
//!
//! ## Direction Vectors
//!
//! All movement in draughts is diagonal. Directions are `(row_delta, col_delta)` pairs. Men use
//! the two forward vectors for quiet moves and all four for captures; kings use all four for
//! both, sliding any distance.

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Number of cells in the physical 8x8 grid, light squares included
pub const CELL_COUNT: usize = 64;

/// Number of rows each side fills at the start of a game
pub const SETUP_ROWS: u8 = 3;

/// Men per side in the initial position (3 rows x 4 dark squares)
pub const MEN_PER_SIDE: usize = 12;

/// The four diagonal directions as `(row_delta, col_delta)`
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Upper bound on jumps explored in one capture chain.
///
/// A side never has more than 12 pieces, so a legal chain cannot exceed this. The visited set in
/// the capture search already guarantees termination; this is only a backstop.
pub const MAX_CHAIN_DEPTH: usize = 12;

/// Length of generated session identifiers
pub const SESSION_ID_LEN: usize = 8;

/// Alphabet for generated session identifiers
pub const SESSION_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
