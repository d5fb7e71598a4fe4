//! Board representation and square queries
//!
//! The board is a flat `[Piece; 64]` grid. Only the 32 dark squares are ever occupied; the light
//! cells stay `Piece::Empty` for the lifetime of the board. Every public accessor checks the
//! parity invariant and reports [`MoveError::InvalidSquare`] for anything else.

use std::fmt;

use crate::constants::{BOARD_SIZE, CELL_COUNT, SETUP_ROWS};
use crate::error::{MoveError, MoveResult};
use crate::types::{Piece, PieceCounts, Side, Square};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; CELL_COUNT],
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Board {
            cells: [Piece::Empty; CELL_COUNT],
        }
    }

    /// Standard starting position: Black men on rows 0-2, White men on rows 5-7
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for square in Square::playable() {
            if square.row < SETUP_ROWS {
                board.cells[square.index()] = Piece::Man(Side::Black);
            } else if square.row >= BOARD_SIZE - SETUP_ROWS {
                board.cells[square.index()] = Piece::Man(Side::White);
            }
        }
        board
    }

    /// Build a board from explicit placements.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidSquare`] if any placement is on a light square or off the board.
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> MoveResult<Self> {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            board.set(square, piece)?;
        }
        Ok(board)
    }

    /// Checked lookup
    pub fn get(&self, square: Square) -> MoveResult<Piece> {
        check_playable(square)?;
        Ok(self.cells[square.index()])
    }

    /// Checked store
    pub fn set(&mut self, square: Square, piece: Piece) -> MoveResult<()> {
        check_playable(square)?;
        self.cells[square.index()] = piece;
        Ok(())
    }

    /// Lookup for squares produced by the move generators.
    ///
    /// Anything that is not a playable square reads as empty.
    #[inline]
    pub(crate) fn piece_at(&self, square: Square) -> Piece {
        debug_assert!(square.is_playable(), "lookup on unplayable square {square}");
        if square.is_playable() {
            self.cells[square.index()]
        } else {
            Piece::Empty
        }
    }

    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Piece) {
        debug_assert!(square.is_playable(), "store on unplayable square {square}");
        self.cells[square.index()] = piece;
    }

    /// Remove and return whatever stands on `square`
    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Piece {
        debug_assert!(square.is_playable(), "take from unplayable square {square}");
        std::mem::take(&mut self.cells[square.index()])
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        square.is_playable() && self.cells[square.index()].is_empty()
    }

    /// Occupied squares with their pieces, in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::playable()
            .map(|square| (square, self.cells[square.index()]))
            .filter(|(_, piece)| !piece.is_empty())
    }

    /// Squares and pieces belonging to `side`
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.belongs_to(side))
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    pub fn counts(&self) -> PieceCounts {
        PieceCounts {
            white: self.count(Side::White),
            black: self.count(Side::Black),
        }
    }

    /// True if a piece stands on a light square. Unreachable through the public API.
    pub fn has_parity_violation(&self) -> bool {
        (0..CELL_COUNT)
            .map(Square::from_index)
            .any(|square| !square.is_playable() && !self.cells[square.index()].is_empty())
    }

    /// The grid as 8 rows of 8 cells, light squares included
    pub fn to_rows(&self) -> [[Piece; 8]; 8] {
        let mut rows = [[Piece::Empty; 8]; 8];
        for (index, piece) in self.cells.iter().enumerate() {
            let square = Square::from_index(index);
            rows[square.row as usize][square.col as usize] = *piece;
        }
        rows
    }

    /// Inverse of [`Board::to_rows`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidSquare`] if a piece sits on a light square.
    pub fn from_rows(rows: &[[Piece; 8]; 8]) -> MoveResult<Self> {
        let mut board = Board::empty();
        for (row, cells) in rows.iter().enumerate() {
            for (col, piece) in cells.iter().enumerate() {
                if piece.is_empty() {
                    continue;
                }
                board.set(Square::new(row as u8, col as u8), *piece)?;
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

fn check_playable(square: Square) -> MoveResult<()> {
    if square.is_playable() {
        Ok(())
    } else {
        Err(MoveError::InvalidSquare { square })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                let square = Square::new(row, col);
                let glyph = if square.is_playable() {
                    self.cells[square.index()].glyph()
                } else {
                    ' '
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}
