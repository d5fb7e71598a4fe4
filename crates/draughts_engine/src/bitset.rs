//! # SquareSet - Square Sets as 64-bit Bitboards
//!
//! A `SquareSet` keeps a set of board squares in a single `u64`, one bit per cell of the
//! physical 8x8 grid (bit index = `row * 8 + col`).
//!
//! The capture search uses it for the set of pieces already taken in the current chain. Because
//! the bit pattern is canonical, two chains that captured the same pieces in a different order
//! produce equal, equally-hashed sets. That is what lets the search key its visited table on
//! `(square, captured set, rank)` without sorting anything.
//!
//! Common operations:
//! - **Insert**: `bits |= 1 << index`
//! - **Remove**: `bits &= !(1 << index)`
//! - **Contains**: `bits & (1 << index) != 0`
//! - **Count**: `bits.count_ones()`

use crate::types::Square;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub fn new() -> Self {
        SquareSet(0)
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1u64 << square.index());
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.is_on_board() && (self.0 & (1u64 << square.index())) != 0
    }

    /// Copy of this set with `square` added
    #[inline]
    #[must_use]
    pub fn with(mut self, square: Square) -> Self {
        self.insert(square);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Squares in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Square::from_index(index))
        })
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::new();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl<'a> FromIterator<&'a Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = &'a Square>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a: SquareSet = [Square::new(3, 2), Square::new(1, 4)].iter().collect();
        let b: SquareSet = [Square::new(1, 4), Square::new(3, 2)].iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_iter_is_ascending() {
        let set: SquareSet = [Square::new(7, 0), Square::new(0, 1), Square::new(4, 3)]
            .iter()
            .collect();
        let squares: Vec<_> = set.iter().collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 1), Square::new(4, 3), Square::new(7, 0)]
        );
    }

    #[test]
    fn test_remove_and_contains() {
        let mut set = SquareSet::new().with(Square::new(2, 5));
        assert!(set.contains(Square::new(2, 5)));
        set.remove(Square::new(2, 5));
        assert!(set.is_empty());
        assert!(!set.contains(Square::new(9, 9)), "off-board squares are never members");
    }
}
