#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A bitset over cell values `1..=N`, the unit of the constraint model.
//!
//! Bit `v` set means value `v` is present (already placed in some row,
//! column or block, or available as a candidate, depending on context).
//! Bit 0 is never used, which keeps the value-to-bit mapping direct and
//! makes the popcount arithmetic line up with the remaining-count
//! definition: a cell's MRV score is `N` minus the popcount of the union
//! of its three constraint masks.
//!
//! `u32` is wide enough for the largest supported board (25 values plus
//! the unused zero bit).

use core::ops::{BitOr, BitOrAssign};

/// A set of sudoku values in `1..=N`, packed into a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ValueMask(u32);

impl ValueMask {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every value `1..=n`.
    #[must_use]
    pub const fn full(n: usize) -> Self {
        debug_assert!(n <= 30);
        Self(((1u32 << (n + 1)) - 1) & !1)
    }

    #[must_use]
    pub const fn contains(self, value: usize) -> bool {
        self.0 & (1 << value) != 0
    }

    pub const fn insert(&mut self, value: usize) {
        self.0 |= 1 << value;
    }

    pub const fn remove(&mut self, value: usize) {
        self.0 &= !(1 << value);
    }

    /// Number of values in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The values of `1..=n` *not* in this set. For a union of constraint
    /// masks this is exactly the legal-candidate set.
    #[must_use]
    pub const fn complement(self, n: usize) -> Self {
        Self(!self.0 & Self::full(n).0)
    }

    /// Iterates the values in increasing order.
    #[must_use]
    pub const fn iter(self) -> ValueIter {
        ValueIter(self.0)
    }
}

impl BitOr for ValueMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ValueMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl IntoIterator for ValueMask {
    type Item = usize;
    type IntoIter = ValueIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the values of a [`ValueMask`], peeling one
/// lowest set bit per step.
#[derive(Debug, Clone, Copy)]
pub struct ValueIter(u32);

impl Iterator for ValueIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ValueIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_covers_exactly_one_to_n() {
        for n in [4, 9, 16, 25] {
            let full = ValueMask::full(n);
            assert_eq!(full.len(), n);
            assert!(!full.contains(0));
            for v in 1..=n {
                assert!(full.contains(v));
            }
            assert!(!full.contains(n + 1));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut mask = ValueMask::EMPTY;
        assert!(mask.is_empty());
        mask.insert(5);
        mask.insert(9);
        assert!(mask.contains(5));
        assert_eq!(mask.len(), 2);
        mask.remove(5);
        assert!(!mask.contains(5));
        assert_eq!(mask.len(), 1);
    }

    #[test]
    fn test_complement_is_candidate_set() {
        let mut used = ValueMask::EMPTY;
        used.insert(1);
        used.insert(4);
        used.insert(9);
        let free = used.complement(9);
        assert_eq!(free.iter().collect::<Vec<_>>(), vec![2, 3, 5, 6, 7, 8]);
        assert_eq!(free.len() + used.len(), 9);
    }

    #[test]
    fn test_iter_ascending() {
        let mut mask = ValueMask::EMPTY;
        for v in [16, 1, 25, 7] {
            mask.insert(v);
        }
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![1, 7, 16, 25]);
    }

    #[test]
    fn test_union() {
        let mut a = ValueMask::EMPTY;
        a.insert(1);
        let mut b = ValueMask::EMPTY;
        b.insert(2);
        assert_eq!((a | b).iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
