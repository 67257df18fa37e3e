#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Row, column and block usage masks derived from a board.
//!
//! For every filled cell `(r, c)` holding `v`, bit `v` is set in `rows[r]`,
//! `cols[c]` and `blocks[block_index(r, c)]`. A value is a legal candidate
//! for an empty cell exactly when its bit is clear in the union of the
//! cell's three masks. The state is initialized once per puzzle and is
//! mutated and exactly restored by the search engine; a failed branch
//! leaves no net change.

use crate::solver::board::{Board, Cell, Size};
use crate::solver::error::SudokuError;
use crate::solver::mask::ValueMask;

/// The three per-house bitmask arrays for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    size: Size,
    rows: Vec<ValueMask>,
    cols: Vec<ValueMask>,
    blocks: Vec<ValueMask>,
}

impl ConstraintState {
    /// Derives the masks from the given clues, rejecting boards where two
    /// clues already collide. Searching from a colliding state would not
    /// fail cleanly; it would corrupt the masks and either loop or report a
    /// bogus solution, so this is checked up front.
    ///
    /// # Errors
    ///
    /// `ConflictingClue` naming the second clue of the first collision in
    /// row-major order.
    pub fn derive(board: &Board) -> Result<Self, SudokuError> {
        let size = board.size();
        let n = size.n();
        let mut state = Self {
            size,
            rows: vec![ValueMask::EMPTY; n],
            cols: vec![ValueMask::EMPTY; n],
            blocks: vec![ValueMask::EMPTY; n],
        };

        for cell in board.cells() {
            let value = board.value(cell);
            if value == 0 {
                continue;
            }
            if state.used(cell).contains(value) {
                return Err(SudokuError::ConflictingClue { cell, value });
            }
            state.place(cell, value);
        }

        Ok(state)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Union of the row, column and block masks covering `cell`.
    #[must_use]
    pub fn used(&self, cell: Cell) -> ValueMask {
        self.rows[cell.row] | self.cols[cell.col] | self.blocks[self.size.block_index(cell)]
    }

    /// Legal candidates for `cell`, assuming it is empty.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> ValueMask {
        self.used(cell).complement(self.size.n())
    }

    /// The MRV score of `cell`: how many values remain legal for it.
    #[must_use]
    pub fn remaining(&self, cell: Cell) -> usize {
        self.size.n() - self.used(cell).len()
    }

    /// Marks `value` as placed at `cell` in all three houses.
    pub fn place(&mut self, cell: Cell, value: usize) {
        debug_assert!(!self.used(cell).contains(value));
        self.rows[cell.row].insert(value);
        self.cols[cell.col].insert(value);
        self.blocks[self.size.block_index(cell)].insert(value);
    }

    /// Reverts a [`place`](Self::place), restoring the prior masks exactly.
    pub fn unplace(&mut self, cell: Cell, value: usize) {
        self.rows[cell.row].remove(value);
        self.cols[cell.col].remove(value);
        self.blocks[self.size.block_index(cell)].remove(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::parse;

    fn nine_by_nine(puzzle: &str) -> Board {
        parse::parse(puzzle).unwrap()
    }

    #[test]
    fn test_derive_sets_bits_for_clues() {
        let mut rows = vec![vec![0; 4]; 4];
        rows[0][0] = 1;
        rows[2][3] = 4;
        let board = Board::from_rows(rows).unwrap();
        let state = ConstraintState::derive(&board).unwrap();

        assert!(state.used(Cell::new(0, 3)).contains(1)); // same row
        assert!(state.used(Cell::new(3, 0)).contains(1)); // same column
        assert!(state.used(Cell::new(1, 1)).contains(1)); // same block
        assert!(!state.used(Cell::new(2, 2)).contains(1));
        assert!(state.used(Cell::new(3, 2)).contains(4)); // block of (2,3)
    }

    #[test]
    fn test_derive_rejects_row_conflict() {
        let mut rows = vec![vec![0; 9]; 9];
        rows[0][0] = 5;
        rows[0][7] = 5;
        let board = Board::from_rows(rows).unwrap();
        assert_eq!(
            ConstraintState::derive(&board),
            Err(SudokuError::ConflictingClue {
                cell: Cell::new(0, 7),
                value: 5
            })
        );
    }

    #[test]
    fn test_derive_rejects_block_conflict() {
        let mut rows = vec![vec![0; 9]; 9];
        rows[0][0] = 3;
        rows[2][2] = 3; // same 3x3 block, different row and column
        let board = Board::from_rows(rows).unwrap();
        assert_eq!(
            ConstraintState::derive(&board),
            Err(SudokuError::ConflictingClue {
                cell: Cell::new(2, 2),
                value: 3
            })
        );
    }

    #[test]
    fn test_remaining_counts() {
        let board = nine_by_nine(
            "12345678.\
             .........\
             .........\
             .........\
             .........\
             .........\
             .........\
             .........\
             .........",
        );
        let state = ConstraintState::derive(&board).unwrap();

        // Only 9 fits the hole in row 0.
        assert_eq!(state.remaining(Cell::new(0, 8)), 1);
        assert_eq!(state.candidates(Cell::new(0, 8)).iter().collect::<Vec<_>>(), vec![9]);
        // A cell below column 0 sees only the 1.
        assert_eq!(state.remaining(Cell::new(8, 0)), 8);
        // A far cell sharing the block of columns 6..9 sees 7 and 8.
        assert_eq!(state.remaining(Cell::new(2, 6)), 7);
    }

    #[test]
    fn test_place_unplace_round_trip() {
        let board = Board::empty(Size::Nine);
        let mut state = ConstraintState::derive(&board).unwrap();
        let pristine = state.clone();
        let cell = Cell::new(4, 4);

        state.place(cell, 7);
        assert!(state.used(cell).contains(7));
        assert_eq!(state.remaining(Cell::new(4, 0)), 8);

        state.unplace(cell, 7);
        assert_eq!(state, pristine);
    }
}
