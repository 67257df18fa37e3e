#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Error types shared by the puzzle codec and the search engine.
//!
//! Parsing and pre-validation errors are detected once, before any search
//! starts; the engine itself only ever surfaces `Unsolvable` (every branch
//! exhausted at the root) or `Cancelled` (an external token fired). A dead
//! end inside a branch is ordinary control flow and never reaches the caller.

use crate::solver::board::Cell;
use thiserror::Error;

/// Everything that can go wrong between receiving a puzzle string and
/// returning a solved board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SudokuError {
    /// The board dimension is not one of the supported perfect squares.
    #[error("board size {0} is not supported (must be 4, 9, 16 or 25)")]
    InvalidSize(usize),

    /// The encoded puzzle does not contain exactly N² characters.
    #[error("puzzle has {actual} cells, expected {expected}")]
    InvalidPuzzleLength {
        /// N² for the requested board size.
        expected: usize,
        /// The number of characters actually supplied.
        actual: usize,
    },

    /// A character is outside the encoding, or decodes to a value above N.
    #[error("invalid character {ch:?} at index {index}")]
    InvalidCharacter {
        /// The offending character, as supplied.
        ch: char,
        /// Row-major index of the character within the puzzle string.
        index: usize,
    },

    /// A matrix cell holds a value outside `0..=N`.
    #[error("cell {cell} holds {value}, outside the board's value range")]
    InvalidValue {
        /// The offending cell.
        cell: Cell,
        /// The out-of-range value.
        value: usize,
    },

    /// Two given clues share a value within one row, column or block.
    /// Detected before search begins; searching from such a state would
    /// corrupt the constraint masks silently.
    #[error("clue {value} at {cell} conflicts with an earlier clue in its row, column or block")]
    ConflictingClue {
        /// The second of the two clashing clues, in row-major order.
        cell: Cell,
        /// The duplicated value.
        value: usize,
    },

    /// The search exhausted every branch: the puzzle has no solution.
    #[error("puzzle has no solution")]
    Unsolvable,

    /// The search was stopped by an external [`CancelToken`].
    ///
    /// [`CancelToken`]: crate::solver::engine::CancelToken
    #[error("search cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SudokuError::InvalidSize(7).to_string(),
            "board size 7 is not supported (must be 4, 9, 16 or 25)"
        );
        assert_eq!(
            SudokuError::InvalidPuzzleLength {
                expected: 81,
                actual: 80
            }
            .to_string(),
            "puzzle has 80 cells, expected 81"
        );
        assert_eq!(SudokuError::Unsolvable.to_string(), "puzzle has no solution");
    }
}
