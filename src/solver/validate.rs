#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Standalone checker for completed boards.
//!
//! Independent of the search engine: it consumes only the finished matrix
//! and reconstructs nothing from solver state, so it can vouch for a board
//! produced by any means. The CLI runs it after every solve unless
//! `--verify` is switched off.

use crate::solver::board::{Board, Cell};
use crate::solver::mask::ValueMask;

/// Returns `true` iff every row, column and block of `board` is exactly
/// the set `{1..=N}` — no empties, no repeats, no omissions.
#[must_use]
pub fn is_valid_solution(board: &Board) -> bool {
    let size = board.size();
    let n = size.n();
    let sq = size.block_size();
    let full = ValueMask::full(n);

    let house_mask = |cells: &mut dyn Iterator<Item = Cell>| -> ValueMask {
        let mut mask = ValueMask::EMPTY;
        for cell in cells {
            let value = board.value(cell);
            if value == 0 {
                return ValueMask::EMPTY;
            }
            mask.insert(value);
        }
        mask
    };

    for i in 0..n {
        let row = house_mask(&mut (0..n).map(|c| Cell::new(i, c)));
        if row != full {
            return false;
        }
        let col = house_mask(&mut (0..n).map(|r| Cell::new(r, i)));
        if col != full {
            return false;
        }
    }

    for block_row in (0..n).step_by(sq) {
        for block_col in (0..n).step_by(sq) {
            let block = house_mask(
                &mut (block_row..block_row + sq)
                    .flat_map(|r| (block_col..block_col + sq).map(move |c| Cell::new(r, c))),
            );
            if block != full {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles;
    use crate::solver::parse;

    #[test]
    fn test_known_solution_is_valid() {
        let board = parse::parse(puzzles::EXAMPLE_NINE_SOLUTION).unwrap();
        assert!(is_valid_solution(&board));
    }

    #[test]
    fn test_incomplete_board_is_invalid() {
        let board = parse::parse(puzzles::EXAMPLE_NINE).unwrap();
        assert!(!is_valid_solution(&board));
    }

    #[test]
    fn test_row_duplicate_is_invalid() {
        let mut board = parse::parse(puzzles::EXAMPLE_NINE_SOLUTION).unwrap();
        // Copy (0,1) over (0,0): row 0 now repeats a value.
        let dup = board.value(Cell::new(0, 1));
        board.set(Cell::new(0, 0), dup);
        assert!(!is_valid_solution(&board));
    }

    #[test]
    fn test_swap_within_row_breaks_columns() {
        let mut board = parse::parse(puzzles::EXAMPLE_NINE_SOLUTION).unwrap();
        // Rows stay permutations, but two columns now repeat values.
        let a = board.value(Cell::new(4, 0));
        let b = board.value(Cell::new(4, 8));
        board.set(Cell::new(4, 0), b);
        board.set(Cell::new(4, 8), a);
        assert!(!is_valid_solution(&board));
    }

    #[test]
    fn test_latin_square_without_block_property_is_invalid() {
        // Cyclic shift by one per row: rows and columns are fine, blocks
        // are not.
        let rows: Vec<Vec<usize>> = (0..9)
            .map(|r| (0..9).map(|c| (r + c) % 9 + 1).collect())
            .collect();
        let board = Board::from_rows(rows).unwrap();
        assert!(!is_valid_solution(&board));
    }

    #[test]
    fn test_all_sizes_pattern_grids_are_valid() {
        use crate::solver::board::Size;
        for size in [Size::Four, Size::Nine, Size::Sixteen, Size::TwentyFive] {
            let n = size.n();
            let sq = size.block_size();
            let rows: Vec<Vec<usize>> = (0..n)
                .map(|r| (0..n).map(|c| (r * sq + r / sq + c) % n + 1).collect())
                .collect();
            let board = Board::from_rows(rows).unwrap();
            assert!(is_valid_solution(&board), "pattern grid invalid for {size}");
        }
    }
}
