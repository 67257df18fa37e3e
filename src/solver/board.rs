#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Board geometry: supported sizes, cell coordinates and the mutable grid.
//!
//! A board is an N×N matrix of values in `0..=N`, where 0 marks an empty
//! cell. N must be a perfect square; the four sizes below are the ones the
//! character encoding (digits plus letters) can express. The grid is owned
//! and mutated in place by the search engine and is never aliased during a
//! search.

use crate::solver::error::SudokuError;
use core::fmt;

/// Supported board dimensions. Each is a perfect square, so the board
/// partitions into `N` non-overlapping `√N × √N` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    Four = 4,
    Nine = 9,
    Sixteen = 16,
    TwentyFive = 25,
}

impl Size {
    /// The board dimension N.
    #[must_use]
    pub const fn n(self) -> usize {
        self as usize
    }

    /// The block edge length `√N`.
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Four => 2,
            Self::Nine => 3,
            Self::Sixteen => 4,
            Self::TwentyFive => 5,
        }
    }

    /// Number of cells on the board, N².
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.n() * self.n()
    }

    /// Index in `0..N` of the block containing `cell`.
    #[must_use]
    pub const fn block_index(self, cell: Cell) -> usize {
        let sq = self.block_size();
        (cell.row / sq) * sq + cell.col / sq
    }

    /// Recovers the board size from an encoded puzzle length (N² characters).
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `cells` is not the cell count of a supported size.
    pub const fn from_cell_count(cells: usize) -> Result<Self, SudokuError> {
        match cells {
            16 => Ok(Self::Four),
            81 => Ok(Self::Nine),
            256 => Ok(Self::Sixteen),
            625 => Ok(Self::TwentyFive),
            _ => Err(SudokuError::InvalidSize(cells)),
        }
    }
}

impl TryFrom<usize> for Size {
    type Error = SudokuError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            9 => Ok(Self::Nine),
            16 => Ok(Self::Sixteen),
            25 => Ok(Self::TwentyFive),
            _ => Err(SudokuError::InvalidSize(value)),
        }
    }
}

impl From<Size> for usize {
    fn from(size: Size) -> Self {
        size.n()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.n(), self.n())
    }
}

/// A `(row, col)` coordinate, both in `0..N`. Used as the key for peer
/// lookups and priority-queue membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of the cell within an N×N grid.
    #[must_use]
    pub const fn index(self, size: Size) -> usize {
        self.row * size.n() + self.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// An N×N grid of values in `0..=N`, 0 meaning empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: Size,
    rows: Vec<Vec<usize>>,
}

impl Board {
    /// An all-empty board of the given size.
    #[must_use]
    pub fn empty(size: Size) -> Self {
        Self {
            size,
            rows: vec![vec![0; size.n()]; size.n()],
        }
    }

    /// Builds a board from a square matrix of values.
    ///
    /// # Errors
    ///
    /// * `InvalidSize` if the matrix is not square with a supported dimension.
    /// * `InvalidValue` if any cell is outside `0..=N`.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self, SudokuError> {
        let size = Size::try_from(rows.len())?;
        let n = size.n();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SudokuError::InvalidSize(row.len()));
            }
            for (c, &value) in row.iter().enumerate() {
                if value > n {
                    return Err(SudokuError::InvalidValue {
                        cell: Cell::new(r, c),
                        value,
                    });
                }
            }
        }
        Ok(Self { size, rows })
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn value(&self, cell: Cell) -> usize {
        self.rows[cell.row][cell.col]
    }

    #[must_use]
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.value(cell) == 0
    }

    /// Number of empty cells remaining.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn set(&mut self, cell: Cell, value: usize) {
        debug_assert!(value <= self.size.n());
        self.rows[cell.row][cell.col] = value;
    }

    pub fn clear(&mut self, cell: Cell) {
        self.rows[cell.row][cell.col] = 0;
    }

    /// Iterates all coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.size.n();
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    /// Borrows the underlying matrix.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }
}

impl From<Board> for Vec<Vec<usize>> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl fmt::Display for Board {
    /// Prints the grid with right-aligned decimal values, one row per line.
    /// Empty cells render as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.size.n() > 9 { 2 } else { 1 };
        for row in &self.rows {
            let mut first = true;
            for &value in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_round_trip() {
        for n in [4, 9, 16, 25] {
            let size = Size::try_from(n).unwrap();
            assert_eq!(size.n(), n);
            assert_eq!(size.block_size() * size.block_size(), n);
            assert_eq!(Size::from_cell_count(n * n).unwrap(), size);
        }
        assert_eq!(Size::try_from(7), Err(SudokuError::InvalidSize(7)));
        assert_eq!(Size::from_cell_count(80), Err(SudokuError::InvalidSize(80)));
    }

    #[test]
    fn test_block_index() {
        let size = Size::Nine;
        assert_eq!(size.block_index(Cell::new(0, 0)), 0);
        assert_eq!(size.block_index(Cell::new(0, 8)), 2);
        assert_eq!(size.block_index(Cell::new(4, 4)), 4);
        assert_eq!(size.block_index(Cell::new(8, 0)), 6);
        assert_eq!(size.block_index(Cell::new(8, 8)), 8);
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(
            Board::from_rows(vec![vec![0; 3]; 3]),
            Err(SudokuError::InvalidSize(3))
        );

        let mut ragged = vec![vec![0; 4]; 4];
        ragged[2].pop();
        assert_eq!(
            Board::from_rows(ragged),
            Err(SudokuError::InvalidSize(3))
        );

        let mut out_of_range = vec![vec![0; 4]; 4];
        out_of_range[1][2] = 5;
        assert_eq!(
            Board::from_rows(out_of_range),
            Err(SudokuError::InvalidValue {
                cell: Cell::new(1, 2),
                value: 5
            })
        );
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::empty(Size::Four);
        let cell = Cell::new(2, 3);
        assert!(board.is_empty_cell(cell));
        board.set(cell, 4);
        assert_eq!(board.value(cell), 4);
        board.clear(cell);
        assert!(board.is_empty_cell(cell));
        assert_eq!(board.empty_count(), 16);
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::empty(Size::Four);
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[15], Cell::new(3, 3));
    }
}
