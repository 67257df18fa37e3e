#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Precomputed peer topology: for every cell, the cells constraining it.
//!
//! A cell's peers are the union of the other cells in its row, the other
//! cells in its column, and the cells of its block whose row *and* column
//! both differ from the cell's own. The block rule's double exclusion is
//! what keeps the list duplicate-free: block-mates sharing the row or the
//! column were already contributed by the first two rules.
//!
//! The topology is a pure function of the board size. It is immutable after
//! construction and may be shared read-only across any number of concurrent
//! searches of the same size.

use crate::solver::board::{Cell, Size};
use smallvec::SmallVec;

/// Inline capacity sized for the 9×9 peer list (20 entries); the larger
/// boards spill to the heap.
type PeerList = SmallVec<[Cell; 20]>;

/// Per-cell peer lists for one board size, indexed row-major.
#[derive(Debug, Clone)]
pub struct PeerTopology {
    size: Size,
    peers: Vec<PeerList>,
}

impl PeerTopology {
    /// Builds the topology for `size`. Cost is O(N³) cells-times-peers and
    /// is paid once per size, not per puzzle.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let n = size.n();
        let sq = size.block_size();
        let mut peers = Vec::with_capacity(size.cell_count());

        for row in 0..n {
            for col in 0..n {
                let mut list = PeerList::new();
                for k in 0..n {
                    if k != col {
                        list.push(Cell::new(row, k));
                    }
                }
                for k in 0..n {
                    if k != row {
                        list.push(Cell::new(k, col));
                    }
                }
                let block_row = (row / sq) * sq;
                let block_col = (col / sq) * sq;
                for r in block_row..block_row + sq {
                    for c in block_col..block_col + sq {
                        if r != row && c != col {
                            list.push(Cell::new(r, c));
                        }
                    }
                }
                peers.push(list);
            }
        }

        Self { size, peers }
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The peers of `cell`, in row-then-column-then-block construction order.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        &self.peers[cell.index(self.size)]
    }

    /// Every cell of an N×N board has the same number of peers:
    /// `3(N-1) - (√N-1)²`.
    #[must_use]
    pub const fn peers_per_cell(size: Size) -> usize {
        let n = size.n();
        let sq = size.block_size();
        3 * (n - 1) - (sq - 1) * (sq - 1)
    }
}
