#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Pluggable minimum-remaining-values priority structures.
//!
//! The search engine only needs four operations over the set of empty
//! cells — insert, remove-by-known-count, pop a cell of globally minimal
//! count, and reinsert on backtrack — so they live behind [`CellQueue`]
//! and the engine stays agnostic to the implementation, the same way the
//! solver core elsewhere in this codebase is parameterized over its
//! strategy types.
//!
//! Two implementations are provided:
//!
//! * [`BucketQueue`] — an array of N+1 buckets indexed by count, with a
//!   monotonic scan pointer supplied by the caller (`hint`). All four
//!   operations are O(1) except the pop's bucket scan, which is amortized
//!   away because forward-checking only tightens counts within a branch
//!   and backtracking restores the exact prior bucket assignment.
//! * [`OrderedQueue`] — a `BTreeSet` of `(count, cell)` entries: O(log n)
//!   operations, simpler correctness reasoning, and a fully ordered
//!   tie-break. Kept as the cross-validation fixture for the bucket
//!   variant.
//!
//! Neither structure tracks counts itself; the caller owns the mapping
//! from cell to current count (it can always recompute it from the
//! constraint masks) and must pass the right count to `remove`.

use crate::solver::board::{Cell, Size};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// The priority-structure interface required by the backtracking engine.
pub trait CellQueue {
    /// An empty queue for boards of the given size (counts range `0..=N`).
    fn with_size(size: Size) -> Self;

    /// Adds `cell` with the given remaining-count.
    fn insert(&mut self, cell: Cell, count: usize);

    /// Removes `cell`, which the caller believes has the given count.
    /// Returns `false` without modifying the queue if the cell is not
    /// filed under that count — the engine relies on this membership test
    /// during forward-checking, where a cell's filed count can lag its
    /// recomputed one.
    fn remove(&mut self, cell: Cell, count: usize) -> bool;

    /// Restores a cell removed by [`pop_min`](Self::pop_min) or by
    /// forward-checking, under its original count.
    fn reinsert(&mut self, cell: Cell, count: usize) {
        self.insert(cell, count);
    }

    /// Removes and returns a cell of globally minimal count, along with
    /// that count, or `None` if no empty cells remain (the search success
    /// signal). `hint` is a caller-maintained lower bound on the minimal
    /// count; implementations may use it to avoid rescanning from zero and
    /// must never return a cell whose count is below a correct hint.
    fn pop_min(&mut self, hint: usize) -> Option<(Cell, usize)>;

    /// Number of cells currently queued.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bucket-array MRV structure: `buckets[k]` holds the cells whose filed
/// remaining-count is `k`.
///
/// Within a bucket, [`pop_min`](CellQueue::pop_min) returns the most
/// recently inserted cell. Any cell of minimal count is equally valid, but
/// this policy is deterministic for a given puzzle, which the regression
/// tests rely on.
#[derive(Debug, Clone, Default)]
pub struct BucketQueue {
    buckets: Vec<Vec<Cell>>,
    /// Position of each queued cell inside its bucket, for O(1) removal.
    slots: FxHashMap<Cell, usize>,
}

impl CellQueue for BucketQueue {
    fn with_size(size: Size) -> Self {
        Self {
            buckets: vec![Vec::new(); size.n() + 1],
            slots: FxHashMap::default(),
        }
    }

    fn insert(&mut self, cell: Cell, count: usize) {
        let bucket = &mut self.buckets[count];
        self.slots.insert(cell, bucket.len());
        bucket.push(cell);
    }

    fn remove(&mut self, cell: Cell, count: usize) -> bool {
        let Some(&slot) = self.slots.get(&cell) else {
            return false;
        };
        let bucket = &mut self.buckets[count];
        // The slot map alone cannot tell which bucket a cell is filed in;
        // the cell is in `buckets[count]` iff it sits at its recorded slot.
        if bucket.get(slot) != Some(&cell) {
            return false;
        }
        bucket.swap_remove(slot);
        if let Some(&moved) = bucket.get(slot) {
            self.slots.insert(moved, slot);
        }
        self.slots.remove(&cell);
        true
    }

    fn pop_min(&mut self, hint: usize) -> Option<(Cell, usize)> {
        let mut count = hint;
        while count < self.buckets.len() && self.buckets[count].is_empty() {
            count += 1;
        }
        if count >= self.buckets.len() {
            return None;
        }
        let cell = self.buckets[count].pop()?;
        self.slots.remove(&cell);
        Some((cell, count))
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Ordered-multiset MRV structure over `(count, cell)` entries.
///
/// `pop_min` returns the entry with the smallest count, breaking ties by
/// lowest row-major coordinate. The scan hint is ignored; the tree is its
/// own index.
#[derive(Debug, Clone, Default)]
pub struct OrderedQueue {
    entries: BTreeSet<(usize, Cell)>,
}

impl CellQueue for OrderedQueue {
    fn with_size(_size: Size) -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }

    fn insert(&mut self, cell: Cell, count: usize) {
        self.entries.insert((count, cell));
    }

    fn remove(&mut self, cell: Cell, count: usize) -> bool {
        self.entries.remove(&(count, cell))
    }

    fn pop_min(&mut self, _hint: usize) -> Option<(Cell, usize)> {
        self.entries.pop_first().map(|(count, cell)| (cell, count))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
