#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The backtracking search engine.
//!
//! One recursive procedure drives the whole solve. Each call pops the most
//! constrained empty cell from the MRV queue, forward-checks its peers
//! (demoting each still-empty peer one bucket, since filling this cell
//! costs every neighbour one slot), then tries the cell's legal candidates
//! in increasing value order, recursing after each tentative placement.
//! When a call succeeds the placements are left in the board and success
//! propagates straight up; when every candidate fails, the frame restores
//! the peers' bucket assignments, reinserts its own cell and reports the
//! dead end to its caller. Only total exhaustion at the root surfaces as
//! [`SudokuError::Unsolvable`].
//!
//! The `hint` argument threaded through the recursion is the caller's best
//! known lower bound on the minimal bucket index. It is monotonic within a
//! branch (constraints only tighten) and retreats by at most one when the
//! popped cell's own bucket is drained by forward-checking, so the bucket
//! queue almost never rescans.
//!
//! Recursion depth equals the number of cells filled so far and is bounded
//! by N², so the call stack doubles as the undo log.

use crate::solver::board::{Board, Cell};
use crate::solver::constraints::ConstraintState;
use crate::solver::error::SudokuError;
use crate::solver::parse;
use crate::solver::peers::PeerTopology;
use crate::solver::queue::{BucketQueue, CellQueue};
use smallvec::SmallVec;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared flag for aborting a search from outside.
///
/// The engine polls the token at every recursive call, so a solve on an
/// unsolvable or pathological input stops within one cell-expansion of the
/// token firing. Cloning the token shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks any search holding this token to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counters collected during one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the MRV queue.
    pub decisions: u64,
    /// Tentative value placements, successful or not.
    pub candidates_tried: u64,
    /// Frames that exhausted every candidate and rolled back.
    pub backtracks: u64,
}

/// Outcome of one recursive call. A dead end is local control flow, never
/// an error the caller of [`Search::solve`] sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Solved,
    Exhausted,
    Cancelled,
}

/// A single-puzzle solver: board, constraint masks and MRV queue, owned
/// together for the duration of one search.
///
/// Generic over the queue strategy; [`BucketQueue`] is the default, with
/// [`OrderedQueue`](crate::solver::queue::OrderedQueue) available for
/// cross-validation or when log-time operations are acceptable.
#[derive(Debug, Clone)]
pub struct Search<Q: CellQueue = BucketQueue> {
    board: Board,
    state: ConstraintState,
    queue: Q,
    peers: Arc<PeerTopology>,
    cancel: Option<CancelToken>,
    stats: SearchStats,
    /// Smallest bucket index seen while seeding the queue; the root call's
    /// scan starts here instead of zero.
    min_count: usize,
}

impl<Q: CellQueue> Search<Q> {
    /// Prepares a search for `board`, deriving the constraint masks
    /// (rejecting conflicting clues), building the peer topology and
    /// seeding the queue with every empty cell under its remaining-count.
    ///
    /// # Errors
    ///
    /// `ConflictingClue` if two given clues collide.
    pub fn new(board: Board) -> Result<Self, SudokuError> {
        let peers = Arc::new(PeerTopology::new(board.size()));
        Self::with_topology(board, peers)
    }

    /// As [`new`](Self::new), but reuses a prebuilt topology. The topology
    /// is immutable, so one instance can serve any number of searches of
    /// the same size.
    ///
    /// # Errors
    ///
    /// `ConflictingClue` if two given clues collide, `InvalidSize` if the
    /// topology was built for a different board size.
    pub fn with_topology(board: Board, peers: Arc<PeerTopology>) -> Result<Self, SudokuError> {
        if peers.size() != board.size() {
            return Err(SudokuError::InvalidSize(peers.size().n()));
        }
        let state = ConstraintState::derive(&board)?;
        let mut queue = Q::with_size(board.size());
        let mut min_count = board.size().n();

        for cell in board.cells() {
            if board.is_empty_cell(cell) {
                let count = state.remaining(cell);
                queue.insert(cell, count);
                min_count = min_count.min(count);
            }
        }

        Ok(Self {
            board,
            state,
            queue,
            peers,
            cancel: None,
            stats: SearchStats::default(),
            min_count,
        })
    }

    /// Attaches a cancellation token, polled at every recursive call.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// * `Unsolvable` — every branch was exhausted; the board is restored
    ///   to its pre-search state.
    /// * `Cancelled` — the attached token fired.
    pub fn solve(&mut self) -> Result<Board, SudokuError> {
        match self.search(self.min_count) {
            Step::Solved => Ok(self.board.clone()),
            Step::Exhausted => Err(SudokuError::Unsolvable),
            Step::Cancelled => Err(SudokuError::Cancelled),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self, hint: usize) -> Step {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Step::Cancelled;
        }

        let Some((cell, found)) = self.queue.pop_min(hint) else {
            // No empty cells remain: the board is a complete assignment.
            return Step::Solved;
        };
        self.stats.decisions += 1;

        // Forward-check: filling `cell` will cost each still-empty peer one
        // candidate slot, so demote them one bucket now and remember the
        // moves for rollback. A peer whose filed count drifted from its
        // recomputed one (`remove` returns false) is left where it is, and
        // a zero-candidate peer stays in bucket 0 to fail fast.
        let mut child_hint = found;
        let mut moved: SmallVec<[(Cell, usize); 32]> = SmallVec::new();
        {
            let Self {
                board,
                state,
                queue,
                peers,
                ..
            } = self;
            for &peer in peers.peers(cell) {
                if !board.is_empty_cell(peer) {
                    continue;
                }
                let count = state.remaining(peer);
                if count == 0 || !queue.remove(peer, count) {
                    continue;
                }
                queue.insert(peer, count - 1);
                if count == found {
                    // The minimal bucket just lost a member to the one
                    // below it; let the children start their scan there.
                    child_hint = found - 1;
                }
                moved.push((peer, count));
            }
        }

        for value in self.state.candidates(cell) {
            self.state.place(cell, value);
            self.board.set(cell, value);
            self.stats.candidates_tried += 1;

            match self.search(child_hint) {
                Step::Solved => return Step::Solved,
                Step::Cancelled => return Step::Cancelled,
                Step::Exhausted => {
                    self.board.clear(cell);
                    self.state.unplace(cell, value);
                }
            }
        }

        // Dead end: restore the peers' bucket assignments and put the cell
        // back where it was popped from.
        for &(peer, count) in moved.iter().rev() {
            self.queue.remove(peer, count - 1);
            self.queue.reinsert(peer, count);
        }
        self.queue.reinsert(cell, found);
        self.stats.backtracks += 1;
        Step::Exhausted
    }
}

/// Parses and solves an encoded puzzle with the default bucket queue.
///
/// # Errors
///
/// Any [`SudokuError`]: codec errors, `ConflictingClue`, or `Unsolvable`.
pub fn solve(puzzle: &str) -> Result<Board, SudokuError> {
    let board = parse::parse(puzzle)?;
    Search::<BucketQueue>::new(board)?.solve()
}
