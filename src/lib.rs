#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A generalized N×N Sudoku solver (N ∈ {4, 9, 16, 25}) built on bitmask
//! constraint propagation and a minimum-remaining-values backtracking
//! search.
//!
//! The quickest way in is [`solver::engine::solve`]:
//!
//! ```
//! use sudoku_solver::puzzles::EXAMPLE_NINE;
//! use sudoku_solver::solver::engine::solve;
//! use sudoku_solver::solver::validate::is_valid_solution;
//!
//! let board = solve(EXAMPLE_NINE).unwrap();
//! assert!(is_valid_solution(&board));
//! ```

/// The `puzzles` module holds fixture puzzles for every supported board
/// size, shared by the tests, benchmarks and CLI.
pub mod puzzles;

/// The `solver` module implements the solving pipeline: the puzzle codec,
/// the bitmask constraint model, the peer topology, the pluggable MRV
/// priority structures and the backtracking search engine.
pub mod solver;
