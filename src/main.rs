#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! # `sudoku_solver`
//!
//! A command-line solver for generalized N×N Sudoku puzzles
//! (N ∈ {4, 9, 16, 25}).
//!
//! Puzzles are given as N² characters in row-major order: `.` for an empty
//! cell, `1`–`9` for values 1–9 and letters `A`–`Z` (case-insensitive) for
//! values 10 and up. Whitespace in files and text input is ignored, so
//! puzzles may be laid out one row per line.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a puzzle file (board size inferred from its length)
//! sudoku_solver puzzle.sudoku
//!
//! # Solve a puzzle given inline
//! sudoku_solver text --input "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!
//! # Solve every .sudoku file under a directory
//! sudoku_solver dir --path ./puzzles
//!
//! # Use the ordered-set MRV queue instead of the bucket queue
//! sudoku_solver puzzle.sudoku --queue ordered
//!
//! # Bound the search on a pathological input
//! sudoku_solver puzzle.sudoku --timeout-ms 2000
//! ```
//!
//! Every subcommand accepts `--verify` (re-check the solved board against
//! the row/column/block rules, default on), `--stats` (timing, search
//! counters and allocator figures, default on) and `--print-solution`
//! (default on).

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use sudoku_solver::solver::board::Board;
use sudoku_solver::solver::engine::{CancelToken, Search, SearchStats};
use sudoku_solver::solver::error::SudokuError;
use sudoku_solver::solver::parse;
use sudoku_solver::solver::queue::{BucketQueue, CellQueue, OrderedQueue};
use sudoku_solver::solver::validate::is_valid_solution;
use tikv_jemalloc_ctl::{epoch, stats};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku_solver", version, about = "A configurable Sudoku solver")]
struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the sudoku solver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a puzzle file.
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text.
    Text {
        /// The encoded puzzle (e.g. "53..7....6..195..." for a 9x9 board).
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` file under a directory.
    Dir {
        /// Path to the directory to scan recursively.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// MRV priority-structure strategies selectable from the command line, the
/// runtime face of the `CellQueue` implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum QueueType {
    /// Bucket array with O(1)-amortized operations.
    #[default]
    Bucket,
    /// Ordered set with O(log n) operations.
    Ordered,
}

impl fmt::Display for QueueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bucket => write!(f, "bucket"),
            Self::Ordered => write!(f, "ordered"),
        }
    }
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// Enable verification of the solved board against the row, column and
    /// block rules.
    #[arg(short, long, default_value_t = true)]
    verify: bool,

    /// Enable printing of timing, search and memory statistics.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Enable printing of the solved grid.
    #[arg(short, long, default_value_t = true)]
    print_solution: bool,

    /// Specifies the MRV priority structure driving cell selection.
    #[arg(long, default_value_t = QueueType::Bucket)]
    queue: QueueType,

    /// Abort the search after this many milliseconds and report CANCELLED.
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::File { path, common }) => solve_file(&path, &common),
        Some(Commands::Text { input, common }) => solve_text(&input, &common),
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sudoku_solver",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        None => match cli.path {
            Some(path) => solve_file(&path, &cli.common),
            None => {
                Cli::command().print_help().ok();
                Ok(())
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    println!("solving {}", path.display());
    solve_text(&raw, common)
}

/// Iterates over all `.sudoku` files under `path` and solves each in turn.
fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            eprintln!("skipping non-puzzle file: {}", file_path.display());
            continue;
        }
        solve_file(file_path, common)?;
    }

    Ok(())
}

fn solve_text(raw: &str, common: &CommonOptions) -> Result<(), String> {
    // Puzzle files usually carry one row per line; the codec wants the
    // bare N^2 characters.
    let puzzle: String = raw.split_whitespace().collect();

    let parse_start = Instant::now();
    let board = parse::parse(&puzzle).map_err(|e| e.to_string())?;
    let parse_time = parse_start.elapsed();

    let outcome = match common.queue {
        QueueType::Bucket => run_search::<BucketQueue>(board, common),
        QueueType::Ordered => run_search::<OrderedQueue>(board, common),
    };
    let (result, solve_time, search_stats) = outcome?;

    match result {
        Ok(solved) => {
            println!("SOLVED ({})", solved.size());
            if common.print_solution {
                print!("{solved}");
            }
            if common.verify {
                let ok = is_valid_solution(&solved);
                println!("Verified: {ok}");
                assert!(ok, "solved board failed verification");
            }
        }
        Err(SudokuError::Unsolvable) => println!("UNSOLVABLE"),
        Err(SudokuError::Cancelled) => println!("CANCELLED (timeout)"),
        Err(other) => return Err(other.to_string()),
    }

    if common.stats {
        report_stats(parse_time, solve_time, search_stats);
    }

    Ok(())
}

type SearchOutcome = (Result<Board, SudokuError>, Duration, SearchStats);

fn run_search<Q: CellQueue>(
    board: Board,
    common: &CommonOptions,
) -> Result<SearchOutcome, String> {
    let mut search = Search::<Q>::new(board).map_err(|e| e.to_string())?;

    if let Some(ms) = common.timeout_ms {
        let token = CancelToken::new();
        search = search.with_cancel_token(token.clone());
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            token.cancel();
        });
    }

    let start = Instant::now();
    let result = search.solve();
    Ok((result, start.elapsed(), search.stats()))
}

fn report_stats(parse_time: Duration, solve_time: Duration, search: SearchStats) {
    println!("Parse time: {parse_time:?}");
    println!("Solve time: {solve_time:?}");
    println!(
        "Decisions: {} Candidates tried: {} Backtracks: {}",
        search.decisions, search.candidates_tried, search.backtracks
    );

    if epoch::advance().is_ok() {
        if let (Ok(allocated), Ok(resident)) = (stats::allocated::read(), stats::resident::read()) {
            println!("Memory allocated: {allocated} bytes, resident: {resident} bytes");
        }
    }
}
