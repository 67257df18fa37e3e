#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The canonical puzzle-string codec.
//!
//! A puzzle is exactly N² characters in row-major order:
//!
//! * `.` — an empty cell,
//! * `1`–`9` — values 1–9,
//! * `A`–`Z` (case-insensitive) — values 10–35, `value = 10 + (letter - 'A')`,
//! * `0` — accepted as a synonym for `.`. Earlier tooling substituted `0`
//!   with a character one past the largest in the puzzle before decoding,
//!   which does not map to anything meaningful on general boards; puzzles
//!   that used `0` as a sixteenth symbol must be re-encoded with letters.
//!
//! Any character decoding to a value above N is rejected, so the same
//! string cannot silently mean different things at different sizes.
//! Parsing happens once, before search; the engine never sees a malformed
//! board.

use crate::solver::board::{Board, Cell, Size};
use crate::solver::error::SudokuError;
use itertools::Itertools;

/// Parses a puzzle, inferring the board size from the character count.
///
/// # Errors
///
/// * `InvalidSize` if the length is not N² for a supported N.
/// * `InvalidCharacter` for anything outside the encoding or above N.
pub fn parse(input: &str) -> Result<Board, SudokuError> {
    let size = Size::from_cell_count(input.chars().count())?;
    parse_sized(input, size)
}

/// Parses a puzzle for a known board size.
///
/// # Errors
///
/// * `InvalidPuzzleLength` if the input is not exactly N² characters.
/// * `InvalidCharacter` for anything outside the encoding or above N.
pub fn parse_sized(input: &str, size: Size) -> Result<Board, SudokuError> {
    let n = size.n();
    let expected = size.cell_count();
    let actual = input.chars().count();
    if actual != expected {
        return Err(SudokuError::InvalidPuzzleLength { expected, actual });
    }

    let mut board = Board::empty(size);
    for (index, ch) in input.chars().enumerate() {
        let value = decode_char(ch, n).ok_or(SudokuError::InvalidCharacter { ch, index })?;
        if value != 0 {
            board.set(Cell::new(index / n, index % n), value);
        }
    }
    Ok(board)
}

/// Renders a board back into the character scheme. Empty cells become `.`,
/// so `encode(parse(p)) == p` for any puzzle that uses only dots, digits
/// and uppercase letters.
#[must_use]
pub fn encode(board: &Board) -> String {
    board
        .rows()
        .iter()
        .flatten()
        .map(|&value| encode_value(value))
        .join("")
}

fn decode_char(ch: char, n: usize) -> Option<usize> {
    let value = match ch.to_ascii_uppercase() {
        '.' | '0' => 0,
        d @ '1'..='9' => d as usize - '0' as usize,
        u @ 'A'..='Z' => 10 + u as usize - 'A' as usize,
        _ => return None,
    };
    (value <= n).then_some(value)
}

fn encode_value(value: usize) -> char {
    match value {
        0 => '.',
        1..=9 => char::from(b'0' + value as u8),
        _ => char::from(b'A' + (value - 10) as u8),
    }
}
