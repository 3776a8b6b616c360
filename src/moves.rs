//! Moves and move generation.
//!
//! A move is a placement on an empty cell followed by a quarter turn of one
//! quadrant. Every empty cell can be combined with every quadrant and both
//! directions, so a position with `k` empty cells has `8k` candidate moves.
//! Candidates that lead to the same board are not merged.
//!
//! ## Text form
//!
//! Cells are written as a column letter `a`..`f` (left to right) followed by
//! a row number `1`..`6` (top to bottom). A move is `<cell> <quadrant> <dir>`,
//! for example `c2 1 cw`.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Quadrant, Rotation};
use crate::constants::{MOVES_PER_CELL, N};
use crate::error::{EngineError, ParseError};

/// A placement plus quadrant rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    row: u8,
    col: u8,
    quadrant: Quadrant,
    rotation: Rotation,
}

impl Move {
    /// Build a move, validating the coordinates and quadrant index.
    ///
    /// # Errors
    /// - [`EngineError::OutOfBounds`] if `row` or `col` is 6 or more
    /// - [`EngineError::InvalidQuadrant`] if `quadrant` is 4 or more
    pub fn new(row: usize, col: usize, quadrant: u8, rotation: Rotation) -> Result<Self, EngineError> {
        if row >= N || col >= N {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(Self::from_parts(row, col, Quadrant::new(quadrant)?, rotation))
    }

    /// Build a move from already validated parts.
    #[inline]
    pub(crate) fn from_parts(row: usize, col: usize, quadrant: Quadrant, rotation: Rotation) -> Self {
        debug_assert!(row < N && col < N);
        Move {
            row: row as u8,
            col: col as u8,
            quadrant,
            rotation,
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col as usize
    }

    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

/// Enumerate every candidate move on `board`.
///
/// Order: empty cells row-major, then quadrants 0..4, then clockwise before
/// counter-clockwise.
pub fn generate_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(board.empty_cells().count() * MOVES_PER_CELL);
    for (row, col) in board.empty_cells() {
        for quadrant in Quadrant::ALL {
            for rotation in Rotation::ALL {
                moves.push(Move::from_parts(row, col, quadrant, rotation));
            }
        }
    }
    moves
}

/// Parse a cell such as `"a1"` or `"F6"` into (row, col).
///
/// Returns `None` for anything outside `a1`..`f6`.
pub fn parse_cell(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col_char = bytes[0].to_ascii_lowercase();
    let row_char = bytes[1];
    if !(b'a'..b'a' + N as u8).contains(&col_char) || !(b'1'..b'1' + N as u8).contains(&row_char) {
        return None;
    }
    Some(((row_char - b'1') as usize, (col_char - b'a') as usize))
}

/// Format (row, col) as a cell name such as `"c2"`.
pub fn str_cell(row: usize, col: usize) -> String {
    format!("{}{}", (b'a' + col as u8) as char, row + 1)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            str_cell(self.row(), self.col()),
            self.quadrant,
            self.rotation
        )
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [cell, quadrant, rotation] = parts[..] else {
            return Err(ParseError::MoveSyntax(s.to_string()));
        };
        let (row, col) = parse_cell(cell).ok_or_else(|| ParseError::Cell(cell.to_string()))?;
        let quadrant: u8 = quadrant
            .parse()
            .map_err(|_| ParseError::Quadrant(quadrant.to_string()))?;
        let rotation: Rotation = rotation.parse()?;
        Ok(Move::new(row, col, quadrant, rotation)?)
    }
}
