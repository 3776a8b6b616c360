//! Error types for move validation, game flow, and text parsing.

use crate::board::Player;
use crate::rules::Outcome;

/// Errors raised by the board, the controller, and move construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Target cell already holds a stone.
    #[error("illegal move: cell ({row}, {col}) is occupied")]
    CellOccupied { row: usize, col: usize },

    /// Coordinates are outside the 6x6 grid.
    #[error("illegal move: cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid quadrant {0} (expected 0..=3)")]
    InvalidQuadrant(u8),

    #[error("invalid rotation direction '{0}' (expected cw or ccw)")]
    InvalidDirection(String),

    /// The board is full, so no move can be generated.
    #[error("no legal moves: board is full")]
    NoLegalMoves,

    #[error("game is over: {0}")]
    GameOver(Outcome),

    #[error("not your turn: {0} is to move")]
    NotYourTurn(Player),
}

/// Errors from parsing boards, cells, and moves in text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid cell '{0}' (expected a1..f6)")]
    Cell(String),

    #[error("invalid quadrant '{0}'")]
    Quadrant(String),

    #[error("expected '<cell> <quadrant> <cw|ccw>', got '{0}'")]
    MoveSyntax(String),

    #[error("unexpected board character '{0}'")]
    BoardChar(char),

    #[error("board has {0} cells, expected 36")]
    BoardSize(usize),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::CellOccupied { row: 2, col: 3 };
        assert_eq!(err.to_string(), "illegal move: cell (2, 3) is occupied");

        let err = EngineError::InvalidDirection("left".into());
        assert_eq!(
            err.to_string(),
            "invalid rotation direction 'left' (expected cw or ccw)"
        );
    }

    #[test]
    fn test_parse_error_wraps_engine_error() {
        let err: ParseError = EngineError::InvalidQuadrant(7).into();
        assert_eq!(err.to_string(), "invalid quadrant 7 (expected 0..=3)");
    }
}
