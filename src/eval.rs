//! Static position evaluation.
//!
//! Scores are from player A's point of view: positive favours A, negative
//! favours B. A decided game scores `±WIN_SCORE` (or 0 for a draw) and the
//! heuristic terms are not consulted at all.
//!
//! The heuristic has two parts:
//! - quadrant centres: `CENTER_BONUS` per stone on one of the four centres
//! - line potential: every length-5 window holding stones of only one player
//!   scores the square of that player's stone count

use crate::board::{Board, Cell};
use crate::constants::{CENTER_BONUS, CENTER_CELLS, WIN_SCORE};
use crate::rules::{check_winner, Line, Outcome, LINES};

/// Evaluate `board` from player A's perspective.
pub fn evaluate(board: &Board) -> i32 {
    evaluate_with_outcome(board, check_winner(board))
}

/// Evaluate `board` given its already computed `outcome`.
///
/// `outcome` must be `check_winner(board)`.
pub fn evaluate_with_outcome(board: &Board, outcome: Outcome) -> i32 {
    match outcome {
        Outcome::WinnerA => return WIN_SCORE,
        Outcome::WinnerB => return -WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }
    center_score(board) + LINES.iter().map(|line| line_score(board, line)).sum::<i32>()
}

/// Centre control term.
pub fn center_score(board: &Board) -> i32 {
    CENTER_CELLS
        .iter()
        .map(|&(r, c)| board.get(r, c).sign() * CENTER_BONUS)
        .sum()
}

/// Score of a single window: 0 if blocked or empty, otherwise the signed
/// square of the owner's stone count.
pub fn line_score(board: &Board, line: &Line) -> i32 {
    let mut a = 0;
    let mut b = 0;
    for &(r, c) in line {
        match board.get(r, c) {
            Cell::A => a += 1,
            Cell::B => b += 1,
            Cell::Empty => {}
        }
    }
    match (a, b) {
        (0, 0) => 0,
        (a, 0) => a * a,
        (0, b) => -(b * b),
        _ => 0, // blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_terminal_scores() {
        let a_wins = board("XXXXX. OOOO.. ...... ...... ...... ......");
        assert_eq!(evaluate(&a_wins), WIN_SCORE);
        assert_eq!(evaluate(&a_wins.swap_colors()), -WIN_SCORE);

        let draw = board("XOXOXO XOXOXO OXOXOX OXOXOX XOXOXO XOXOXO");
        assert_eq!(evaluate(&draw), 0);
    }

    #[test]
    fn test_evaluate_with_outcome_matches_evaluate() {
        let mut rng = fastrand::Rng::with_seed(12);
        for _ in 0..200 {
            let text: String = (0..36)
                .map(|_| rng.choice(['X', 'O', '.', '.']).unwrap())
                .collect();
            let b = board(&text);
            assert_eq!(evaluate_with_outcome(&b, check_winner(&b)), evaluate(&b), "\n{b}");
        }
    }

    #[test]
    fn test_single_corner_stone() {
        // (0,0) lies on one row window, one column window and one diagonal.
        let b = board("X..... ...... ...... ...... ...... ......");
        assert_eq!(evaluate(&b), 3);
    }

    #[test]
    fn test_single_centre_stone() {
        // (1,1): rows 2, columns 2, diagonals (0,0) and (1,1) = 6 windows,
        // plus the centre bonus.
        let b = board("...... .X.... ...... ...... ...... ......");
        assert_eq!(evaluate(&b), 6 + CENTER_BONUS);
    }

    #[test]
    fn test_line_score_classes() {
        let line = &LINES[0]; // row 0, cols 0..5
        assert_eq!(line_score(&board("XXX... ...... ...... ...... ...... ......"), line), 9);
        assert_eq!(line_score(&board("OO.... ...... ...... ...... ...... ......"), line), -4);
        assert_eq!(line_score(&board("XO.... ...... ...... ...... ...... ......"), line), 0);
        assert_eq!(line_score(&Board::new(), line), 0);
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let b = board("X.O... .X.... ..O... ...... ....X. O.....");
        assert_eq!(evaluate(&b.swap_colors()), -evaluate(&b));
    }

    #[test]
    fn test_center_score() {
        let b = board("...... .X..O. ...... ...... .X..X. ......");
        assert_eq!(center_score(&b), 2 * CENTER_BONUS);
    }
}
