//! Win detection and the table of length-5 lines.
//!
//! On a 6-wide board a run of five can only start at index 0 or 1 of a row
//! or column, and diagonals of length five only start in the top two rows.
//! That gives 32 distinct windows in total, listed in [`LINES`].

use std::fmt;

use crate::board::{Board, Cell, Player};
use crate::constants::{LINE_COUNT, N, WIN_LENGTH};

/// Game state after a full move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    WinnerA,
    WinnerB,
    /// Board full with no winning line.
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WinnerA => Some(Player::A),
            Outcome::WinnerB => Some(Player::B),
            _ => None,
        }
    }

    /// The outcome with the winner's colour swapped.
    pub fn swapped(self) -> Outcome {
        match self {
            Outcome::WinnerA => Outcome::WinnerB,
            Outcome::WinnerB => Outcome::WinnerA,
            other => other,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::WinnerA => write!(f, "{} wins", Player::A),
            Outcome::WinnerB => write!(f, "{} wins", Player::B),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Five (row, col) cells forming one window.
pub type Line = [(usize, usize); WIN_LENGTH];

/// Step directions as (d_row, d_col): row, column, diagonal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

const fn build_line(row: usize, col: usize, dr: isize, dc: isize) -> Line {
    let mut line = [(0, 0); WIN_LENGTH];
    let mut k = 0;
    while k < WIN_LENGTH {
        line[k] = (
            (row as isize + dr * k as isize) as usize,
            (col as isize + dc * k as isize) as usize,
        );
        k += 1;
    }
    line
}

const fn build_lines() -> [Line; LINE_COUNT] {
    let starts = N - WIN_LENGTH + 1;
    let mut lines = [[(0, 0); WIN_LENGTH]; LINE_COUNT];
    let mut n = 0;

    // Rows and columns
    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < starts {
            lines[n] = build_line(i, j, 0, 1);
            lines[n + 1] = build_line(j, i, 1, 0);
            n += 2;
            j += 1;
        }
        i += 1;
    }

    // Diagonals (\ and /)
    let mut i = 0;
    while i < starts {
        let mut j = 0;
        while j < starts {
            lines[n] = build_line(i, j, 1, 1);
            lines[n + 1] = build_line(i, j + WIN_LENGTH - 1, 1, -1);
            n += 2;
            j += 1;
        }
        i += 1;
    }
    lines
}

/// Every length-5 window on the board.
pub static LINES: [Line; LINE_COUNT] = build_lines();

/// Whether a run of five equal to `cell` starts at (row, col) going (dr, dc).
fn run_from(board: &Board, row: usize, col: usize, (dr, dc): (isize, isize), cell: Cell) -> bool {
    (1..WIN_LENGTH as isize).all(|k| {
        let r = (row as isize + dr * k) as usize;
        let c = (col as isize + dc * k) as usize;
        board.get(r, c) == cell
    })
}

/// Whether a five-long run in direction (dr, dc) fits when started at (row, col).
#[inline]
fn fits(row: usize, col: usize, (dr, dc): (isize, isize)) -> bool {
    let last = WIN_LENGTH - 1;
    let row_ok = dr == 0 || row + last < N;
    let col_ok = match dc {
        0 => true,
        1 => col + last < N,
        _ => col >= last,
    };
    row_ok && col_ok
}

/// Determine the outcome of `board`.
///
/// Cells are scanned row-major; for each stone the row, column, diagonal and
/// anti-diagonal starting there are tested in that order and the first
/// complete line decides the winner. If a single rotation completes lines for
/// both players, the one found first in this scan wins.
pub fn check_winner(board: &Board) -> Outcome {
    for row in 0..N {
        for col in 0..N {
            let cell = board.get(row, col);
            if cell.is_empty() {
                continue;
            }
            for dir in DIRECTIONS {
                if fits(row, col, dir) && run_from(board, row, col, dir, cell) {
                    return match cell {
                        Cell::A => Outcome::WinnerA,
                        _ => Outcome::WinnerB,
                    };
                }
            }
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_line_table() {
        assert_eq!(LINES.len(), 32);
        let unique: HashSet<_> = LINES.iter().collect();
        assert_eq!(unique.len(), 32);
        for line in LINES.iter() {
            for &(r, c) in line {
                assert!(r < N && c < N);
            }
        }
        assert!(LINES.contains(&[(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)]));
        assert!(LINES.contains(&[(1, 5), (2, 4), (3, 3), (4, 2), (5, 1)]));
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(check_winner(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_row_win() {
        let b = board(".OOOOO ...... ...... ...... ...... ......");
        assert_eq!(check_winner(&b), Outcome::WinnerB);
    }

    #[test]
    fn test_column_win() {
        let b = board("...... ..X... ..X... ..X... ..X... ..X...");
        assert_eq!(check_winner(&b), Outcome::WinnerA);
    }

    #[test]
    fn test_diagonal_wins() {
        let diag = board("...... X..... .X.... ..X... ...X.. ....X.");
        assert_eq!(check_winner(&diag), Outcome::WinnerA);

        let anti = board("....O. ...O.. ..O... .O.... O..... ......");
        assert_eq!(check_winner(&anti), Outcome::WinnerB);

        let anti_edge = board("...... .....X ....X. ...X.. ..X... .X....");
        assert_eq!(check_winner(&anti_edge), Outcome::WinnerA);
    }

    #[test]
    fn test_four_is_not_a_win() {
        let b = board("XXXX.. OOOO.. ...... ...... ...... ......");
        assert_eq!(check_winner(&b), Outcome::InProgress);
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let b = board("XXXOXX ...... ...... ...... ...... ......");
        assert_eq!(check_winner(&b), Outcome::InProgress);
    }

    #[test]
    fn test_no_wrap_around() {
        // Four at the end of row 0 plus one at the start of row 1 is not a line.
        let b = board("..XXXX X..... ...... ...... ...... ......");
        assert_eq!(check_winner(&b), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_draw() {
        let b = board("XOXOXO XOXOXO OXOXOX OXOXOX XOXOXO XOXOXO");
        assert_eq!(check_winner(&b), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let b = board("XXXXXO OXOXOX XOXOXO OXOXOX XOXOXO OXOXOX");
        assert_eq!(check_winner(&b), Outcome::WinnerA);
    }

    #[test]
    fn test_both_lines_first_in_scan_order_wins() {
        let b = board("OOOOO. XXXXX. ...... ...... ...... ......");
        assert_eq!(check_winner(&b), Outcome::WinnerB);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::WinnerA.swapped(), Outcome::WinnerB);
        assert_eq!(Outcome::Draw.swapped(), Outcome::Draw);
        assert_eq!(Outcome::WinnerB.winner(), Some(Player::B));
        assert!(!Outcome::InProgress.is_over());
    }
}
