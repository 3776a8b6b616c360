//! Constants for board geometry, evaluation weights, and engine defaults.
//!
//! The board is a fixed 6x6 grid split into four 3x3 quadrants. Cells are
//! stored row-major in a flat array of `BOARD_CELLS` entries.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length. The board is always `N` x `N`.
pub const N: usize = 6;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = N * N;

/// Side length of one quadrant.
pub const QUADRANT_SIZE: usize = 3;

/// Number of quadrants.
pub const QUADRANTS: u8 = 4;

/// Number of equal marks in a line needed to win.
pub const WIN_LENGTH: usize = 5;

/// Number of distinct length-5 windows on the board:
/// 6 rows x 2 + 6 columns x 2 + 4 diagonals + 4 anti-diagonals.
pub const LINE_COUNT: usize = 2 * N * (N - WIN_LENGTH + 1) + 2 * (N - WIN_LENGTH + 1).pow(2);

/// Candidate moves generated per empty cell (4 quadrants x 2 directions).
pub const MOVES_PER_CELL: usize = QUADRANTS as usize * 2;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Score of a board won by player A. Player B wins score the negation.
pub const WIN_SCORE: i32 = 1000;

/// Bonus per stone on a quadrant centre.
pub const CENTER_BONUS: i32 = 2;

/// Quadrant centre cells as (row, col).
pub const CENTER_CELLS: [(usize, usize); 4] = [(1, 1), (1, 4), (4, 1), (4, 4)];

// =============================================================================
// Engine Defaults
// =============================================================================

/// Default minimax depth in plies.
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;

/// Default seed for move shuffling.
pub const DEFAULT_SEED: u64 = 0x5eed;

/// Default number of games for the self-play harness.
pub const DEFAULT_SELF_PLAY_GAMES: usize = 10;

// =============================================================================
// Cell Characters
// =============================================================================

/// Player A stone in text form.
pub const STONE_A: char = 'X';

/// Player B stone in text form.
pub const STONE_B: char = 'O';

/// Empty cell in text form.
pub const EMPTY: char = '.';
