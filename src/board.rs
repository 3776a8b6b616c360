//! Board representation and the place-then-rotate move transformation.
//!
//! A [`Board`] is a small `Copy` value: applying a move always produces a new
//! board and never touches the input, so every node of the search tree owns
//! its own grid.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_CELLS, EMPTY, N, QUADRANTS, QUADRANT_SIZE, STONE_A, STONE_B};
use crate::error::{EngineError, ParseError};
use crate::moves::Move;

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    /// Player A stone (+1).
    A,
    /// Player B stone (-1).
    B,
}

impl Cell {
    /// Numeric value of the cell: +1 for A, -1 for B, 0 for empty.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::A => 1,
            Cell::B => -1,
        }
    }

    /// Owner of the stone, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The same stone owned by the other player.
    #[inline]
    pub fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::A => Cell::B,
            Cell::B => Cell::A,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY,
            Cell::A => STONE_A,
            Cell::B => STONE_B,
        }
    }
}

/// One of the two sides. A moves first and maximizes the evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// The cell value this player's stones take.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::A => Cell::A,
            Player::B => Cell::B,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "player A ({STONE_A})"),
            Player::B => write!(f, "player B ({STONE_B})"),
        }
    }
}

/// A 3x3 quadrant index in `0..4`.
///
/// Quadrants are numbered row-major: 0 top-left, 1 top-right,
/// 2 bottom-left, 3 bottom-right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quadrant(u8);

impl Quadrant {
    pub const ALL: [Quadrant; QUADRANTS as usize] =
        [Quadrant(0), Quadrant(1), Quadrant(2), Quadrant(3)];

    /// Validate a quadrant index.
    pub fn new(index: u8) -> Result<Self, EngineError> {
        if index < QUADRANTS {
            Ok(Quadrant(index))
        } else {
            Err(EngineError::InvalidQuadrant(index))
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Top-left cell of the quadrant as (row, col).
    #[inline]
    pub fn origin(self) -> (usize, usize) {
        let q = self.0 as usize;
        ((q / 2) * QUADRANT_SIZE, (q % 2) * QUADRANT_SIZE)
    }

    /// Whether (row, col) lies inside this quadrant.
    pub fn contains(self, row: usize, col: usize) -> bool {
        let (r0, c0) = self.origin();
        (r0..r0 + QUADRANT_SIZE).contains(&row) && (c0..c0 + QUADRANT_SIZE).contains(&col)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quarter-turn direction for a quadrant rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Both directions, in move-generation order.
    pub const ALL: [Rotation; 2] = [Rotation::Clockwise, Rotation::CounterClockwise];

    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

impl FromStr for Rotation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Rotation::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" => Ok(Rotation::CounterClockwise),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise => write!(f, "cw"),
            Rotation::CounterClockwise => write!(f, "ccw"),
        }
    }
}

/// A 6x6 board stored row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    #[inline]
    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    /// Cell at (row, col). Both coordinates must be below 6.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::idx(row, col)]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::idx(row, col)] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| (i / N, i % N))
    }

    /// Number of non-empty cells.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// The same position with every stone handed to the other player.
    pub fn swap_colors(&self) -> Board {
        Board {
            cells: self.cells.map(Cell::swapped),
        }
    }

    /// One counter-clockwise quarter turn of a quadrant.
    fn rotate_ccw_once(&mut self, quadrant: Quadrant) {
        let (r0, c0) = quadrant.origin();
        let old = *self;
        for r in 0..QUADRANT_SIZE {
            for c in 0..QUADRANT_SIZE {
                // new[r][c] = old[c][2 - r]
                let src = old.get(r0 + c, c0 + QUADRANT_SIZE - 1 - r);
                self.set(r0 + r, c0 + c, src);
            }
        }
    }
}

/// Rotate one quadrant of `board` in place.
///
/// Clockwise is three counter-clockwise quarter turns, so the two directions
/// are exact inverses of each other.
pub fn rotate_quadrant(board: &mut Board, quadrant: Quadrant, rotation: Rotation) {
    let turns = match rotation {
        Rotation::CounterClockwise => 1,
        Rotation::Clockwise => 3,
    };
    for _ in 0..turns {
        board.rotate_ccw_once(quadrant);
    }
}

/// Place `player`'s stone and rotate the move's quadrant.
///
/// Returns a new board; `board` itself is left untouched.
///
/// # Errors
/// - [`EngineError::CellOccupied`] if the target cell is not empty
pub fn apply_move(board: &Board, mv: &Move, player: Player) -> Result<Board, EngineError> {
    let (row, col) = (mv.row(), mv.col());
    if !board.get(row, col).is_empty() {
        return Err(EngineError::CellOccupied { row, col });
    }
    let mut next = *board;
    next.set(row, col, player.cell());
    rotate_quadrant(&mut next, mv.quadrant(), mv.rotation());
    Ok(next)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            if row == QUADRANT_SIZE {
                writeln!(f, "------+------")?;
            }
            for col in 0..N {
                if col == QUADRANT_SIZE {
                    write!(f, "| ")?;
                }
                write!(f, "{} ", self.get(row, col).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parse 36 cells of `X`, `O` and `.` in row-major order.
    ///
    /// Whitespace and the separators printed by `Display` are ignored, so a
    /// printed board parses back to itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut n = 0;
        for ch in s.chars() {
            let cell = match ch {
                STONE_A => Cell::A,
                STONE_B => Cell::B,
                EMPTY => Cell::Empty,
                '|' | '-' | '+' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseError::BoardChar(c)),
            };
            if n < BOARD_CELLS {
                board.cells[n] = cell;
            }
            n += 1;
        }
        if n != BOARD_CELLS {
            return Err(ParseError::BoardSize(n));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize, q: u8, rotation: Rotation) -> Move {
        Move::new(row, col, q, rotation).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.empty_cells().count(), 36);
        assert!(!board.is_full());
    }

    #[test]
    fn test_quadrant_origins() {
        let origins: Vec<_> = Quadrant::ALL.iter().map(|q| q.origin()).collect();
        assert_eq!(origins, vec![(0, 0), (0, 3), (3, 0), (3, 3)]);
        assert_eq!(Quadrant::new(4), Err(EngineError::InvalidQuadrant(4)));
    }

    #[test]
    fn test_quadrants_partition_board() {
        for row in 0..N {
            for col in 0..N {
                let owners = Quadrant::ALL.iter().filter(|q| q.contains(row, col)).count();
                assert_eq!(owners, 1, "cell ({row}, {col}) in {owners} quadrants");
            }
        }
    }

    #[test]
    fn test_clockwise_moves_corner_to_top_right() {
        let board = apply_move(&Board::new(), &mv(0, 0, 0, Rotation::Clockwise), Player::A).unwrap();
        assert_eq!(board.get(0, 0), Cell::Empty);
        assert_eq!(board.get(0, 2), Cell::A);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_counter_clockwise_moves_corner_to_bottom_left() {
        let board =
            apply_move(&Board::new(), &mv(0, 0, 0, Rotation::CounterClockwise), Player::B).unwrap();
        assert_eq!(board.get(2, 0), Cell::B);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_rotation_leaves_other_quadrants_alone() {
        let board = apply_move(&Board::new(), &mv(5, 5, 0, Rotation::Clockwise), Player::A).unwrap();
        assert_eq!(board.get(5, 5), Cell::A);
    }

    #[test]
    fn test_rotation_centre_is_fixed() {
        for q in Quadrant::ALL {
            let (r0, c0) = q.origin();
            for rotation in Rotation::ALL {
                let board =
                    apply_move(&Board::new(), &mv(r0 + 1, c0 + 1, q.index(), rotation), Player::A)
                        .unwrap();
                assert_eq!(board.get(r0 + 1, c0 + 1), Cell::A);
            }
        }
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = apply_move(&Board::new(), &mv(1, 1, 0, Rotation::Clockwise), Player::A).unwrap();
        let err = apply_move(&board, &mv(1, 1, 3, Rotation::Clockwise), Player::B).unwrap_err();
        assert_eq!(err, EngineError::CellOccupied { row: 1, col: 1 });
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = Board::new();
        let _ = apply_move(&board, &mv(2, 2, 1, Rotation::CounterClockwise), Player::A).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_rotation_inverse() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut board = Board::new();
        for _ in 0..20 {
            let (row, col) = (rng.usize(..N), rng.usize(..N));
            let cell = if rng.bool() { Cell::A } else { Cell::B };
            board.set(row, col, cell);
        }
        for q in Quadrant::ALL {
            for rotation in Rotation::ALL {
                let mut turned = board;
                rotate_quadrant(&mut turned, q, rotation);
                rotate_quadrant(&mut turned, q, rotation.inverse());
                assert_eq!(turned, board);
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let board: Board = "XO.... .X.... ..O... ...... ...... ......".parse().unwrap();
        let mut turned = board;
        for _ in 0..4 {
            rotate_quadrant(&mut turned, Quadrant::ALL[0], Rotation::Clockwise);
        }
        assert_eq!(turned, board);
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let board: Board = "X.O... ...... ..X... ...O.. ...... .....X".parse().unwrap();
        let text = board.to_string();
        let parsed: Board = text.parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("X.Z".parse::<Board>(), Err(ParseError::BoardChar('Z')));
        assert_eq!("X..".parse::<Board>(), Err(ParseError::BoardSize(3)));
    }

    #[test]
    fn test_swap_colors() {
        let board: Board = "XO.... ...... ...... ...... ...... ......".parse().unwrap();
        let swapped = board.swap_colors();
        assert_eq!(swapped.get(0, 0), Cell::B);
        assert_eq!(swapped.get(0, 1), Cell::A);
        assert_eq!(swapped.swap_colors(), board);
    }

    #[test]
    fn test_rotation_from_str() {
        assert_eq!("CW".parse::<Rotation>(), Ok(Rotation::Clockwise));
        assert_eq!("ccw".parse::<Rotation>(), Ok(Rotation::CounterClockwise));
        assert_eq!(
            "up".parse::<Rotation>(),
            Err(EngineError::InvalidDirection("up".into()))
        );
    }
}
