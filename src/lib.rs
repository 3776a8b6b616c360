//! Pentago-Rust: a minimax engine for the rotate-and-place game Pentago.
//!
//! Pentago is played on a 6x6 board made of four 3x3 quadrants. A move puts
//! a stone on an empty cell and then turns one quadrant a quarter turn in
//! either direction. Five in a row (horizontally, vertically or diagonally)
//! wins.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, evaluation weights, and defaults
//! - [`board`] - Board value type and the place-then-rotate transformation
//! - [`moves`] - Move type, move generation, and text notation
//! - [`rules`] - Win detection and the table of five-cell lines
//! - [`eval`] - Static evaluation
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`game`] - Game controller for a human (A) against the engine (B)
//! - [`selfplay`] - Random-versus-engine self-play harness
//! - [`protocol`] - Text protocol for external front ends
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use pentago::game::{new_game, GameConfig};
//! use pentago::rules::Outcome;
//!
//! let mut game = new_game(GameConfig { search_depth: 1, random_seed: 42 });
//!
//! // Human plays c3 and turns quadrant 0 clockwise
//! game.apply_human_move("c3 0 cw".parse().unwrap()).unwrap();
//!
//! // The engine answers
//! let reply = game.compute_and_apply_computer_move().unwrap();
//! println!("Engine plays {reply}");
//! assert_eq!(game.current_outcome(), Outcome::InProgress);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod moves;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod selfplay;

pub use board::{apply_move, rotate_quadrant, Board, Cell, Player, Quadrant, Rotation};
pub use error::{EngineError, ParseError};
pub use game::{new_game, GameConfig, GameController};
pub use moves::{generate_moves, Move};
pub use rules::{check_winner, Outcome};
pub use search::{SearchEngine, SearchResult};
