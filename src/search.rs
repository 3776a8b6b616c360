//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Player A maximizes the evaluation and player B minimizes it. Moves at
//! every node are shuffled with the engine's own random source before they
//! are searched, so equal-scoring moves are chosen at random but a given
//! seed always reproduces the same search.
//!
//! Each child is searched on its own copy of the board; nothing is undone.

use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{apply_move, Board, Player};
use crate::constants::{DEFAULT_SEARCH_DEPTH, DEFAULT_SEED};
use crate::eval::evaluate_with_outcome;
use crate::moves::{generate_moves, Move};
use crate::rules::check_winner;

/// Result of one top-level search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value of the root from A's perspective
    pub score: i32,
    /// Best move found; `None` at depth 0 or when the root is terminal
    pub best_move: Option<Move>,
    /// Interior nodes expanded during this search
    pub nodes: u64,
}

/// Minimax searcher holding the depth, the shuffle RNG, and a node counter.
pub struct SearchEngine {
    depth: u32,
    rng: fastrand::Rng,
    nodes: u64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEARCH_DEPTH, DEFAULT_SEED)
    }
}

impl SearchEngine {
    /// Create an engine that shuffles moves with `rng`.
    pub fn new(depth: u32, rng: fastrand::Rng) -> Self {
        Self {
            depth,
            rng,
            nodes: 0,
        }
    }

    /// Create an engine with a seeded random source.
    pub fn with_seed(depth: u32, seed: u64) -> Self {
        Self::new(depth, fastrand::Rng::with_seed(seed))
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Restart the shuffle sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Interior nodes expanded since the last reset.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Search for player B, the side the engine plays in a normal game.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.search_for(board, Player::B)
    }

    /// Search the configured depth with `player` to move.
    pub fn search_for(&mut self, board: &Board, player: Player) -> SearchResult {
        let start = Instant::now();
        let before = self.nodes;
        let (score, best_move) =
            self.minimax(board, self.depth, player == Player::A, i32::MIN, i32::MAX);
        let nodes = self.nodes - before;
        debug!(
            depth = self.depth,
            score,
            nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );
        SearchResult {
            score,
            best_move,
            nodes,
        }
    }

    /// Alpha-beta minimax from `board`.
    ///
    /// Returns the value of the position and the first move (in shuffled
    /// order) that achieves it. Leaves (depth 0 or a decided game) return
    /// the static evaluation and no move, and are not counted as nodes.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        let outcome = check_winner(board);
        if depth == 0 || outcome.is_over() {
            return (evaluate_with_outcome(board, outcome), None);
        }

        self.nodes += 1;
        let mut moves = generate_moves(board);
        self.rng.shuffle(&mut moves);

        let player = if maximizing { Player::A } else { Player::B };
        let mut best_move = None;

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in moves {
                let Some(child) = child_board(board, &mv, player) else {
                    continue;
                };
                let (score, _) = self.minimax(&child, depth - 1, false, alpha, beta);
                if score > max_eval {
                    max_eval = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (max_eval, best_move)
        } else {
            let mut min_eval = i32::MAX;
            for mv in moves {
                let Some(child) = child_board(board, &mv, player) else {
                    continue;
                };
                let (score, _) = self.minimax(&child, depth - 1, true, alpha, beta);
                if score < min_eval {
                    min_eval = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (min_eval, best_move)
        }
    }
}

/// Apply a generated move. Generated moves always target empty cells, so a
/// rejection means the move generator and `apply_move` disagree.
pub(crate) fn child_board(board: &Board, mv: &Move, player: Player) -> Option<Board> {
    match apply_move(board, mv, player) {
        Ok(child) => Some(child),
        Err(err) => {
            warn!(%mv, %err, "generated move rejected");
            debug_assert!(false, "generated move {mv} rejected: {err}");
            None
        }
    }
}
