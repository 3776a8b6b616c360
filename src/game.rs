//! Game controller: turn order, move validation, and the computer player.
//!
//! The human (or any external driver) plays A and moves first; the engine
//! plays B. The controller never draws anything; a front end reads the
//! board and outcome back out and feeds moves in.

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{apply_move, Board, Player};
use crate::constants::{DEFAULT_SEARCH_DEPTH, DEFAULT_SEED};
use crate::error::EngineError;
use crate::moves::{generate_moves, Move};
use crate::rules::{check_winner, Outcome};
use crate::search::SearchEngine;

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Minimax depth in plies
    pub search_depth: u32,
    /// Seed for the engine's move shuffling
    pub random_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            random_seed: DEFAULT_SEED,
        }
    }
}

/// Start a game on an empty board with A to move.
pub fn new_game(config: GameConfig) -> GameController {
    GameController::new(config)
}

/// Owns the canonical board and drives the computer side.
pub struct GameController {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    move_number: usize,
    engine: SearchEngine,
    last_search_nodes: u64,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::A,
            outcome: Outcome::InProgress,
            move_number: 0,
            engine: SearchEngine::with_seed(config.search_depth, config.random_seed),
            last_search_nodes: 0,
        }
    }

    /// Clear the board and hand the first move back to A.
    ///
    /// The engine keeps its depth and continues its random sequence.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::A;
        self.outcome = Outcome::InProgress;
        self.move_number = 0;
        self.last_search_nodes = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Number of full moves played so far.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SearchEngine {
        &mut self.engine
    }

    /// Nodes expanded by the most recent computer move.
    pub fn last_search_nodes(&self) -> u64 {
        self.last_search_nodes
    }

    fn check_turn(&self, player: Player) -> Result<(), EngineError> {
        if self.outcome.is_over() {
            return Err(EngineError::GameOver(self.outcome));
        }
        if self.to_move != player {
            return Err(EngineError::NotYourTurn(self.to_move));
        }
        Ok(())
    }

    /// Apply a full move for `player` and update turn and outcome.
    fn commit(&mut self, mv: &Move, player: Player) -> Result<Board, EngineError> {
        self.board = apply_move(&self.board, mv, player)?;
        self.move_number += 1;
        self.to_move = player.other();
        self.outcome = check_winner(&self.board);
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, moves = self.move_number, "game over");
        }
        Ok(self.board)
    }

    /// Play A's move.
    ///
    /// # Errors
    /// - [`EngineError::CellOccupied`] if the target cell is taken (board unchanged)
    /// - [`EngineError::GameOver`] if the game has already ended
    /// - [`EngineError::NotYourTurn`] if B is to move
    pub fn apply_human_move(&mut self, mv: Move) -> Result<Board, EngineError> {
        self.check_turn(Player::A)?;
        self.commit(&mv, Player::A)
    }

    /// Search and play B's move.
    ///
    /// # Errors
    /// - [`EngineError::GameOver`] if a player has already won
    /// - [`EngineError::NoLegalMoves`] if the board filled up without a winner
    /// - [`EngineError::NotYourTurn`] if A is to move
    pub fn compute_and_apply_computer_move(&mut self) -> Result<Move, EngineError> {
        if self.outcome.winner().is_some() {
            return Err(EngineError::GameOver(self.outcome));
        }
        if self.board.is_full() {
            return Err(EngineError::NoLegalMoves);
        }
        self.check_turn(Player::B)?;

        let start = Instant::now();
        self.engine.reset_nodes();
        let result = self.engine.search(&self.board);
        self.last_search_nodes = self.engine.nodes();

        // Depth 0 returns no move; fall back to the first candidate.
        let mv = match result.best_move {
            Some(mv) => mv,
            None => *generate_moves(&self.board)
                .first()
                .ok_or(EngineError::NoLegalMoves)?,
        };
        debug!(
            mv = %mv,
            score = result.score,
            nodes = self.last_search_nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "computer move"
        );
        self.commit(&mv, Player::B)?;
        Ok(mv)
    }
}
