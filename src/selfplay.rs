//! Self-play harness: a uniformly random player against the search engine.
//!
//! The random player takes side A and moves first; the engine plays B through
//! the normal [`GameController`] API, so the harness exercises exactly the
//! path a front end would use. Everything is driven from one seed, so a run
//! can be repeated exactly.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, trace, warn};

use crate::board::{Board, Player};
use crate::constants::{DEFAULT_SEARCH_DEPTH, DEFAULT_SEED, DEFAULT_SELF_PLAY_GAMES};
use crate::game::{new_game, GameConfig};
use crate::moves::{generate_moves, Move};
use crate::rules::{check_winner, Outcome};
use crate::search::child_board;

/// Harness settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub games: usize,
    pub search_depth: u32,
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_SELF_PLAY_GAMES,
            search_depth: DEFAULT_SEARCH_DEPTH,
            seed: DEFAULT_SEED,
        }
    }
}

/// Cost of one engine move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveStat {
    /// Game index within the run
    pub game: usize,
    /// Full-move number within the game (1-based)
    pub move_number: usize,
    /// Interior nodes expanded by the search
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Tally of a self-play run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfPlayReport {
    pub wins_a: usize,
    pub wins_b: usize,
    pub draws: usize,
    /// One entry per engine move, in play order
    pub moves: Vec<MoveStat>,
}

impl SelfPlayReport {
    pub fn games(&self) -> usize {
        self.wins_a + self.wins_b + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WinnerA => self.wins_a += 1,
            Outcome::WinnerB => self.wins_b += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn total_nodes(&self) -> u64 {
        self.moves.iter().map(|m| m.nodes).sum()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.moves.iter().map(|m| m.elapsed).sum()
    }

    /// Mean nodes per engine move, or 0 if the engine never moved.
    pub fn mean_nodes(&self) -> f64 {
        if self.moves.is_empty() {
            0.0
        } else {
            self.total_nodes() as f64 / self.moves.len() as f64
        }
    }
}

impl fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} games: {} engine wins, {} draws, {} random wins",
            self.games(),
            self.wins_b,
            self.draws,
            self.wins_a
        )?;
        write!(
            f,
            "{} engine moves, {:.1} nodes/move, {:.2}s total search time",
            self.moves.len(),
            self.mean_nodes(),
            self.total_elapsed().as_secs_f64()
        )
    }
}

/// Pick a uniformly random candidate move, or `None` on a full board.
pub fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Move> {
    rng.choice(generate_moves(board))
}

/// Play a game between two random players.
///
/// Returns the final outcome and the number of placements made. A game can
/// never exceed 36 placements since each one fills a cell.
pub fn random_game(rng: &mut fastrand::Rng) -> (Outcome, usize) {
    let mut board = Board::new();
    let mut player = Player::A;
    let mut placements = 0;
    loop {
        let outcome = check_winner(&board);
        if outcome.is_over() {
            return (outcome, placements);
        }
        let Some(mv) = random_move(&board, rng) else {
            return (Outcome::Draw, placements);
        };
        let Some(next) = child_board(&board, &mv, player) else {
            return (outcome, placements);
        };
        board = next;
        placements += 1;
        player = player.other();
    }
}

/// Play one random-vs-engine game, appending engine move costs to `report`.
fn play_game(
    game_index: usize,
    config: &SelfPlayConfig,
    rng: &mut fastrand::Rng,
    report: &mut SelfPlayReport,
) -> Outcome {
    let mut game = new_game(GameConfig {
        search_depth: config.search_depth,
        random_seed: rng.u64(..),
    });

    while !game.is_over() {
        let Some(mv) = random_move(game.board(), rng) else {
            break;
        };
        if let Err(err) = game.apply_human_move(mv) {
            warn!(game = game_index, %mv, %err, "random move rejected");
            break;
        }
        trace!(game = game_index, %mv, "random move");
        if game.is_over() {
            break;
        }

        let start = Instant::now();
        let reply = match game.compute_and_apply_computer_move() {
            Ok(reply) => reply,
            Err(err) => {
                warn!(game = game_index, %err, "engine failed to move");
                break;
            }
        };
        let stat = MoveStat {
            game: game_index,
            move_number: game.move_number(),
            nodes: game.last_search_nodes(),
            elapsed: start.elapsed(),
        };
        trace!(game = game_index, mv = %reply, nodes = stat.nodes, "engine move");
        report.moves.push(stat);
    }
    game.current_outcome()
}

/// Run `config.games` games and tally the results.
pub fn run_self_play(config: &SelfPlayConfig) -> SelfPlayReport {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let mut report = SelfPlayReport::default();
    for i in 0..config.games {
        let outcome = play_game(i, config, &mut rng, &mut report);
        if !outcome.is_over() {
            warn!(game = i, "self-play game abandoned before it finished");
        }
        info!(game = i, outcome = %outcome, "self-play game finished");
        report.record(outcome);
    }
    report
}
