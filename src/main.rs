//! Pentago-Rust: a minimax Pentago engine.
//!
//! ## Usage
//!
//! - `pentago-rust` - Show a demo
//! - `pentago-rust demo` - Play a few moves and print the board
//! - `pentago-rust self-play --games 20 --depth 2` - Random player vs engine
//! - `pentago-rust protocol` - Text protocol on stdin/stdout for a front end
//!
//! Logging goes to stderr; set `RUST_LOG` or pass `--verbose` for more.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pentago::constants::{DEFAULT_SEARCH_DEPTH, DEFAULT_SEED, DEFAULT_SELF_PLAY_GAMES};
use pentago::game::{new_game, GameConfig};
use pentago::protocol::ProtocolEngine;
use pentago::selfplay::{run_self_play, SelfPlayConfig};

/// Pentago-Rust: a minimax Pentago engine
#[derive(Parser)]
#[command(name = "pentago-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short demo game
    Demo {
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u32,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Play a random player against the engine and report the results
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value_t = DEFAULT_SELF_PLAY_GAMES)]
        games: usize,
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u32,
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Start the text protocol on stdin/stdout for use with a front end
    Protocol {
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u32,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::SelfPlay { games, depth, seed }) => {
            let report = run_self_play(&SelfPlayConfig {
                games,
                search_depth: depth,
                seed,
            });
            println!("{report}");
        }
        Some(Commands::Protocol { depth, seed }) => {
            let mut engine = ProtocolEngine::new(GameConfig {
                search_depth: depth,
                random_seed: seed,
            });
            engine.run().context("protocol I/O failed")?;
        }
        Some(Commands::Demo { depth, seed }) => run_demo(depth, seed)?,
        None => run_demo(DEFAULT_SEARCH_DEPTH, DEFAULT_SEED)?,
    }
    Ok(())
}

fn run_demo(depth: u32, seed: u64) -> Result<()> {
    println!("Pentago-Rust: minimax Pentago engine\n");

    let mut game = new_game(GameConfig {
        search_depth: depth,
        random_seed: seed,
    });
    let mut rng = fastrand::Rng::with_seed(seed);

    for _ in 0..3 {
        let Some(mv) = pentago::selfplay::random_move(game.board(), &mut rng) else {
            break;
        };
        game.apply_human_move(mv).context("demo move rejected")?;
        println!("A plays {mv}");
        if game.is_over() {
            break;
        }

        let reply = game
            .compute_and_apply_computer_move()
            .context("engine failed to move")?;
        println!("B plays {reply} ({} nodes)", game.last_search_nodes());
        if game.is_over() {
            break;
        }
    }

    println!("\n{}", game.board());
    println!("Outcome: {}", game.current_outcome());
    Ok(())
}
