//! Line-oriented text protocol for driving a game from an external front end.
//!
//! The front end plays A and sends its moves with `play`; the engine answers
//! with `genmove`. The framing follows GTP: each command may start with a
//! numeric id, and each response is `=[id] text` on success or `?[id] text`
//! on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Start a new game
//! - `depth <n>` - Set the search depth
//! - `seed <n>` - Reseed the engine's move shuffling
//! - `play <cell> <quadrant> <cw|ccw>` - Play a move for A, e.g. `play c2 1 cw`
//! - `genmove` - Search and play a move for B
//! - `showboard` - Print the board
//! - `outcome` - Report the game state
//!
//! ## Example
//!
//! ```ignore
//! use pentago::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new(Default::default());
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::game::{GameConfig, GameController};
use crate::moves::Move;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "depth",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "outcome",
    "play",
    "protocol_version",
    "quit",
    "seed",
    "showboard",
    "version",
];

/// Protocol front end around a [`GameController`].
pub struct ProtocolEngine {
    game: GameController,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl ProtocolEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: GameController::new(config),
        }
    }

    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(command = %command_line, error = %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id from the start of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.reset();
                (true, String::new())
            }

            "depth" => match args.first().map(|a| a.parse::<u32>()) {
                Some(Ok(depth)) => {
                    self.game.engine_mut().set_depth(depth);
                    (true, String::new())
                }
                Some(Err(_)) => (false, "invalid depth".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "seed" => match args.first().map(|a| a.parse::<u64>()) {
                Some(Ok(seed)) => {
                    self.game.engine_mut().reseed(seed);
                    (true, String::new())
                }
                Some(Err(_)) => (false, "invalid seed".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "play" => {
                let mv = match args.join(" ").parse::<Move>() {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                match self.game.apply_human_move(mv) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => match self.game.compute_and_apply_computer_move() {
                Ok(mv) => (true, mv.to_string()),
                Err(e) => (false, e.to_string()),
            },

            "showboard" => (true, format!("\n{}", self.game.board())),

            "outcome" => (true, self.game.current_outcome().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
