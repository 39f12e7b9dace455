//! Line protocol spoken by the `host_bridge` binary.
//!
//! One command per line, one response per command. Masks may be written as
//! `0x` hex, unsigned decimal, or the host's signed decimal.

use checkers_core::{generate, BitBoard, BoardError, Bot, Side};
use clap::ValueEnum;
use minimax_engine::{MinMaxBot, MAX_DEPTH};
use random_engine::RandomBot;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{play_with, HostInput};

pub const MIN_PROTOCOL_DEPTH: u8 = 1;
pub const MAX_PROTOCOL_DEPTH: u8 = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} arguments, got {found}")]
    Arity {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid mask {0:?}")]
    InvalidMask(String),

    #[error("invalid side {0:?}, expected w or b")]
    InvalidSide(String),

    #[error("invalid jump flag {0:?}, expected 0 or 1")]
    InvalidFlag(String),

    #[error("invalid depth {0:?}, expected 1..=8")]
    InvalidDepth(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Which bot answers `play` commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BotChoice {
    #[default]
    Minimax,
    Random,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(HostInput),
    Moves { white: u32, black: u32, side: Side },
    Depth(u8),
    Board { white: u32, black: u32 },
    IsReady,
    Quit,
}

pub fn parse_mask(token: &str) -> Result<u32, ProtocolError> {
    let parsed = if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if token.starts_with('-') {
        token.parse::<i32>().ok().map(|v| v as u32)
    } else {
        token.parse::<u32>().ok()
    };
    parsed.ok_or_else(|| ProtocolError::InvalidMask(token.to_string()))
}

fn parse_side(token: &str) -> Result<Side, ProtocolError> {
    match token {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        other => Err(ProtocolError::InvalidSide(other.to_string())),
    }
}

fn parse_flag(token: &str) -> Result<bool, ProtocolError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(ProtocolError::InvalidFlag(other.to_string())),
    }
}

fn parse_depth(token: &str) -> Result<u8, ProtocolError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|d| (MIN_PROTOCOL_DEPTH..=MAX_PROTOCOL_DEPTH).contains(d))
        .ok_or_else(|| ProtocolError::InvalidDepth(token.to_string()))
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), ProtocolError> {
    if args.len() != expected {
        return Err(ProtocolError::Arity {
            command,
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

/// Parses one non-empty line. Blank lines are the caller's concern.
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Err(ProtocolError::UnknownCommand(String::new()));
    };

    match head {
        "play" => {
            expect_args("play", args, 4)?;
            let white = parse_mask(args[0])?;
            let black = parse_mask(args[1])?;
            let side = parse_side(args[2])?;
            let is_jump = parse_flag(args[3])?;
            Ok(Command::Play(HostInput {
                white_mask: white as i32,
                black_mask: black as i32,
                is_white_to_move: side.is_white(),
                is_jump,
            }))
        }
        "moves" => {
            expect_args("moves", args, 3)?;
            Ok(Command::Moves {
                white: parse_mask(args[0])?,
                black: parse_mask(args[1])?,
                side: parse_side(args[2])?,
            })
        }
        "depth" => {
            expect_args("depth", args, 1)?;
            Ok(Command::Depth(parse_depth(args[0])?))
        }
        "board" => {
            expect_args("board", args, 2)?;
            Ok(Command::Board {
                white: parse_mask(args[0])?,
                black: parse_mask(args[1])?,
            })
        }
        "isready" => Ok(Command::IsReady),
        "quit" => Ok(Command::Quit),
        other => Err(ProtocolError::UnknownCommand(other.to_string())),
    }
}

pub fn format_played(white: u32, black: u32, is_jump: bool) -> String {
    format!("played {white:#010x} {black:#010x} {}", u8::from(is_jump))
}

/// Holds the bot and its settings across commands.
pub struct Session {
    bot: Box<dyn Bot>,
    choice: BotChoice,
    depth: u8,
    seed: Option<u64>,
}

impl Session {
    pub fn new(choice: BotChoice, depth: u8, seed: Option<u64>) -> Self {
        let depth = depth.clamp(MIN_PROTOCOL_DEPTH, MAX_PROTOCOL_DEPTH);
        Self {
            bot: build_bot(choice, depth, seed),
            choice,
            depth,
            seed,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn bot_name(&self) -> &str {
        self.bot.name()
    }

    /// Handles one input line. Returns `None` once the session should end.
    pub fn handle_line(&mut self, line: &str) -> Option<Vec<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Some(Vec::new());
        }

        match parse_command(line).and_then(|command| self.execute(command)) {
            Ok(Some(lines)) => Some(lines),
            Ok(None) => None,
            Err(err) => {
                warn!(%err, line, "rejected command");
                Some(vec![format!("error {err}")])
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<Option<Vec<String>>, ProtocolError> {
        debug!(?command, "executing command");
        let lines = match command {
            Command::Play(input) => {
                input.validate()?;
                let outcome = play_with(self.bot.as_mut(), input);
                if outcome.played {
                    vec![format_played(
                        outcome.white_mask as u32,
                        outcome.black_mask as u32,
                        outcome.is_jump,
                    )]
                } else {
                    vec!["none".to_string()]
                }
            }
            Command::Moves { white, black, side } => {
                let board = BitBoard::try_new(white, black)?;
                let mut line = String::from("moves");
                for mv in generate(&board, side) {
                    line.push(' ');
                    line.push_str(&mv.to_string());
                }
                vec![line]
            }
            Command::Depth(depth) => {
                self.depth = depth;
                self.bot = build_bot(self.choice, depth, self.seed);
                vec!["ok".to_string()]
            }
            Command::Board { white, black } => {
                let board = BitBoard::try_new(white, black)?;
                let mut lines: Vec<String> = board.to_string().lines().map(str::to_string).collect();
                lines.push("end".to_string());
                lines
            }
            Command::IsReady => vec!["readyok".to_string()],
            Command::Quit => return Ok(None),
        };
        Ok(Some(lines))
    }
}

fn build_bot(choice: BotChoice, depth: u8, seed: Option<u64>) -> Box<dyn Bot> {
    match choice {
        BotChoice::Minimax => Box::new(MinMaxBot::with_depth(depth)),
        BotChoice::Random => match seed {
            Some(seed) => Box::new(RandomBot::seeded(seed)),
            None => Box::new(RandomBot::from_entropy()),
        },
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BotChoice::Minimax, MAX_DEPTH, None)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
