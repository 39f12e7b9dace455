//! Self-play runner for checkers bots
//!
//! This crate provides infrastructure for:
//! - Running matches between bots with alternating colors
//! - Seeded random openings so repeated games differ
//! - Saving results as JSON for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Minimax at depth 3 against the random bot
//! cargo run -p tournament -- minimax:3 random --games 100
//!
//! # Settings from a file, command line flags win
//! cargo run -p tournament -- minimax:4 minimax:2 --config match.toml --output results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
