//! MinMax Checkers Bot
//!
//! Fixed-depth minimax over the piece differential. This is the bot the host
//! calls once per ply.

mod eval;
mod search;

use checkers_core::{Bot, GameState};
use tracing::debug;

pub use eval::{evaluate, no_move_score, NO_MOVE_SCORE};
pub use search::{find_best_move, SearchResult, MAX_DEPTH};

/// Checkers bot using plain minimax to a fixed depth.
///
/// This bot uses:
/// - Minimax search with no pruning
/// - Piece-count evaluation (white men minus black men)
/// - First-seen tie breaking, so identical inputs give identical moves
#[derive(Debug, Clone)]
pub struct MinMaxBot {
    max_depth: u8,
    /// Node counter of the last search
    nodes: u64,
}

impl MinMaxBot {
    pub fn new() -> Self {
        Self::with_depth(MAX_DEPTH)
    }

    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            nodes: 0,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Runs the search and keeps its statistics.
    pub fn search(&mut self, state: &GameState) -> SearchResult {
        let result = find_best_move(state, self.max_depth);
        self.nodes = result.nodes;
        result
    }
}

impl Default for MinMaxBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for MinMaxBot {
    fn play_move(&mut self, state: &GameState) -> Option<GameState> {
        let result = self.search(state);
        match &result.next_state {
            Some(next) => debug!(score = result.score, nodes = result.nodes, %next, "minimax move"),
            None => debug!(%state, "minimax found no move"),
        }
        result.next_state
    }

    fn name(&self) -> &str {
        "MinMax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
