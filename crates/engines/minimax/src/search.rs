//! Fixed-depth minimax without pruning

use checkers_core::{apply_move, generate_into, GameState, Move};
use tracing::trace;

use crate::eval::{evaluate, improves, no_move_score};

/// Default search depth. The root is depth 0; children of nodes at this
/// depth are scored statically.
pub const MAX_DEPTH: u8 = 3;

/// Outcome of a search from one root state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax score of the root, or the no-move score when the root is stuck.
    pub score: i32,
    /// The root's child that realised `score` (not the leaf). `None` when the
    /// side to move has no legal move.
    pub next_state: Option<GameState>,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Searches `state` to `max_depth` and returns the best immediate successor.
///
/// White maximises and Black minimises the piece differential. Ties keep
/// the first move in generator order, so the result is deterministic.
pub fn find_best_move(state: &GameState, max_depth: u8) -> SearchResult {
    let mut nodes = 0u64;
    let mut layers = vec![Vec::with_capacity(16); max_depth as usize + 1];
    let (score, next_state) = search_node(state, 0, max_depth, &mut layers, &mut nodes);
    SearchResult {
        score,
        next_state,
        nodes,
    }
}

/// Returns (score, best child). A node without moves keeps the no-move
/// score of its side to move, which reads as a loss for that side.
fn search_node(
    state: &GameState,
    depth: u8,
    max_depth: u8,
    layers: &mut [Vec<Move>],
    nodes: &mut u64,
) -> (i32, Option<GameState>) {
    *nodes += 1;

    let side = state.side_to_move;
    let mut best_score = no_move_score(side);
    let mut best_state = None;

    let Some((moves, rest)) = layers.split_first_mut() else {
        return (evaluate(&state.board), None);
    };
    generate_into(&state.board, side, moves);

    for &mv in moves.iter() {
        let child = apply_move(state, mv);
        let score = if depth >= max_depth {
            *nodes += 1;
            evaluate(&child.board)
        } else {
            search_node(&child, depth + 1, max_depth, rest, nodes).0
        };

        // Child scores never fall below the side's no-move score, so taking
        // the first child only fixes the successor, not the value.
        if best_state.is_none() || improves(side, score, best_score) {
            best_score = score;
            best_state = Some(child);
        }
    }

    trace!(depth, %state, best_score, "node searched");
    (best_score, best_state)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
