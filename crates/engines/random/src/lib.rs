//! Random Move Checkers Bot
//!
//! A simple bot that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing infrastructure and the host bridge
//! - Baseline comparisons (minimax should easily beat this)
//! - Stress testing move generation

use checkers_core::{apply_move, generate_into, Bot, GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;


/// A checkers bot that plays random legal moves.
///
/// The random source is supplied by the caller, so a seeded generator makes
/// the bot reproducible.
#[derive(Debug, Clone)]
pub struct RandomBot<R = StdRng> {
    rng: R,
    moves: Vec<Move>,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            moves: Vec::with_capacity(16),
        }
    }
}

impl RandomBot<StdRng> {
    /// A bot whose choices are fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A bot seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> Bot for RandomBot<R> {
    fn play_move(&mut self, state: &GameState) -> Option<GameState> {
        generate_into(&state.board, state.side_to_move, &mut self.moves);

        let mv = *self.moves.choose(&mut self.rng)?;
        debug!(%mv, candidates = self.moves.len(), "random move selected");
        Some(apply_move(state, mv))
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
