pub mod bitboard;
pub mod coord;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod square_set;
pub mod state;
pub mod turn;
pub mod types;

// Re-export core game logic (not bot-specific)
pub use bitboard::*;
pub use coord::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use square_set::*;
pub use state::*;
pub use turn::*;
pub use types::*;

// =============================================================================
// Bot trait: implemented by every move-picking policy (minimax, random, ...)
// =============================================================================

/// A policy that plays one ply for the side to move.
///
/// Bots never enforce capture chains; see [`play_turn`] for the host-side
/// loop that keeps a side on move after a jump.
pub trait Bot: Send {
    /// Picks a move for `state.side_to_move` and returns the successor state,
    /// or `None` when that side has no legal move.
    fn play_move(&mut self, state: &GameState) -> Option<GameState>;

    /// Returns the bot's display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Overwrites `state` with the successor and reports whether a move was
    /// played. This is the shape the host calls through.
    fn play_in_place(&mut self, state: &mut GameState) -> bool {
        match self.play_move(state) {
            Some(next) => {
                *state = next;
                true
            }
            None => false,
        }
    }
}
