//! Host boundary for the checkers bot.
//!
//! The host (a game UI) keeps the board as two 32-bit integers and calls the
//! engine once per bot ply with `(white, black, is_white_to_move, is_jump)`.
//! It receives the new masks and the jump flag back, or learns that the bot
//! has no move and the game is over.
//!
//! The engine does not force a capture chain to continue from the landing
//! square: when `is_jump` comes back set, the host is expected to call again
//! for the same side and to accept whatever legal move is returned.

pub mod protocol;

use checkers_core::{BitBoard, BoardResult, Bot, GameState};
use minimax_engine::MinMaxBot;
use tracing::info;

pub use protocol::{BotChoice, ProtocolError, Session};

/// The four values the host passes per call. Masks are the host's signed
/// integers; bit `i` is dark square `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostInput {
    pub white_mask: i32,
    pub black_mask: i32,
    pub is_white_to_move: bool,
    pub is_jump: bool,
}

impl HostInput {
    /// Checks the one precondition the engine relies on: disjoint masks.
    pub fn validate(&self) -> BoardResult<()> {
        BitBoard::try_new(self.white_mask as u32, self.black_mask as u32).map(|_| ())
    }

    pub fn to_state(&self) -> GameState {
        GameState::from_host(
            self.white_mask as u32,
            self.black_mask as u32,
            self.is_white_to_move,
            self.is_jump,
        )
    }
}

/// What the host reads back. When `played` is false the other fields echo
/// the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostOutcome {
    pub played: bool,
    pub white_mask: i32,
    pub black_mask: i32,
    pub is_jump: bool,
}

impl HostOutcome {
    fn from_state(played: bool, state: &GameState) -> Self {
        Self {
            played,
            white_mask: state.board.white_mask() as i32,
            black_mask: state.board.black_mask() as i32,
            is_jump: state.is_jump,
        }
    }
}

/// Plays one minimax ply for the host.
pub fn play_bot_move(
    white_mask: i32,
    black_mask: i32,
    is_white_to_move: bool,
    is_jump: bool,
) -> HostOutcome {
    let input = HostInput {
        white_mask,
        black_mask,
        is_white_to_move,
        is_jump,
    };
    play_with(&mut MinMaxBot::new(), input)
}

/// Plays one ply with any bot, logging the state on both sides of the call.
pub fn play_with(bot: &mut dyn Bot, input: HostInput) -> HostOutcome {
    let mut state = input.to_state();
    info!(bot = bot.name(), %state, "state before bot move");

    if !bot.play_in_place(&mut state) {
        info!(bot = bot.name(), "no possible bot moves");
        return HostOutcome::from_state(false, &state);
    }

    info!(bot = bot.name(), %state, "state after bot move");
    HostOutcome::from_state(true, &state)
}
