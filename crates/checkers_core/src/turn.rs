//! Drives one bot through a whole turn, capture chain included.
//!
//! The engine plays a single ply per call and never forces a chain to
//! continue. Hosts re-invoke it while the same side remains on move, which
//! is what [`play_turn`] does.

use tracing::debug;

use crate::{state::GameState, Bot};

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEnd {
    /// The turn passed to the opponent after a simple step.
    Completed,
    /// A capture chain had no continuation, or hit the ply cap, and the turn
    /// was handed over.
    ChainEnded,
    /// The side to move had no legal move at the start of its turn.
    NoMoves,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub plies: u32,
    pub end: TurnEnd,
}

/// Asks `bot` for moves until the side to move changes, at most `max_plies`
/// times. `state` is updated in place.
pub fn play_turn(bot: &mut dyn Bot, state: &mut GameState, max_plies: u32) -> TurnOutcome {
    let max_plies = max_plies.max(1);
    let mover = state.side_to_move;
    let mut plies = 0;

    while plies < max_plies {
        if !bot.play_in_place(state) {
            if plies == 0 {
                debug!(bot = bot.name(), side = %mover, "no legal move");
                return TurnOutcome {
                    plies,
                    end: TurnEnd::NoMoves,
                };
            }
            break;
        }
        plies += 1;
        if state.side_to_move != mover {
            return TurnOutcome {
                plies,
                end: TurnEnd::Completed,
            };
        }
    }

    debug!(bot = bot.name(), side = %mover, plies, "capture chain ended");
    *state = state.pass_turn();
    TurnOutcome {
        plies,
        end: TurnEnd::ChainEnded,
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod turn_tests;
