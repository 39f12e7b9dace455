//! Match runner for playing games between bots

use checkers_core::{play_turn, Bot, GameState, Side, TurnEnd};
use random_engine::RandomBot;
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::results::{GameEnding, GameRecord, MatchResult};

/// Runs matches between two bots
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two bots
    ///
    /// Returns the result from `first`'s perspective
    pub fn run_match(&self, first: &mut dyn Bot, second: &mut dyn Bot) -> MatchResult {
        let mut result = MatchResult::new();

        for game in 0..self.config.num_games {
            let first_is_white = !self.config.alternate_colors || game % 2 == 0;

            let (ending, plies, final_state) = if first_is_white {
                self.play_game(game, first, second)
            } else {
                self.play_game(game, second, first)
            };

            let white_result = ending.white_result();
            let record = GameRecord {
                game,
                first_is_white,
                result: if first_is_white {
                    white_result
                } else {
                    white_result.flipped()
                },
                ending,
                plies,
                final_state,
            };
            debug!(?record, "game finished");
            result.record(record);

            if self.config.verbose {
                info!(
                    game = game + 1,
                    of = self.config.num_games,
                    color = if first_is_white { "W" } else { "B" },
                    ?ending,
                    plies,
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game complete"
                );
            }
        }

        result
    }

    /// Plays one game; the outcome is read from `ending`.
    pub fn play_game<'a>(
        &self,
        game: u32,
        white: &'a mut dyn Bot,
        black: &'a mut dyn Bot,
    ) -> (GameEnding, u32, GameState) {
        let mut state = GameState::startpos();
        let mut plies = 0;
        white.new_game();
        black.new_game();

        if let Some(ending) = self.play_opening(game, &mut state, &mut plies) {
            return (ending, plies, state);
        }

        while plies < self.config.max_plies {
            let mover = state.side_to_move;
            let bot = match mover {
                Side::White => &mut *white,
                Side::Black => &mut *black,
            };

            let outcome = play_turn(bot, &mut state, self.config.max_plies - plies);
            plies += outcome.plies;
            if outcome.end == TurnEnd::NoMoves {
                return (GameEnding::NoMoves { loser: mover }, plies, state);
            }
        }

        // Ply cap reached
        (GameEnding::PlyCap, plies, state)
    }

    /// Plays the configured number of random turns from the opening. Each
    /// game gets its own seed so games differ but the match is repeatable.
    fn play_opening(&self, game: u32, state: &mut GameState, plies: &mut u32) -> Option<GameEnding> {
        if self.config.random_opening_plies == 0 {
            return None;
        }

        let mut opener = RandomBot::seeded(self.config.seed.wrapping_add(u64::from(game)));
        for _ in 0..self.config.random_opening_plies {
            if *plies >= self.config.max_plies {
                return Some(GameEnding::PlyCap);
            }
            let mover = state.side_to_move;
            let outcome = play_turn(&mut opener, state, self.config.max_plies - *plies);
            *plies += outcome.plies;
            if outcome.end == TurnEnd::NoMoves {
                return Some(GameEnding::NoMoves { loser: mover });
            }
        }
        debug!(game, %state, "random opening played");
        None
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    first: &mut dyn Bot,
    second: &mut dyn Bot,
    num_games: u32,
    max_plies: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        max_plies,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(first, second)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
