//! Match results storage and reporting

use std::path::Path;

use anyhow::{Context, Result};
use checkers_core::{GameState, Side};
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;

/// Result of a single game, from one bot's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEnding {
    /// `loser` had no legal move at the start of its turn.
    NoMoves { loser: Side },
    /// The ply cap was reached with both sides still able to move.
    PlyCap,
}

impl GameEnding {
    /// Result for White.
    pub fn white_result(self) -> GameResult {
        match self {
            GameEnding::NoMoves { loser: Side::White } => GameResult::Loss,
            GameEnding::NoMoves { loser: Side::Black } => GameResult::Win,
            GameEnding::PlyCap => GameResult::Draw,
        }
    }
}

/// One finished game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub game: u32,
    /// Whether the first bot of the match had White
    pub first_is_white: bool,
    /// Result for the first bot
    pub result: GameResult,
    pub ending: GameEnding,
    pub plies: u32,
    pub final_state: GameState,
}

/// Result of a match (multiple games), from the first bot's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameRecord) {
        match game.result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first bot's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// A match as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub first: String,
    pub second: String,
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(first: &str, second: &str, config: MatchConfig, result: MatchResult) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            config,
            result,
        }
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize results")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write results to {}", path.display()))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read results from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse results in {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let result = &self.result;
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.first, self.second));
        report.push_str(&format!(
            "Config: {} games, ply cap {}, {} random opening plies, seed {}\n\n",
            self.config.num_games,
            self.config.max_plies,
            self.config.random_opening_plies,
            self.config.seed
        ));

        report.push_str(&format!(
            "{:<6} {:<6} {:<8} {:>6}  {}\n",
            "Game", "Color", "Result", "Plies", "Ending"
        ));
        report.push_str(&"-".repeat(48));
        report.push('\n');
        for game in &result.games {
            let color = if game.first_is_white { "W" } else { "B" };
            let outcome = match game.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            let ending = match game.ending {
                GameEnding::NoMoves { loser } => format!("{loser} has no move"),
                GameEnding::PlyCap => "ply cap".to_string(),
            };
            report.push_str(&format!(
                "{:<6} {:<6} {:<8} {:>6}  {}\n",
                game.game + 1,
                color,
                outcome,
                game.plies,
                ending
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.first,
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
