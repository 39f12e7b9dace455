//! Tournament CLI
//!
//! Run self-play matches between checkers bots.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use checkers_core::Bot;
use clap::Parser;
use minimax_engine::{MinMaxBot, MAX_DEPTH};
use random_engine::RandomBot;
use tournament::{MatchConfig, MatchReport, MatchRunner};
use tracing_subscriber::EnvFilter;

/// Plays a match between two bots.
///
/// Bots: `minimax[:depth]` (default depth 3) or `random`.
#[derive(Parser, Debug)]
#[command(name = "tournament", version)]
struct Args {
    /// First bot; results are reported from its side
    first: String,
    /// Second bot
    second: String,

    /// TOML file with match settings
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short = 'g')]
    games: Option<u32>,
    #[arg(long)]
    max_plies: Option<u32>,
    /// Random turns before the bots take over
    #[arg(long)]
    opening_plies: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Keep the same colors every game
    #[arg(long)]
    fixed_colors: bool,
    /// Write results as JSON
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Args {
    fn match_config(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)?,
            None => MatchConfig::default(),
        };
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(opening_plies) = self.opening_plies {
            config.random_opening_plies = opening_plies;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.fixed_colors {
            config.alternate_colors = false;
        }
        if self.quiet {
            config.verbose = false;
        }
        Ok(config)
    }
}

fn create_bot(spec: &str, seed: u64) -> Result<Box<dyn Bot>> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };
    match (kind.to_lowercase().as_str(), arg) {
        ("minimax" | "minmax", None) => Ok(Box::new(MinMaxBot::with_depth(MAX_DEPTH))),
        ("minimax" | "minmax", Some(depth)) => {
            let depth: u8 = depth
                .parse()
                .with_context(|| format!("invalid depth in bot spec {spec:?}"))?;
            Ok(Box::new(MinMaxBot::with_depth(depth)))
        }
        ("random", None) => Ok(Box::new(RandomBot::seeded(seed))),
        _ => bail!("unknown bot {spec:?}, expected minimax[:depth] or random"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.match_config()?;

    let default_level = if config.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Distinct streams so two random bots do not mirror each other.
    let mut first = create_bot(&args.first, config.seed.wrapping_mul(2).wrapping_add(1))?;
    let mut second = create_bot(&args.second, config.seed.wrapping_mul(2).wrapping_add(2))?;

    println!("=== Match: {} vs {} ===", first.name(), second.name());
    println!(
        "Games: {}, ply cap: {}, random opening plies: {}",
        config.num_games, config.max_plies, config.random_opening_plies
    );

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(first.as_mut(), second.as_mut());

    let report = MatchReport::new(&args.first, &args.second, config, result);
    println!();
    print!("{}", report.generate_report());

    if let Some(path) = &args.output {
        report.save(path)?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}
