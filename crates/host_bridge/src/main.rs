use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use host_bridge::{BotChoice, Session};
use minimax_engine::MAX_DEPTH;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Plays checkers plies for a host over stdin/stdout.
#[derive(Parser, Debug)]
#[command(name = "host_bridge", version)]
struct Args {
    /// Bot answering `play` commands.
    #[arg(long, value_enum, default_value_t = BotChoice::Minimax)]
    bot: BotChoice,

    /// Minimax search depth.
    #[arg(long, default_value_t = MAX_DEPTH, value_parser = clap::value_parser!(u8).range(1..=8))]
    depth: u8,

    /// Seed for the random bot; entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // stdout carries protocol responses, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut session = Session::new(args.bot, args.depth, args.seed);
    info!(bot = session.bot_name(), depth = session.depth(), "host bridge ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command from stdin")?;
        let Some(responses) = session.handle_line(&line) else {
            break;
        };
        for response in responses {
            writeln!(stdout, "{response}").context("failed to write response")?;
        }
        stdout.flush().context("failed to flush stdout")?;
    }

    info!("host bridge exiting");
    Ok(())
}
