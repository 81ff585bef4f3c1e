use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use connect_four::arena::run_match;
use connect_four::config::AppConfig;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Opponent {
    Random,
    Minimax,
}

/// Pit the minimax engine against an opponent, headless.
#[derive(Parser)]
#[command(name = "arena", about = "Play headless Connect Four matches")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of games; colors swap every game
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Override the engine's search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Opponent to play against
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Search depth of a minimax opponent
    #[arg(long, default_value_t = 2)]
    opponent_depth: usize,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.ai.depth = depth;
        config.validate().context("validating --depth")?;
    }

    let mut engine = MinimaxAgent::new(config.ai.depth);
    let mut opponent: Box<dyn Agent> = match (cli.opponent, cli.seed) {
        (Opponent::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
        (Opponent::Random, None) => Box::new(RandomAgent::new()),
        (Opponent::Minimax, _) => Box::new(MinimaxAgent::new(cli.opponent_depth)),
    };

    info!(
        games = cli.games,
        depth = config.ai.depth,
        opponent = opponent.name(),
        rows = config.board.rows,
        columns = config.board.columns,
        "starting match"
    );

    let stats = run_match(
        &mut engine,
        opponent.as_mut(),
        cli.games,
        config.board.rows,
        config.board.columns,
    )
    .context("playing match")?;

    println!(
        "Minimax (depth {}) vs {}: {} wins, {} losses, {} draws ({:.0}% win rate, {:.1} moves/game)",
        config.ai.depth,
        opponent.name(),
        stats.a_wins,
        stats.b_wins,
        stats.draws,
        stats.a_win_rate() * 100.0,
        stats.average_length(),
    );
    Ok(())
}
