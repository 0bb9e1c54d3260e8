//! HoopMind terminal front-end
//!
//! Plays the guessing game against a prebuilt player cache.

mod console;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hoop_core::streak::DEFAULT_STREAK_FILE;
use hoop_core::{GameConfig, StreakStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::console::Console;

#[derive(Parser)]
#[command(name = "hoopmind")]
#[command(about = "Guess the NBA player in six tries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (one guess per line)
    Play {
        /// Player cache built by cache_builder
        #[arg(long)]
        cache: PathBuf,

        /// Game config (.yaml/.yml/.json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for reproducible target selection
        #[arg(long)]
        seed: Option<u64>,

        /// Streak file path
        #[arg(long, default_value = DEFAULT_STREAK_FILE)]
        streak_file: PathBuf,

        /// Do not read or write the streak file
        #[arg(long, default_value = "false")]
        no_streak: bool,
    },

    /// List player names matching a query
    Suggest {
        #[arg(long)]
        cache: PathBuf,

        query: String,

        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show today's win streak
    Streak {
        #[arg(long, default_value = DEFAULT_STREAK_FILE)]
        streak_file: PathBuf,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("HOOPMIND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_path(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Play { cache, config, seed, streak_file, no_streak } => {
            let config = load_config(config.as_deref())?;
            let index = cache_builder::load_player_cache(&cache)?;
            tracing::info!("Loaded {} players from {}", index.len(), cache.display());

            let rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };

            let mut console = Console::new(&index, config, rng, today);
            if !no_streak {
                console = console.with_streak(StreakStore::load(&streak_file, today));
            }

            println!("Type a player name to guess. Commands: :suggest <name>, :reset, :streak, :quit");
            let summary = console.run(io::stdin().lock(), io::stdout().lock())?;
            tracing::info!(
                "Session over: {} game(s), {} win(s), {} loss(es)",
                summary.games,
                summary.wins,
                summary.losses
            );
        }

        Commands::Suggest { cache, query, limit } => {
            let roster = cache_builder::load_player_cache(&cache)?.roster();
            for name in roster.suggestions(&query, limit) {
                println!("{}", name);
            }
        }

        Commands::Streak { streak_file } => {
            let store = StreakStore::load(&streak_file, today);
            println!("Streak: {}", store.streak());
        }
    }

    Ok(())
}
