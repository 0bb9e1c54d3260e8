//! Cache Builder CLI
//!
//! Stats API JSON exports → MsgPack+LZ4 선수 캐시 빌더

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "cache_builder")]
#[command(about = "Build the HoopMind player cache from stats API exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build player cache from JSON exports
    Players {
        /// players.json (all players with is_active flags)
        #[arg(long)]
        players: PathBuf,

        /// player_details.json (CommonPlayerInfo rows keyed by id)
        #[arg(long)]
        details: PathBuf,

        /// player_stats.json (career totals keyed by id)
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Output MsgPack+LZ4 file path
        #[arg(long)]
        out: PathBuf,

        /// Schema version (e.g., "v1")
        #[arg(long, default_value = "v1")]
        schema_version: String,

        /// Verify cache after building
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Verify a cache file against a checksum
    Verify {
        /// Cache file path
        #[arg(long)]
        cache: PathBuf,

        /// Expected SHA256 checksum (hex)
        #[arg(long)]
        checksum: String,
    },
}

#[cfg(feature = "cli")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("HOOPMIND_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    // Also installs the log → tracing bridge for library logs
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Players { players, details, stats, out, schema_version, verify, metadata } => {
            println!("🔨 Building player cache...");
            println!("   Players: {}", players.display());
            println!("   Details: {}", details.display());
            if let Some(stats) = &stats {
                println!("   Stats:   {}", stats.display());
            }
            println!("   Output:  {}", out.display());
            println!("   Schema:  {}", schema_version);

            let paths = cache_builder::ExportPaths { players, details, stats };
            let meta = cache_builder::build_player_cache(&paths, &out, &schema_version)?;

            print_metadata(&meta);

            if verify {
                verify_cache_integrity(&out, &meta.checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Verify { cache, checksum } => {
            verify_cache_integrity(&cache, &checksum)?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &cache_builder::CacheMetadata) {
    println!("\n✅ Cache built successfully!");
    println!("   Players:         {}", meta.player_count);
    println!(
        "   Original size:   {} bytes ({})",
        meta.original_size,
        cache_builder::human_bytes(meta.original_size)
    );
    println!(
        "   Compressed size: {} bytes ({})",
        meta.compressed_size,
        cache_builder::human_bytes(meta.compressed_size)
    );
    println!("   Compression:     {:.1}%", meta.compression_ratio * 100.0);
    println!("   Checksum:        {}", meta.checksum);
    println!("   Created:         {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_cache_integrity(cache_path: &Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying cache integrity...");
    let is_valid = cache_builder::verify_cache(cache_path, checksum)?;

    if is_valid {
        println!("✅ Cache verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Cache verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &Path, meta: &cache_builder::CacheMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    std::fs::write(path, metadata_json)?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("cache_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
