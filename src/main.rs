//! efficiency-engine - EHP/EHB computation service
//!
//! # Usage
//!
//! ```bash
//! # Serve the HTTP API (default command)
//! efficiency-engine serve --addr 0.0.0.0:5000
//!
//! # One-shot computation for a snapshot file
//! efficiency-engine compute --type ironman --snapshot player.json
//!
//! # Dump a rate table
//! efficiency-engine rates --variant f2p --metric ehb
//!
//! # Check rate tables before deploying them
//! efficiency-engine validate --dir ./rates
//! ```
//!
//! # Environment Variables
//!
//! - `EFFICIENCY_CONFIG`: Path to the service config (default: ./efficiency.toml)
//! - `EFFICIENCY_CORS_ORIGINS`: Comma-separated origins allowed to call the API
//! - `RUST_LOG`: Logging filter (overrides `logging.level`)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use efficiency_engine::api::{self, handlers::ComputeResponse};
use efficiency_engine::config::defaults::DEFAULT_LOG_LEVEL;
use efficiency_engine::config::{EngineConfig, LoggingConfig};
use efficiency_engine::{AlgorithmVariant, PlayerBuild, PlayerType, Snapshot, VariantCache};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "efficiency-engine")]
#[command(about = "Efficient hours played / bossed from skill and boss progress")]
#[command(version)]
struct CliArgs {
    /// Path to the service config, bypassing the EFFICIENCY_CONFIG / ./efficiency.toml search
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP API (default)
    Serve {
        /// Override the server address (default: config `server.addr`)
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Compute every metric for a snapshot file and print it as JSON
    Compute {
        /// Player account type
        #[arg(long = "type", default_value = "regular")]
        player_type: PlayerType,
        /// Player build
        #[arg(long, default_value = "main")]
        build: PlayerBuild,
        /// JSON file with `experience` and `killcounts` maps
        #[arg(long, value_name = "FILE")]
        snapshot: PathBuf,
    },

    /// Print a variant's rate table as JSON
    Rates {
        #[arg(long, default_value = "main")]
        variant: AlgorithmVariant,
        #[arg(long, value_enum, default_value_t = RateMetric::Ehp)]
        metric: RateMetric,
    },

    /// Load and validate every rate table, then print the variant baselines
    Validate {
        /// Rates directory to check (default: config `rates.dir`, else embedded)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum RateMetric {
    /// Skill training methods and bonuses
    Ehp,
    /// Boss kill rates
    Ehb,
}

// ============================================================================
// Logging
// ============================================================================

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

/// Load the config with a temporary subscriber so its warnings are not lost
/// before the configured one is installed.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::with_default(bootstrap, || EngineConfig::load_or_search(path))
        .context("Failed to load engine config")
}

// ============================================================================
// Commands
// ============================================================================

async fn run_serve(config: &EngineConfig, addr: Option<String>) -> Result<()> {
    let server_addr = addr.unwrap_or_else(|| config.server.addr.clone());
    let cache = VariantCache::build(config.rates.dir.as_deref())
        .context("Failed to build efficiency variants")?;
    let app = api::create_app(Arc::new(cache));

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!(addr = %server_addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received Ctrl+C, shutting down");
        })
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn run_compute(
    config: &EngineConfig,
    player_type: PlayerType,
    build: PlayerBuild,
    snapshot_path: &Path,
) -> Result<()> {
    let text = std::fs::read_to_string(snapshot_path)
        .with_context(|| format!("Failed to read snapshot {}", snapshot_path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse snapshot {}", snapshot_path.display()))?;

    let cache = VariantCache::build(config.rates.dir.as_deref())
        .context("Failed to build efficiency variants")?;
    let algo = cache.for_player(player_type, build);

    let response = ComputeResponse {
        variant: algo.variant(),
        map: algo.efficiency_map(&snapshot.experience, &snapshot.killcounts),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run_rates(config: &EngineConfig, variant: AlgorithmVariant, metric: RateMetric) -> Result<()> {
    let cache = VariantCache::build(config.rates.dir.as_deref())
        .context("Failed to build efficiency variants")?;
    let algo = cache.get(variant);

    let json = match metric {
        RateMetric::Ehp => serde_json::to_string_pretty(algo.skill_rates())?,
        RateMetric::Ehb => serde_json::to_string_pretty(algo.boss_rates())?,
    };
    println!("{json}");
    Ok(())
}

fn run_validate(config: &EngineConfig, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.or_else(|| config.rates.dir.clone());
    let cache = VariantCache::build(dir.as_deref()).context("Rate table validation failed")?;

    for algo in cache.iter() {
        println!(
            "{:<9} maximum_ehp={:>12.5} maxed_ehp={:>10.5} skills={} bosses={}",
            algo.variant().as_str(),
            algo.maximum_ehp(),
            algo.maxed_ehp(),
            algo.skill_rates().len(),
            algo.boss_rates().len(),
        );
    }
    println!("All rate tables valid");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = load_config(args.config.as_deref())?;
    init_tracing(&config.logging);

    match args.command.unwrap_or(SubCommand::Serve { addr: None }) {
        SubCommand::Serve { addr } => run_serve(&config, addr).await,
        SubCommand::Compute { player_type, build, snapshot } => {
            run_compute(&config, player_type, build, &snapshot)
        }
        SubCommand::Rates { variant, metric } => run_rates(&config, variant, metric),
        SubCommand::Validate { dir } => run_validate(&config, dir),
    }
}
