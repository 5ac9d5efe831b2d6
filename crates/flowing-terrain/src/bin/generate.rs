//! Generates one terrain and logs a summary.
//!
//! Run with:
//! ```
//! TERRAIN_SEED=42 TERRAIN_OUTPUT=terrain.json cargo run -p flowing-terrain --bin generate
//! ```
//!
//! Environment:
//! - `TERRAIN_CONFIG`: JSON config file; defaults are used when unset
//! - `TERRAIN_GRID_SIZE`, `TERRAIN_SEED`: override the config
//! - `TERRAIN_OUTPUT`: write a JSON snapshot here

use std::env;

use anyhow::Context;
use flowing_terrain::config::TerrainConfig;
use flowing_terrain::terrain::Terrain;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match env::var("TERRAIN_CONFIG") {
        Ok(path) => TerrainConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        Err(_) => TerrainConfig::default(),
    };

    if let Ok(size) = env::var("TERRAIN_GRID_SIZE") {
        config.grid_size = size
            .parse()
            .with_context(|| format!("TERRAIN_GRID_SIZE is not a number: {size}"))?;
    }
    if let Ok(seed) = env::var("TERRAIN_SEED") {
        config.seed = Some(
            seed.parse()
                .with_context(|| format!("TERRAIN_SEED is not a number: {seed}"))?,
        );
    }

    let terrain = Terrain::generate(&config)?;
    let environment = terrain.environment();

    // Summary output
    tracing::info!("Generation completed!");
    tracing::info!("  Grid: {0}x{0}", terrain.size());
    tracing::info!("  Highest point: {:.2}", environment.highest_point());
    tracing::info!("  Sea level: {:.2}", environment.sea_level());
    tracing::info!("  Land tiles: {}", terrain.land_tile_count());
    tracing::info!("  Dampest: {}", environment.dampest());

    if let Ok(path) = env::var("TERRAIN_OUTPUT") {
        terrain
            .snapshot()
            .write_json(&path)
            .with_context(|| format!("Failed to write snapshot to {path}"))?;
        tracing::info!("Snapshot written to {}", path);
    }

    Ok(())
}
