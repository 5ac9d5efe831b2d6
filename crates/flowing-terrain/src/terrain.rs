//! Generation entry point and read-only queries over the finished terrain.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::TerrainConfig;
use crate::environment::Environment;
use crate::errors::Result;
use crate::frontier::Frontier;
use crate::generators::{
    HeightStep, accumulate_drainage, plant_seeds, propagate_heights, settle_sea_level,
};
use crate::grid::{Coordinate, Grid, Tile};

/// A finished heightmap with drainage.
///
/// Only produced by a completed generation run, so every tile has a height
/// and every land tile has a drain target.
#[derive(Debug, Clone)]
pub struct Terrain {
    grid: Grid,
    environment: Environment,
}

impl Terrain {
    /// Generates terrain, seeding the RNG from `config.seed` or from entropy.
    pub fn generate(config: &TerrainConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate_with_rng(config, &mut rng)
    }

    /// Generates terrain drawing all randomness from `rng`.
    ///
    /// Runs seeding, height propagation, sea-level derivation and drainage
    /// in that order. The config is validated before any work is done.
    pub fn generate_with_rng(config: &TerrainConfig, rng: &mut impl Rng) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.grid_size);
        let mut environment = Environment::new();
        let mut frontier = Frontier::new();

        plant_seeds(&mut grid, &mut frontier, config, rng);

        let step = HeightStep::from_config(config);
        propagate_heights(&mut grid, &mut environment, &mut frontier, &step, rng);
        settle_sea_level(&mut environment, config.sea_level_divisor, rng);

        accumulate_drainage(&mut grid, &mut environment, &mut frontier)?;

        let terrain = Self { grid, environment };
        info!(
            grid_size = config.grid_size,
            highest_point = terrain.environment.highest_point(),
            sea_level = terrain.environment.sea_level(),
            dampest = terrain.environment.dampest(),
            land_tiles = terrain.land_tile_count(),
            "Terrain generated"
        );
        Ok(terrain)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Tiles per side.
    pub fn size(&self) -> u32 {
        self.grid.size()
    }

    pub fn into_parts(self) -> (Grid, Environment) {
        (self.grid, self.environment)
    }

    /// The tile at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn tile_at(&self, x: u32, y: u32) -> &Tile {
        let pos = Coordinate::new(x, y);
        match self.grid.get(pos) {
            Some(tile) => tile,
            None => unreachable!("generated terrain is missing tile ({x}, {y})"),
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid.tiles()
    }

    pub fn is_land(&self, x: u32, y: u32) -> bool {
        self.tile_at(x, y).is_land(self.environment.sea_level())
    }

    pub fn land_tile_count(&self) -> usize {
        let sea_level = self.environment.sea_level();
        self.tiles().filter(|t| t.is_land(sea_level)).count()
    }

    /// Follows `drains_to` from `(x, y)` downhill.
    ///
    /// Yields the starting tile first and stops after the first tile without
    /// a drain target, which is always at or below sea level.
    pub fn drainage_path(&self, x: u32, y: u32) -> DrainagePath<'_> {
        DrainagePath {
            terrain: self,
            next: Some(self.tile_at(x, y).pos()),
        }
    }

    /// Land tiles with at least `min_dampness` accumulated runoff.
    pub fn rivers(&self, min_dampness: u64) -> impl Iterator<Item = &Tile> {
        let sea_level = self.environment.sea_level();
        self.tiles()
            .filter(move |t| t.is_land(sea_level) && t.dampness() >= min_dampness)
    }
}

/// Iterator returned by [`Terrain::drainage_path`].
#[derive(Debug, Clone)]
pub struct DrainagePath<'a> {
    terrain: &'a Terrain,
    next: Option<Coordinate>,
}

impl<'a> Iterator for DrainagePath<'a> {
    type Item = &'a Tile;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.next?;
        let tile = self.terrain.tile_at(pos.x, pos.y);
        self.next = tile.drains_to();
        Some(tile)
    }
}

/// Generates a terrain with default parameters apart from the grid size,
/// jitter bound and seed.
pub fn generate(
    grid_size: u32,
    jitter_bound: f64,
    seed: Option<u64>,
) -> Result<(Grid, Environment)> {
    let mut config = TerrainConfig::new(grid_size);
    config.jitter_bound = jitter_bound;
    config.jitter_min = config.jitter_min.min(jitter_bound);
    config.seed = seed;
    Terrain::generate(&config).map(Terrain::into_parts)
}
