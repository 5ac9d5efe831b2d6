//! Configuration types for terrain generation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TerrainError};

/// How the initial height-0 tiles are chosen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Every edge tile, plus a random sample of interior tiles.
    #[default]
    Border,
    /// Seabed flooded inward from the edges.
    ///
    /// Each neighbour of a seabed tile joins the seabed with probability
    /// `threshold`, so the seabed is always connected to the map edge.
    /// The random interior sample is added on top.
    Seabed { threshold: f64 },
    /// Exactly these coordinates and nothing else.
    Points(Vec<(u32, u32)>),
}

/// Perlin noise shaping applied on top of the random jitter.
///
/// Every term this adds is non-negative, so heights still strictly
/// increase along each propagation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseShaping {
    /// Spatial frequency, in noise units per tile.
    pub frequency: f64,
    /// Weight of the raw noise value at the tile being expanded.
    pub height_weight: f64,
    /// Exponent applied to the weighted noise value.
    pub height_polarize: f64,
    /// Weight of the noise gradient between the two tiles.
    pub gradient_weight: f64,
    /// Exponent applied to the weighted gradient.
    pub gradient_polarize: f64,
    /// Seed for the Perlin field.
    pub seed: u32,
}

impl Default for NoiseShaping {
    fn default() -> Self {
        Self {
            frequency: 0.05,
            height_weight: 1.0,
            height_polarize: 2.0,
            gradient_weight: 1.0,
            gradient_polarize: 1.0,
            seed: 0,
        }
    }
}

/// Parameters for a single generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Tiles per side of the square grid.
    pub grid_size: u32,

    /// Smallest per-step height increment.
    pub jitter_min: f64,

    /// Largest per-step height increment.
    pub jitter_bound: f64,

    /// Inclusive range for the number of random interior seeds.
    pub interior_seed_count: (u32, u32),

    /// Half-open range the sea-level divisor is drawn from.
    pub sea_level_divisor: (f64, f64),

    pub seeding: SeedStrategy,

    pub noise: Option<NoiseShaping>,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            jitter_min: 1.0,
            jitter_bound: 3.0,
            interior_seed_count: (0, 30),
            sea_level_divisor: (1.5, 4.0),
            seeding: SeedStrategy::Border,
            noise: None,
            seed: None,
        }
    }
}

impl TerrainConfig {
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Sets the grid size.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Sets the jitter range.
    pub fn with_jitter(mut self, min: f64, bound: f64) -> Self {
        self.jitter_min = min;
        self.jitter_bound = bound;
        self
    }

    /// Sets the interior seed count range.
    pub fn with_interior_seeds(mut self, min: u32, max: u32) -> Self {
        self.interior_seed_count = (min, max);
        self
    }

    /// Sets the sea-level divisor range.
    pub fn with_sea_level_divisor(mut self, low: f64, high: f64) -> Self {
        self.sea_level_divisor = (low, high);
        self
    }

    /// Sets the seeding strategy.
    pub fn with_seeding(mut self, seeding: SeedStrategy) -> Self {
        self.seeding = seeding;
        self
    }

    /// Enables noise shaping.
    pub fn with_noise(mut self, noise: NoiseShaping) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks every parameter before any generation work happens.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(invalid("grid_size must be greater than 0"));
        }
        if !self.jitter_min.is_finite() || !self.jitter_bound.is_finite() {
            return Err(invalid("jitter range must be finite"));
        }
        if self.jitter_min <= 0.0 {
            return Err(invalid(format!(
                "jitter_min must be greater than 0, got {}",
                self.jitter_min
            )));
        }
        if self.jitter_bound < self.jitter_min {
            return Err(invalid(format!(
                "jitter_bound ({}) must not be below jitter_min ({})",
                self.jitter_bound, self.jitter_min
            )));
        }

        let (min_seeds, max_seeds) = self.interior_seed_count;
        if min_seeds > max_seeds {
            return Err(invalid(format!(
                "interior_seed_count range is inverted: ({min_seeds}, {max_seeds})"
            )));
        }

        let (low, high) = self.sea_level_divisor;
        if !(low.is_finite() && high.is_finite()) || low <= 0.0 || low >= high {
            return Err(invalid(format!(
                "sea_level_divisor must satisfy 0 < low < high, got ({low}, {high})"
            )));
        }

        match &self.seeding {
            SeedStrategy::Border => {}
            SeedStrategy::Seabed { threshold } => {
                if !(0.0..=1.0).contains(threshold) {
                    return Err(invalid(format!(
                        "seabed threshold must be within [0, 1], got {threshold}"
                    )));
                }
            }
            SeedStrategy::Points(points) => {
                if points.is_empty() {
                    return Err(invalid("seed points must not be empty"));
                }
                if let Some((x, y)) = points
                    .iter()
                    .find(|(x, y)| *x >= self.grid_size || *y >= self.grid_size)
                {
                    return Err(invalid(format!(
                        "seed point ({x}, {y}) is outside a {0}x{0} grid",
                        self.grid_size
                    )));
                }
            }
        }

        if let Some(noise) = &self.noise {
            let weights = [
                noise.frequency,
                noise.height_weight,
                noise.height_polarize,
                noise.gradient_weight,
                noise.gradient_polarize,
            ];
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(invalid("noise parameters must be finite and non-negative"));
            }
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> TerrainError {
    TerrainError::InvalidConfig(msg.into())
}
