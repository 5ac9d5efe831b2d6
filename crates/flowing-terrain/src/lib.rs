//! Procedural terrain where every land tile drains to the sea.
//!
//! Heights spread outward from a set of height-0 seeds, each step adding a
//! strictly positive jitter, so every tile has a strictly descending path
//! back to a seed. Sea level is then derived from the highest point, and
//! runoff is accumulated from the highest land tile down to trace rivers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flowing_terrain::prelude::*;
//!
//! let config = TerrainConfig::new(128).with_jitter(1.0, 3.0).with_seed(42);
//! let terrain = Terrain::generate(&config)?;
//!
//! let sea_level = terrain.environment().sea_level();
//! for tile in terrain.rivers(50) {
//!     assert!(tile.height().unwrap() > sea_level);
//! }
//! # Ok::<(), flowing_terrain::TerrainError>(())
//! ```

pub mod config;
pub mod environment;
pub mod errors;
pub mod export;
pub mod frontier;
pub mod generators;
pub mod grid;
pub mod terrain;

pub use errors::{Result, TerrainError};
pub use terrain::{Terrain, generate};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{NoiseShaping, SeedStrategy, TerrainConfig};
    pub use crate::environment::Environment;
    pub use crate::errors::{Result, TerrainError};
    pub use crate::export::{TerrainSnapshot, TileSnapshot};
    pub use crate::grid::{Coordinate, Grid, Tile};
    pub use crate::terrain::{DrainagePath, Terrain, generate};
}
