//! Serializable snapshot of a finished terrain.
//!
//! This is what renderers consume: the three environment scalars plus a
//! row-major list of per-tile values.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::grid::Coordinate;
use crate::terrain::Terrain;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub x: u32,
    pub y: u32,
    pub height: f64,
    pub dampness: u64,
    pub drains_to: Option<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainSnapshot {
    pub grid_size: u32,
    pub highest_point: f64,
    pub sea_level: f64,
    pub dampest: u64,
    pub tiles: Vec<TileSnapshot>,
}

impl TerrainSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the snapshot as JSON to `path`, replacing any existing file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn tile(&self, x: u32, y: u32) -> Option<&TileSnapshot> {
        if x >= self.grid_size || y >= self.grid_size {
            return None;
        }
        self.tiles
            .get(y as usize * self.grid_size as usize + x as usize)
    }
}

impl Terrain {
    /// Copies the finished terrain into a [`TerrainSnapshot`].
    pub fn snapshot(&self) -> TerrainSnapshot {
        let env = self.environment();
        let tiles = self
            .grid()
            .coordinates()
            .map(|pos| {
                let tile = self.tile_at(pos.x, pos.y);
                TileSnapshot {
                    x: pos.x,
                    y: pos.y,
                    height: tile.height().unwrap_or_default(),
                    dampness: tile.dampness(),
                    drains_to: tile.drains_to(),
                }
            })
            .collect();

        TerrainSnapshot {
            grid_size: self.size(),
            highest_point: env.highest_point(),
            sea_level: env.sea_level(),
            dampest: env.dampest(),
            tiles,
        }
    }
}
