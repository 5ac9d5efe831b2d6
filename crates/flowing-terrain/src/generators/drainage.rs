//! Drainage accumulation.
//!
//! Land tiles are processed highest-first. Each passes its dampness to its
//! lowest strictly-lower neighbour and records that neighbour as its drain
//! target. Every contributor to a tile is higher than it, so by the time a
//! tile is popped its dampness is final.

use tracing::{debug, warn};

use crate::environment::Environment;
use crate::errors::{Result, TerrainError};
use crate::frontier::Frontier;
use crate::grid::{Coordinate, Grid};

/// Accumulates dampness across every tile above sea level.
///
/// Any tile still uncreated is created here, so the grid is fully
/// populated afterwards. Fails if a land tile has no lower neighbour, which
/// propagation never produces.
pub fn accumulate_drainage(
    grid: &mut Grid,
    env: &mut Environment,
    frontier: &mut Frontier,
) -> Result<()> {
    frontier.clear();
    let sea_level = env.sea_level();
    for pos in grid.coordinates() {
        if let Some(height) = grid.get_or_create(pos).height().filter(|h| *h > sea_level) {
            frontier.insert(height, pos);
        }
    }
    debug!(land_tiles = frontier.len(), sea_level, "Draining land tiles");

    while let Some((height, pos)) = frontier.pop_highest() {
        let Some(target) = lowest_neighbour(grid, pos, height) else {
            warn!(x = pos.x, y = pos.y, height, "Land tile has no downhill neighbour");
            return Err(TerrainError::NoDownhillNeighbour {
                x: pos.x,
                y: pos.y,
                height,
            });
        };

        let tile = grid.get_or_create(pos);
        tile.set_drains_to(target);
        let dampness = tile.dampness();
        env.observe_dampness(dampness);

        grid.get_or_create(target).add_dampness(dampness);
    }

    debug!(dampest = env.dampest(), "Drainage accumulated");
    Ok(())
}

/// The lowest neighbour strictly below `height`. Ties go to the first in
/// neighbour order.
fn lowest_neighbour(grid: &Grid, pos: Coordinate, height: f64) -> Option<Coordinate> {
    let mut lowest: Option<(f64, Coordinate)> = None;
    for neighbour in grid.neighbours(pos) {
        let Some(h) = grid.height(neighbour) else {
            continue;
        };
        if h >= height {
            continue;
        }
        match lowest {
            Some((lowest_h, _)) if lowest_h <= h => {}
            _ => lowest = Some((h, neighbour)),
        }
    }
    lowest.map(|(_, pos)| pos)
}
