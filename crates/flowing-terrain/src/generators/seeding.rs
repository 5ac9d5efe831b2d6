//! Initial height-0 tiles.
//!
//! Every strategy goes through [`plant`], which uses the tile's seed marker
//! so a coordinate picked twice (say, a border tile that is also drawn as a
//! random interior seed) enters the frontier only once.

use rand::Rng;
use tracing::debug;

use crate::config::{SeedStrategy, TerrainConfig};
use crate::frontier::Frontier;
use crate::grid::{Coordinate, Grid, Tile};

/// Plants the seeds for `config` and returns how many distinct tiles were seeded.
pub fn plant_seeds(
    grid: &mut Grid,
    frontier: &mut Frontier,
    config: &TerrainConfig,
    rng: &mut impl Rng,
) -> usize {
    let planted = match &config.seeding {
        SeedStrategy::Border => {
            plant_border(grid, frontier) + plant_interior(grid, frontier, config, rng)
        }
        SeedStrategy::Seabed { threshold } => {
            plant_seabed(grid, frontier, *threshold, rng)
                + plant_interior(grid, frontier, config, rng)
        }
        SeedStrategy::Points(points) => points
            .iter()
            .filter(|&&p| plant(grid, frontier, p.into()))
            .count(),
    };

    debug!(planted, frontier = frontier.len(), "Seeds planted");
    planted
}

fn plant(grid: &mut Grid, frontier: &mut Frontier, pos: Coordinate) -> bool {
    if !grid.get_or_create(pos).mark_seed() {
        return false;
    }
    frontier.insert(0.0, pos);
    true
}

/// Seeds every tile on the four edges.
fn plant_border(grid: &mut Grid, frontier: &mut Frontier) -> usize {
    let last = grid.size() - 1;
    let mut planted = 0;
    for i in 0..grid.size() {
        for pos in [
            Coordinate::new(i, 0),
            Coordinate::new(i, last),
            Coordinate::new(0, i),
            Coordinate::new(last, i),
        ] {
            if plant(grid, frontier, pos) {
                planted += 1;
            }
        }
    }
    planted
}

/// Seeds a random number of random interior tiles, creating inland lakes.
fn plant_interior(
    grid: &mut Grid,
    frontier: &mut Frontier,
    config: &TerrainConfig,
    rng: &mut impl Rng,
) -> usize {
    let (min, max) = config.interior_seed_count;
    let count = rng.gen_range(min..=max);
    let size = grid.size();
    if size <= 2 {
        // No interior.
        return 0;
    }

    let mut planted = 0;
    for _ in 0..count {
        let pos = Coordinate::new(rng.gen_range(1..size - 1), rng.gen_range(1..size - 1));
        if plant(grid, frontier, pos) {
            planted += 1;
        }
    }
    planted
}

/// Floods seabed inward from the edges.
///
/// The open set is keyed by squared distance from the map centre of the edge
/// tile each flood started from, and expanded furthest-first. Each neighbour
/// joins with probability `threshold`.
fn plant_seabed(
    grid: &mut Grid,
    frontier: &mut Frontier,
    threshold: f64,
    rng: &mut impl Rng,
) -> usize {
    let size = grid.size();
    let last = size - 1;
    let half = f64::from(size) / 2.0;
    let mut open = Frontier::new();

    for i in 0..size {
        let offset = f64::from(i) - half;
        let dist = offset * offset + half * half;
        for pos in [
            Coordinate::new(i, 0),
            Coordinate::new(i, last),
            Coordinate::new(0, i),
            Coordinate::new(last, i),
        ] {
            open.insert(dist, pos);
        }
    }

    let mut planted = 0;
    while let Some((dist, pos)) = open.pop_highest() {
        if !plant(grid, frontier, pos) {
            continue;
        }
        planted += 1;

        for neighbour in grid.neighbours(pos) {
            let seeded = grid.get(neighbour).is_some_and(Tile::is_seed);
            if !seeded && rng.r#gen::<f64>() < threshold {
                open.insert(dist, neighbour);
            }
        }
    }
    planted
}
