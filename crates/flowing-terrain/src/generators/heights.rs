//! Height propagation outward from the seeds.
//!
//! The frontier is drained lowest-first. Each unvisited neighbour of the
//! popped tile gets the popped height plus a strictly positive increment,
//! so walking from any tile back along the tiles that heightened it is a
//! strictly descending path to a seed.

use std::f64::consts::SQRT_2;

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::debug;

use crate::config::{NoiseShaping, TerrainConfig};
use crate::environment::{Environment, sea_level_for};
use crate::frontier::Frontier;
use crate::generators::noise_field::NoiseField;
use crate::grid::{Coordinate, Grid};

/// Computes the height increment for one propagation step.
#[derive(Debug, Clone)]
pub struct HeightStep {
    jitter: Uniform<f64>,
    shaping: Option<(NoiseShaping, NoiseField)>,
}

impl HeightStep {
    /// Uniform jitter in `[min, bound]` with no noise shaping.
    ///
    /// `min` must be positive and no larger than `bound`.
    pub fn uniform(min: f64, bound: f64) -> Self {
        Self {
            jitter: Uniform::new_inclusive(min, bound),
            shaping: None,
        }
    }

    /// Builds the step for a validated config.
    pub fn from_config(config: &TerrainConfig) -> Self {
        let mut step = Self::uniform(config.jitter_min, config.jitter_bound);
        step.shaping = config
            .noise
            .map(|shaping| (shaping, NoiseField::new(config.grid_size, &shaping)));
        step
    }

    /// Increment for a step from `from` to its neighbour `to`. Always positive.
    pub fn increment(&self, from: Coordinate, to: Coordinate, rng: &mut impl Rng) -> f64 {
        let mut increment = self.jitter.sample(rng);

        if let Some((shaping, field)) = &self.shaping {
            // Diagonal neighbours are further away.
            let orientation = if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 };
            let here = field.value(from);
            let there = field.value(to);

            let height_diff = shaping.height_weight * here.max(0.0);
            let unevenness = shaping.gradient_weight * 2.0 * (here - there + 0.03).max(0.0);

            increment += orientation * height_diff.powf(shaping.height_polarize);
            increment += orientation * unevenness.powf(shaping.gradient_polarize);
        }

        increment
    }
}

/// Drains `frontier`, giving every reachable tile a height.
///
/// Returns how many tiles were heightened. Tiles that already have a height
/// are skipped, never re-queued.
pub fn propagate_heights(
    grid: &mut Grid,
    env: &mut Environment,
    frontier: &mut Frontier,
    step: &HeightStep,
    rng: &mut impl Rng,
) -> usize {
    let mut assigned = 0;

    while let Some((height, pos)) = frontier.pop_lowest() {
        for neighbour in grid.neighbours(pos) {
            let tile = grid.get_or_create(neighbour);
            if tile.height().is_some() {
                continue;
            }

            let new_height = height + step.increment(pos, neighbour, rng);
            tile.assign_height(new_height);
            frontier.insert(new_height, neighbour);
            env.observe_height(new_height);
            assigned += 1;
        }
    }

    debug!(assigned, highest_point = env.highest_point(), "Heights propagated");
    assigned
}

/// Draws a divisor from `[low, high)` and fixes the sea level from the highest point.
pub fn settle_sea_level(env: &mut Environment, divisor_range: (f64, f64), rng: &mut impl Rng) {
    let (low, high) = divisor_range;
    let divisor = Uniform::new(low, high).sample(rng);
    env.set_sea_level(sea_level_for(env.highest_point(), divisor));
    debug!(divisor, sea_level = env.sea_level(), "Sea level settled");
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn seeded_grid(size: u32, seeds: &[(u32, u32)]) -> (Grid, Frontier) {
        let mut grid = Grid::new(size);
        let mut frontier = Frontier::new();
        for &(x, y) in seeds {
            let pos = Coordinate::new(x, y);
            grid.get_or_create(pos).mark_seed();
            frontier.insert(0.0, pos);
        }
        (grid, frontier)
    }

    #[test]
    fn test_unit_jitter_from_corner() {
        let mut rng = StdRng::seed_from_u64(0);
        let (mut grid, mut frontier) = seeded_grid(3, &[(0, 0)]);
        let mut env = Environment::new();

        let assigned = propagate_heights(
            &mut grid,
            &mut env,
            &mut frontier,
            &HeightStep::uniform(1.0, 1.0),
            &mut rng,
        );

        assert_eq!(assigned, 8);
        let h = |x, y| grid.height(Coordinate::new(x, y)).unwrap();
        assert_eq!(h(0, 0), 0.0);
        assert_eq!(h(1, 0), 1.0);
        assert_eq!(h(0, 1), 1.0);
        assert_eq!(h(1, 1), 1.0);
        assert_eq!(h(2, 0), 2.0);
        assert_eq!(h(0, 2), 2.0);
        assert_eq!(h(2, 2), 2.0);
        assert_eq!(env.highest_point(), 2.0);
    }

    #[test]
    fn test_every_step_strictly_increases() {
        let mut rng = StdRng::seed_from_u64(42);
        let (mut grid, mut frontier) = seeded_grid(12, &[(0, 0), (6, 6)]);
        let mut env = Environment::new();

        propagate_heights(
            &mut grid,
            &mut env,
            &mut frontier,
            &HeightStep::uniform(0.5, 3.0),
            &mut rng,
        );

        for pos in grid.coordinates() {
            let height = grid.height(pos).expect("tile left without height");
            if height == 0.0 {
                continue;
            }
            // Something lower must border every non-seed tile.
            assert!(
                grid.neighbours(pos)
                    .any(|n| grid.height(n).is_some_and(|nh| nh < height)),
                "tile {pos:?} is a basin"
            );
        }
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let step = HeightStep::uniform(1.0, 3.0);
        for _ in 0..1000 {
            let inc = step.increment(Coordinate::new(0, 0), Coordinate::new(1, 0), &mut rng);
            assert!((1.0..=3.0).contains(&inc));
        }
    }

    #[test]
    fn test_noise_shaping_only_adds() {
        let mut rng = StdRng::seed_from_u64(9);
        let config = TerrainConfig::new(16)
            .with_jitter(1.0, 1.0)
            .with_noise(NoiseShaping::default());
        let step = HeightStep::from_config(&config);
        for x in 0..15 {
            let inc = step.increment(Coordinate::new(x, 3), Coordinate::new(x + 1, 4), &mut rng);
            assert!(inc >= 1.0);
        }
    }

    #[test]
    fn test_sea_level_within_divisor_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut env = Environment::new();
        env.observe_height(100.0);

        settle_sea_level(&mut env, (1.5, 4.0), &mut rng);

        assert!(env.sea_level() > 25.0 && env.sea_level() <= 100.0 / 1.5);
    }
}
