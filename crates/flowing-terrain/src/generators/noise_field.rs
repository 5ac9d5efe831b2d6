//! Perlin noise field sampled once per tile.

use noise::{NoiseFn, Perlin};

use crate::config::NoiseShaping;
use crate::grid::Coordinate;

const OCTAVES: u32 = 4;

/// Per-tile noise values normalised to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct NoiseField {
    size: u32,
    values: Vec<f64>,
}

impl NoiseField {
    pub fn new(size: u32, shaping: &NoiseShaping) -> Self {
        let perlin = Perlin::new(shaping.seed);
        let mut values = Vec::with_capacity(size as usize * size as usize);
        for y in 0..size {
            for x in 0..size {
                values.push(fbm(&perlin, x as f64, y as f64, shaping.frequency));
            }
        }
        normalise(&mut values);
        Self { size, values }
    }

    pub fn value(&self, pos: Coordinate) -> f64 {
        debug_assert!(pos.x < self.size && pos.y < self.size);
        self.values[pos.y as usize * self.size as usize + pos.x as usize]
    }
}

fn fbm(perlin: &Perlin, x: f64, y: f64, base_frequency: f64) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = base_frequency;
    let mut max_amplitude = 0.0;

    for _ in 0..OCTAVES {
        total += perlin.get([x * frequency, y * frequency]) * amplitude;
        max_amplitude += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    total / max_amplitude
}

fn normalise(values: &mut [f64]) {
    let (min, max) = values
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    if range.abs() < f64::EPSILON {
        values.iter_mut().for_each(|v| *v = 0.0);
        return;
    }
    for v in values.iter_mut() {
        *v = (*v - min) / range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_normalised() {
        let field = NoiseField::new(16, &NoiseShaping::default());
        for y in 0..16 {
            for x in 0..16 {
                let v = field.value(Coordinate::new(x, y));
                assert!((0.0..=1.0).contains(&v), "value {v} out of range");
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let shaping = NoiseShaping {
            seed: 9,
            ..Default::default()
        };
        let a = NoiseField::new(8, &shaping);
        let b = NoiseField::new(8, &shaping);
        assert_eq!(a.values, b.values);
    }

    #[test]
    fn test_flat_field_is_zero() {
        let mut values = vec![0.25; 4];
        normalise(&mut values);
        assert_eq!(values, vec![0.0; 4]);
    }
}
