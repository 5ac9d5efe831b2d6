//! Scalars shared by every tile of a generation run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    highest_point: f64,
    sea_level: f64,
    dampest: u64,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum height assigned during propagation.
    pub fn highest_point(&self) -> f64 {
        self.highest_point
    }

    /// Tiles at or below this height are sea.
    pub fn sea_level(&self) -> f64 {
        self.sea_level
    }

    /// Maximum dampness reached during drainage.
    pub fn dampest(&self) -> u64 {
        self.dampest
    }

    pub(crate) fn observe_height(&mut self, height: f64) {
        if height > self.highest_point {
            self.highest_point = height;
        }
    }

    pub(crate) fn observe_dampness(&mut self, dampness: u64) {
        if dampness > self.dampest {
            self.dampest = dampness;
        }
    }

    pub(crate) fn set_sea_level(&mut self, sea_level: f64) {
        self.sea_level = sea_level;
    }
}

/// Sea level for a given peak and divisor draw.
pub fn sea_level_for(highest_point: f64, divisor: f64) -> f64 {
    highest_point / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sea_level_for() {
        assert_eq!(sea_level_for(100.0, 2.0), 50.0);
        assert_eq!(sea_level_for(0.0, 3.0), 0.0);
    }

    #[test]
    fn test_maxima_only_increase() {
        let mut env = Environment::new();
        env.observe_height(5.0);
        env.observe_height(3.0);
        env.observe_dampness(7);
        env.observe_dampness(2);
        assert_eq!(env.highest_point(), 5.0);
        assert_eq!(env.dampest(), 7);
    }
}
