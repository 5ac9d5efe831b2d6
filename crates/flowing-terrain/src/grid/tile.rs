//! Per-tile state.

use serde::{Deserialize, Serialize};

/// Integer grid position. Both axes are in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// True when `other` differs on both axes.
    pub fn is_diagonal_to(&self, other: Coordinate) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// One cell of the terrain grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pos: Coordinate,
    height: Option<f64>,
    dampness: u64,
    drains_to: Option<Coordinate>,
    seeded: bool,
}

impl Tile {
    pub(crate) fn new(pos: Coordinate) -> Self {
        Self {
            pos,
            height: None,
            // Every tile contributes its own runoff.
            dampness: 1,
            drains_to: None,
            seeded: false,
        }
    }

    pub fn pos(&self) -> Coordinate {
        self.pos
    }

    pub fn x(&self) -> u32 {
        self.pos.x
    }

    pub fn y(&self) -> u32 {
        self.pos.y
    }

    /// Height assigned by propagation, `None` before it is visited.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn dampness(&self) -> u64 {
        self.dampness
    }

    /// The neighbour this tile's water flows into. Never set at or below sea level.
    pub fn drains_to(&self) -> Option<Coordinate> {
        self.drains_to
    }

    /// Whether this tile was chosen as a height-0 seed.
    pub fn is_seed(&self) -> bool {
        self.seeded
    }

    /// True when the tile is strictly above `sea_level`.
    pub fn is_land(&self, sea_level: f64) -> bool {
        self.height.is_some_and(|h| h > sea_level)
    }

    /// Marks the tile as a height-0 seed.
    ///
    /// Returns false if it was already seeded, so callers insert it into
    /// the frontier at most once.
    pub(crate) fn mark_seed(&mut self) -> bool {
        if self.seeded {
            return false;
        }
        self.seeded = true;
        self.height = Some(0.0);
        true
    }

    /// Sets the height of an unvisited tile. Returns false if it already had one.
    pub(crate) fn assign_height(&mut self, height: f64) -> bool {
        if self.height.is_some() {
            return false;
        }
        self.height = Some(height);
        true
    }

    pub(crate) fn add_dampness(&mut self, amount: u64) {
        self.dampness += amount;
    }

    pub(crate) fn set_drains_to(&mut self, target: Coordinate) {
        self.drains_to = Some(target);
    }
}
