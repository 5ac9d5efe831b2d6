//! Height-ordered working set shared by both generation phases.
//!
//! Entries are `(height, coordinate)` pairs. Equal heights are ordered by
//! coordinate, so the order is total and independent of insertion order.
//! Propagation pops the lowest entry, drainage pops the highest.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::grid::Coordinate;

#[derive(Debug, Clone, Copy)]
struct Entry {
    height: f64,
    pos: Coordinate,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.height
            .total_cmp(&other.height)
            .then_with(|| self.pos.cmp(&other.pos))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: BTreeSet<Entry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. Returns false if the identical entry was already present.
    pub fn insert(&mut self, height: f64, pos: Coordinate) -> bool {
        self.entries.insert(Entry { height, pos })
    }

    pub fn contains(&self, height: f64, pos: Coordinate) -> bool {
        self.entries.contains(&Entry { height, pos })
    }

    /// Removes and returns the lowest entry.
    pub fn pop_lowest(&mut self) -> Option<(f64, Coordinate)> {
        self.entries.pop_first().map(|e| (e.height, e.pos))
    }

    /// Removes and returns the highest entry.
    pub fn pop_highest(&mut self) -> Option<(f64, Coordinate)> {
        self.entries.pop_last().map(|e| (e.height, e.pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
