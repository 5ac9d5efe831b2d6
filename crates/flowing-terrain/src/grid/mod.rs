//! Fixed-size square grid of tiles.
//!
//! Tiles are created lazily on first access and never removed. A grid is
//! the output of one generation run; regenerating replaces it wholesale.

mod tile;

pub use tile::{Coordinate, Tile};

/// Neighbour offsets in enumeration order.
const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns the up to 8 in-bounds neighbours of `pos` on a `size`×`size` grid.
///
/// The order is fixed so a seeded run always visits neighbours identically.
pub fn neighbours(pos: Coordinate, size: u32) -> impl Iterator<Item = Coordinate> {
    let size = i64::from(size);
    NEIGHBOUR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = i64::from(pos.x) + dx;
        let y = i64::from(pos.y) + dy;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some(Coordinate::new(x as u32, y as u32))
    })
}

#[derive(Debug, Clone)]
pub struct Grid {
    size: u32,
    tiles: Vec<Option<Tile>>,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        let cells = size as usize * size as usize;
        Self {
            size,
            tiles: vec![None; cells],
        }
    }

    /// Tiles per side.
    pub fn size(&self) -> u32 {
        self.size
    }

    fn index(&self, pos: Coordinate) -> usize {
        assert!(
            pos.x < self.size && pos.y < self.size,
            "tile ({}, {}) is outside a {}x{} grid",
            pos.x,
            pos.y,
            self.size,
            self.size
        );
        pos.y as usize * self.size as usize + pos.x as usize
    }

    /// Returns the tile at `pos`, creating it on first access.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn get_or_create(&mut self, pos: Coordinate) -> &mut Tile {
        let idx = self.index(pos);
        self.tiles[idx].get_or_insert_with(|| Tile::new(pos))
    }

    /// Returns the tile at `pos` if it has been created.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn get(&self, pos: Coordinate) -> Option<&Tile> {
        self.tiles[self.index(pos)].as_ref()
    }

    /// Height of the tile at `pos`, `None` if it is missing or unvisited.
    pub fn height(&self, pos: Coordinate) -> Option<f64> {
        self.get(pos).and_then(Tile::height)
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }

    /// Tiles created so far, in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    /// In-bounds neighbours of `pos`.
    pub fn neighbours(&self, pos: Coordinate) -> impl Iterator<Item = Coordinate> + use<> {
        neighbours(pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut grid = Grid::new(4);
        assert!(grid.get(Coordinate::new(1, 2)).is_none());

        grid.get_or_create(Coordinate::new(1, 2)).assign_height(3.0);
        let tile = grid.get_or_create(Coordinate::new(1, 2));
        assert_eq!(tile.height(), Some(3.0));
        assert_eq!(tile.pos(), Coordinate::new(1, 2));
        assert_eq!(grid.tiles().count(), 1);
    }

    #[test]
    #[should_panic(expected = "outside a 4x4 grid")]
    fn test_out_of_bounds_panics() {
        let mut grid = Grid::new(4);
        grid.get_or_create(Coordinate::new(4, 0));
    }

    #[test]
    fn test_corner_has_three_neighbours() {
        let found: Vec<_> = neighbours(Coordinate::new(0, 0), 5).collect();
        assert_eq!(
            found,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_interior_has_eight_neighbours() {
        let found: Vec<_> = neighbours(Coordinate::new(2, 2), 5).collect();
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&Coordinate::new(2, 2)));
    }

    #[test]
    fn test_single_tile_grid_has_no_neighbours() {
        assert_eq!(neighbours(Coordinate::new(0, 0), 1).count(), 0);
    }

    #[test]
    fn test_coordinates_are_row_major() {
        let grid = Grid::new(2);
        let coords: Vec<_> = grid.coordinates().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1)
            ]
        );
    }
}
