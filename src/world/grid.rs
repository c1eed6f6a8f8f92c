//! Map grid data structure
//!
//! The 2D tile buffer every generator writes into.

use std::fmt;

use super::tile::Tile;

/// A rectangular grid of tiles, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new grid with every cell set to `fill`
    pub fn new(width: i32, height: i32, fill: Tile) -> Self {
        let tiles = vec![fill; (width * height) as usize];
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Reset every cell to `fill`
    pub fn fill(&mut self, fill: Tile) {
        for tile in &mut self.tiles {
            *tile = fill;
        }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get tile at position
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Set tile at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx] = tile;
        }
    }

    /// Overwrite the outermost ring with walls.
    ///
    /// Runs after the interior passes so the border always wins.
    pub fn draw_border(&mut self) {
        for x in 0..self.width {
            self.set(x, 0, Tile::Wall);
            self.set(x, self.height - 1, Tile::Wall);
        }
        for y in 0..self.height {
            self.set(0, y, Tile::Wall);
            self.set(self.width - 1, y, Tile::Wall);
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_cell() {
        let grid = Grid::new(4, 3, Tile::Floor);
        assert_eq!(grid.tiles.len(), 12);
        assert!(grid.tiles.iter().all(|t| *t == Tile::Floor));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(3, 3, Tile::Wall);
        grid.set(1, 1, Tile::Door);
        assert_eq!(grid.get(1, 1), Some(Tile::Door));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(-1, 0), None);

        // Out-of-bounds writes are silently dropped
        grid.set(5, 5, Tile::Floor);
        assert!(grid.tiles.iter().filter(|t| **t == Tile::Floor).count() == 0);
    }

    #[test]
    fn test_draw_border_overwrites_ring() {
        let mut grid = Grid::new(5, 4, Tile::Floor);
        grid.draw_border();
        for y in 0..4 {
            for x in 0..5 {
                let on_ring = x == 0 || x == 4 || y == 0 || y == 3;
                let expected = if on_ring { Tile::Wall } else { Tile::Floor };
                assert_eq!(grid.get(x, y), Some(expected), "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_render_all_walls() {
        let grid = Grid::new(3, 3, Tile::Wall);
        assert_eq!(grid.to_string(), "###\n###\n###\n");
    }

    #[test]
    fn test_render_mixed_tiles() {
        let mut grid = Grid::new(3, 2, Tile::Wall);
        grid.set(1, 0, Tile::Floor);
        grid.set(2, 1, Tile::Door);
        assert_eq!(grid.to_string(), "#.#\n##+\n");
    }

    #[test]
    fn test_fill_resets_previous_content() {
        let mut grid = Grid::new(3, 3, Tile::Wall);
        grid.set(1, 1, Tile::Door);
        grid.fill(Tile::Floor);
        assert!(grid.tiles.iter().all(|t| *t == Tile::Floor));
    }
}
