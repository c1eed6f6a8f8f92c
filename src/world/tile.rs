//! Tile definitions
//!
//! The three tile kinds a generated map is made of.

use serde::{Deserialize, Serialize};

/// A single map tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Door,
}

impl Tile {
    /// Display glyph used by the text rendering
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Door => '+',
        }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor | Tile::Door)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(Tile::Wall.glyph(), '#');
        assert_eq!(Tile::Floor.glyph(), '.');
        assert_eq!(Tile::Door.glyph(), '+');
    }

    #[test]
    fn test_walkability() {
        assert!(!Tile::Wall.is_walkable());
        assert!(Tile::Floor.is_walkable());
        assert!(Tile::Door.is_walkable());
    }
}
