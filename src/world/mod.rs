//! World module
//!
//! Contains the tile grid data structures and procedural generation.

pub mod generation;
pub mod grid;
pub mod position;
pub mod tile;

pub use grid::Grid;
pub use position::Position;
pub use tile::Tile;
