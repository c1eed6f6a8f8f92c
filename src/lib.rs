//! Dungen - procedural dungeon map generation
//!
//! Carves rectangular wall/floor/door grids in three independent styles:
//! building-like spatial partitioning, organic cave growth from seed
//! points, and cell-based room placement with corridor stitching.

pub mod world;

// Re-export commonly used types
pub use world::generation::{
    CellularGenerator, GenerationError, GrowthGenerator, MapGenerator, PartitionGenerator,
};
pub use world::grid::Grid;
pub use world::position::Position;
pub use world::tile::Tile;
