//! Procedural map generation
//!
//! Three generators with a common contract: building-style partitioning,
//! cave-style growth, and cell-style room placement.

pub mod cellular;
pub mod growth;
pub mod partition;

pub use cellular::CellularGenerator;
pub use growth::GrowthGenerator;
pub use partition::PartitionGenerator;

use thiserror::Error;

use super::grid::Grid;
use super::position::Position;

/// Common contract implemented by every generator
pub trait MapGenerator {
    /// Recompute the map in place and return it
    fn generate(&mut self) -> &Grid;

    fn width(&self) -> i32;

    fn height(&self) -> i32;
}

/// Errors raised when a generator is constructed
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Greedy nearest-neighbor stitching pass.
///
/// Walks the point list from its first entry, always hopping to the closest
/// remaining point and carving an L-shaped corridor along the way. The result
/// is one connected path through every point, not a minimal one.
pub(crate) fn stitch<F: FnMut(Position)>(mut points: Vec<Position>, mut carve: F) {
    if points.is_empty() {
        return;
    }
    let mut current = points.remove(0);
    while !points.is_empty() {
        let next = take_closest(current, &mut points);
        carve_l_corridor(current, next, &mut carve);
        current = next;
    }
}

/// Remove and return the entry of `points` closest to `from`.
///
/// Ties go to the earliest entry in the list.
fn take_closest(from: Position, points: &mut Vec<Position>) -> Position {
    let mut best = 0;
    let mut best_dist = i64::MAX;
    for (i, point) in points.iter().enumerate() {
        let dist = from.distance_sq(point);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    points.remove(best)
}

/// Walk an L-shaped corridor from `from` to `to`, moving along x until
/// aligned and then along y, invoking `carve` on every traversed cell.
fn carve_l_corridor<F: FnMut(Position)>(from: Position, to: Position, mut carve: F) {
    let mut x = from.x;
    let mut y = from.y;
    while x != to.x {
        if x < to.x {
            x += 1;
        } else {
            x -= 1;
        }
        carve(Position::new(x, y));
    }
    while y != to.y {
        if y < to.y {
            y += 1;
        } else {
            y -= 1;
        }
        carve(Position::new(x, y));
    }
}
