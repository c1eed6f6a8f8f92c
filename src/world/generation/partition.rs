//! Building-style generator
//!
//! Recursive binary space partitioning: split the map into rooms, wall off
//! every divider, then punch a single door through each one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MapGenerator;
use crate::world::grid::Grid;
use crate::world::position::Position;
use crate::world::tile::Tile;

/// Interior cells guaranteed on each side of a divider
const MIN: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// A rectangular sub-region of the map.
///
/// Nodes are built top-down during `generate` and discarded when it returns;
/// a node is never touched again once its split is recorded.
#[derive(Debug)]
struct Partition {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    split: Option<Split>,
}

#[derive(Debug)]
struct Split {
    axis: Axis,
    /// The x (vertical) or y (horizontal) coordinate of the divider line
    at: i32,
    /// Left or top child
    first: Box<Partition>,
    /// Right or bottom child
    second: Box<Partition>,
}

impl Partition {
    fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            split: None,
        }
    }
}

/// Recursive spatial partitioning ("building") generator
pub struct PartitionGenerator {
    width: i32,
    height: i32,
    max_iterations: u32,
    rng: StdRng,
    grid: Grid,
}

impl PartitionGenerator {
    pub fn new(width: i32, height: i32, max_iterations: u32) -> Self {
        Self::with_rng(width, height, max_iterations, StdRng::from_entropy())
    }

    /// Seeded constructor for reproducible output
    pub fn with_seed(width: i32, height: i32, max_iterations: u32, seed: u64) -> Self {
        Self::with_rng(width, height, max_iterations, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: i32, height: i32, max_iterations: u32, rng: StdRng) -> Self {
        Self {
            width,
            height,
            max_iterations,
            rng,
            grid: Grid::new(width, height, Tile::Floor),
        }
    }

    fn rebuild(&mut self) -> Partition {
        self.grid.fill(Tile::Floor);

        let mut root = Partition::new(0, 0, self.width, self.height);
        self.split(&mut root, 0);
        self.draw_dividers(&root);
        self.draw_doors(&root);
        self.grid.draw_border();

        log::info!(
            "generated {}x{} building map with {} rooms",
            self.width,
            self.height,
            count_rooms(&root)
        );
        root
    }

    /// Recursively split `node` until the depth budget runs out or the
    /// region is too small to leave MIN cells on both sides of a divider.
    fn split(&mut self, node: &mut Partition, iteration: u32) {
        if iteration >= self.max_iterations
            || node.width - (2 * MIN + 1) <= 0
            || node.height - (2 * MIN + 1) <= 0
        {
            return;
        }

        let (axis, at, first, second) = if self.rng.gen_bool(0.5) {
            let at = MIN + node.x + self.rng.gen_range(0..node.width - (2 * MIN + 1));
            (
                Axis::Vertical,
                at,
                Partition::new(node.x, node.y, at - node.x, node.height),
                Partition::new(at, node.y, node.x + node.width - at, node.height),
            )
        } else {
            let at = MIN + node.y + self.rng.gen_range(0..node.height - (2 * MIN + 1));
            (
                Axis::Horizontal,
                at,
                Partition::new(node.x, node.y, node.width, at - node.y),
                Partition::new(node.x, at, node.width, node.y + node.height - at),
            )
        };

        let mut first = Box::new(first);
        let mut second = Box::new(second);
        self.split(&mut first, iteration + 1);
        self.split(&mut second, iteration + 1);
        node.split = Some(Split {
            axis,
            at,
            first,
            second,
        });
    }

    /// Draw the full wall line stored on every split node.
    ///
    /// Runs to completion before any door is placed, so door candidates are
    /// checked against the final wall layout.
    fn draw_dividers(&mut self, node: &Partition) {
        let Some(split) = &node.split else { return };
        match split.axis {
            Axis::Vertical => {
                for y in node.y..node.y + node.height {
                    self.grid.set(split.at, y, Tile::Wall);
                }
            }
            Axis::Horizontal => {
                for x in node.x..node.x + node.width {
                    self.grid.set(x, split.at, Tile::Wall);
                }
            }
        }
        self.draw_dividers(&split.first);
        self.draw_dividers(&split.second);
    }

    /// Turn one wall cell of every divider into a door.
    ///
    /// A cell qualifies when both cells one step off the divider are floor
    /// and the cell is not on the outer border.
    fn draw_doors(&mut self, node: &Partition) {
        let Some(split) = &node.split else { return };

        let mut candidates = Vec::new();
        match split.axis {
            Axis::Vertical => {
                for y in node.y..node.y + node.height {
                    if y == 0 || y == self.height - 1 {
                        continue;
                    }
                    if self.grid.get(split.at + 1, y) == Some(Tile::Floor)
                        && self.grid.get(split.at - 1, y) == Some(Tile::Floor)
                    {
                        candidates.push(Position::new(split.at, y));
                    }
                }
            }
            Axis::Horizontal => {
                for x in node.x..node.x + node.width {
                    if x == 0 || x == self.width - 1 {
                        continue;
                    }
                    if self.grid.get(x, split.at + 1) == Some(Tile::Floor)
                        && self.grid.get(x, split.at - 1) == Some(Tile::Floor)
                    {
                        candidates.push(Position::new(x, split.at));
                    }
                }
            }
        }

        // MIN >= 1 leaves floor on both sides of some stretch of every
        // divider, so an empty candidate list means the tree is corrupt.
        assert!(
            !candidates.is_empty(),
            "divider at {} of node ({}, {}) {}x{} has no door candidates",
            split.at,
            node.x,
            node.y,
            node.width,
            node.height
        );
        let door = candidates[self.rng.gen_range(0..candidates.len())];
        self.grid.set(door.x, door.y, Tile::Door);

        self.draw_doors(&split.first);
        self.draw_doors(&split.second);
    }
}

impl MapGenerator for PartitionGenerator {
    fn generate(&mut self) -> &Grid {
        self.rebuild();
        &self.grid
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

fn count_rooms(node: &Partition) -> usize {
    match &node.split {
        Some(split) => count_rooms(&split.first) + count_rooms(&split.second),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flood fill over walkable tiles, returning the number reached
    fn reachable_from(grid: &Grid, start: Position) -> usize {
        let mut visited = vec![false; grid.tiles.len()];
        let mut stack = vec![start];
        let mut count = 0;
        while let Some(pos) = stack.pop() {
            if !grid.in_bounds(pos.x, pos.y) {
                continue;
            }
            let idx = grid.xy_to_idx(pos.x, pos.y);
            if visited[idx] || !grid.tiles[idx].is_walkable() {
                continue;
            }
            visited[idx] = true;
            count += 1;
            stack.push(Position::new(pos.x + 1, pos.y));
            stack.push(Position::new(pos.x - 1, pos.y));
            stack.push(Position::new(pos.x, pos.y + 1));
            stack.push(Position::new(pos.x, pos.y - 1));
        }
        count
    }

    fn doors_on_divider(grid: &Grid, node: &Partition) -> usize {
        let split = node.split.as_ref().unwrap();
        match split.axis {
            Axis::Vertical => (node.y..node.y + node.height)
                .filter(|y| grid.get(split.at, *y) == Some(Tile::Door))
                .count(),
            Axis::Horizontal => (node.x..node.x + node.width)
                .filter(|x| grid.get(*x, split.at) == Some(Tile::Door))
                .count(),
        }
    }

    fn check_doors(grid: &Grid, node: &Partition) {
        if let Some(split) = &node.split {
            assert_eq!(
                doors_on_divider(grid, node),
                1,
                "divider at {} should hold exactly one door",
                split.at
            );
            check_doors(grid, &split.first);
            check_doors(grid, &split.second);
        }
    }

    #[test]
    fn test_dimensions_and_border() {
        let mut gen = PartitionGenerator::with_seed(70, 20, 10, 42);
        let grid = gen.generate();
        assert_eq!(grid.width, 70);
        assert_eq!(grid.height, 20);
        for x in 0..70 {
            assert_eq!(grid.get(x, 0), Some(Tile::Wall));
            assert_eq!(grid.get(x, 19), Some(Tile::Wall));
        }
        for y in 0..20 {
            assert_eq!(grid.get(0, y), Some(Tile::Wall));
            assert_eq!(grid.get(69, y), Some(Tile::Wall));
        }
    }

    #[test]
    fn test_every_divider_has_exactly_one_door() {
        for seed in [1, 7, 99, 1234] {
            let mut gen = PartitionGenerator::with_seed(70, 20, 10, seed);
            let root = gen.rebuild();
            check_doors(&gen.grid, &root);
        }
    }

    #[test]
    fn test_all_rooms_reachable() {
        let mut gen = PartitionGenerator::with_seed(60, 40, 8, 3);
        let grid = gen.generate();
        let walkable: Vec<Position> = (0..grid.height)
            .flat_map(|y| (0..grid.width).map(move |x| Position::new(x, y)))
            .filter(|p| grid.get(p.x, p.y).is_some_and(|t| t.is_walkable()))
            .collect();
        assert!(!walkable.is_empty());
        assert_eq!(reachable_from(grid, walkable[0]), walkable.len());
    }

    #[test]
    fn test_region_too_small_to_split_stays_one_room() {
        // 7x7 cannot fit a divider with MIN cells on both sides
        let mut gen = PartitionGenerator::with_seed(7, 7, 10, 5);
        let root = gen.rebuild();
        assert!(root.split.is_none());
        for y in 1..6 {
            for x in 1..6 {
                assert_eq!(gen.grid.get(x, y), Some(Tile::Floor));
            }
        }
    }

    #[test]
    fn test_zero_iterations_never_splits() {
        let mut gen = PartitionGenerator::with_seed(70, 20, 0, 11);
        let root = gen.rebuild();
        assert!(root.split.is_none());
    }

    #[test]
    fn test_same_seed_reproduces_map() {
        let mut a = PartitionGenerator::with_seed(50, 30, 6, 77);
        let mut b = PartitionGenerator::with_seed(50, 30, 6, 77);
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_regenerate_keeps_invariants() {
        let mut gen = PartitionGenerator::with_seed(70, 20, 10, 8);
        gen.generate();
        let root = gen.rebuild();
        check_doors(&gen.grid, &root);
    }
}
