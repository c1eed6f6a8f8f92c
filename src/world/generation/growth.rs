//! Cave-style generator
//!
//! Grows floor space outward from random seed points, then stitches the
//! seeds together with corridors.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{stitch, GenerationError, MapGenerator};
use crate::world::grid::Grid;
use crate::world::position::Position;
use crate::world::tile::Tile;

/// Organic growth ("cave") generator
#[derive(Debug)]
pub struct GrowthGenerator {
    width: i32,
    height: i32,
    seed_count: usize,
    iteration_budget: usize,
    rng: StdRng,
    grid: Grid,
}

impl GrowthGenerator {
    pub fn new(
        width: i32,
        height: i32,
        seed_count: usize,
        iteration_budget: usize,
    ) -> Result<Self, GenerationError> {
        Self::with_rng(
            width,
            height,
            seed_count,
            iteration_budget,
            StdRng::from_entropy(),
        )
    }

    /// Seeded constructor for reproducible output
    pub fn with_seed(
        width: i32,
        height: i32,
        seed_count: usize,
        iteration_budget: usize,
        seed: u64,
    ) -> Result<Self, GenerationError> {
        Self::with_rng(
            width,
            height,
            seed_count,
            iteration_budget,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        width: i32,
        height: i32,
        seed_count: usize,
        iteration_budget: usize,
        rng: StdRng,
    ) -> Result<Self, GenerationError> {
        if width <= 0 || height <= 0 {
            return Err(GenerationError::InvalidConfiguration(format!(
                "map dimensions must be positive, got {width}x{height}"
            )));
        }
        if (width as usize) * (height as usize) < iteration_budget + seed_count {
            return Err(GenerationError::InvalidConfiguration(format!(
                "{width}x{height} map is too small for {seed_count} seeds plus {iteration_budget} growth steps"
            )));
        }
        Ok(Self {
            width,
            height,
            seed_count,
            iteration_budget,
            rng,
            grid: Grid::new(width, height, Tile::Wall),
        })
    }

    fn rebuild(&mut self) {
        self.grid.fill(Tile::Wall);

        let seeds = self.generate_seeds();
        let mut claimed: HashSet<Position> = seeds.iter().copied().collect();

        // The frontier keeps duplicates on purpose: cells adjacent to many
        // claimed cells are drawn more often, which biases growth toward
        // already-dense regions.
        let mut frontier: Vec<Position> = Vec::with_capacity(8 * self.seed_count);
        for seed in &seeds {
            frontier.extend(seed.neighbors());
        }

        let mut grown = 0;
        while grown < self.iteration_budget {
            if frontier.is_empty() {
                log::warn!(
                    "growth frontier exhausted after {} of {} steps",
                    grown,
                    self.iteration_budget
                );
                break;
            }
            let pick = self.rng.gen_range(0..frontier.len());
            let pos = frontier.swap_remove(pick);
            if claimed.contains(&pos) || self.on_border(pos) {
                continue;
            }
            claimed.insert(pos);
            frontier.extend(pos.neighbors());
            grown += 1;
        }

        stitch(seeds, |pos| {
            claimed.insert(pos);
        });

        // Claimed cells never touch the outer ring, so the wall fill is the
        // only border pass needed.
        for pos in &claimed {
            self.grid.set(pos.x, pos.y, Tile::Floor);
        }

        log::info!(
            "generated {}x{} cave map with {} floor cells from {} seeds",
            self.width,
            self.height,
            claimed.len(),
            self.seed_count
        );
    }

    /// Sample distinct seed positions from the open interior
    fn generate_seeds(&mut self) -> Vec<Position> {
        let mut seeds: Vec<Position> = Vec::with_capacity(self.seed_count);
        while seeds.len() < self.seed_count {
            let pos = Position::new(
                self.rng.gen_range(1..self.width - 1),
                self.rng.gen_range(1..self.height - 1),
            );
            if !seeds.contains(&pos) {
                seeds.push(pos);
            }
        }
        seeds
    }

    fn on_border(&self, pos: Position) -> bool {
        pos.x == 0 || pos.x == self.width - 1 || pos.y == 0 || pos.y == self.height - 1
    }
}

impl MapGenerator for GrowthGenerator {
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
