//! Cell-style generator
//!
//! Splits the map into a fixed arrangement of cells, rolls a room into some
//! of them, and stitches the rooms together with corridors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{stitch, MapGenerator};
use crate::world::grid::Grid;
use crate::world::position::Position;
use crate::world::tile::Tile;

/// Smallest room extent a cell may roll
const ROOM_MIN: i32 = 5;

/// A room placed at the origin of one grid cell.
///
/// Only the interior is carved; the outer ring of the rectangle stays wall.
#[derive(Debug, Clone, Copy)]
struct Room {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Room {
    fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Fixed-cell ("cell") generator
pub struct CellularGenerator {
    cell_width: i32,
    cell_height: i32,
    cells_x: i32,
    cells_y: i32,
    room_probability: f64,
    rng: StdRng,
    grid: Grid,
}

impl CellularGenerator {
    pub fn new(
        cell_width: i32,
        cell_height: i32,
        cells_x: i32,
        cells_y: i32,
        room_probability: f64,
    ) -> Self {
        Self::with_rng(
            cell_width,
            cell_height,
            cells_x,
            cells_y,
            room_probability,
            StdRng::from_entropy(),
        )
    }

    /// Seeded constructor for reproducible output
    pub fn with_seed(
        cell_width: i32,
        cell_height: i32,
        cells_x: i32,
        cells_y: i32,
        room_probability: f64,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            cell_width,
            cell_height,
            cells_x,
            cells_y,
            room_probability,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        cell_width: i32,
        cell_height: i32,
        cells_x: i32,
        cells_y: i32,
        room_probability: f64,
        rng: StdRng,
    ) -> Self {
        let grid = Grid::new(cell_width * cells_x, cell_height * cells_y, Tile::Wall);
        Self {
            cell_width,
            cell_height,
            cells_x,
            cells_y,
            room_probability,
            rng,
            grid,
        }
    }

    fn rebuild(&mut self) {
        self.grid.fill(Tile::Wall);

        let rooms = self.generate_rooms();
        for room in &rooms {
            self.carve_room(room);
        }

        log::info!(
            "generated {}x{} cell map with {} rooms",
            self.grid.width,
            self.grid.height,
            rooms.len()
        );

        if rooms.is_empty() {
            log::debug!("no rooms rolled, skipping corridor stitching");
            return;
        }

        let centers: Vec<Position> = rooms.iter().map(Room::center).collect();
        let grid = &mut self.grid;
        stitch(centers, |pos| grid.set(pos.x, pos.y, Tile::Floor));
    }

    /// Roll one room per cell with the configured probability
    fn generate_rooms(&mut self) -> Vec<Room> {
        let mut rooms = Vec::new();
        for cy in 0..self.cells_y {
            for cx in 0..self.cells_x {
                if self.rng.gen_bool(self.room_probability) {
                    rooms.push(Room {
                        x: cx * self.cell_width,
                        y: cy * self.cell_height,
                        width: self.rng.gen_range(ROOM_MIN..self.cell_width),
                        height: self.rng.gen_range(ROOM_MIN..self.cell_height),
                    });
                }
            }
        }
        rooms
    }

    /// Carve the room interior, inset by one on all sides
    fn carve_room(&mut self, room: &Room) {
        for y in room.y + 1..room.y + room.height - 1 {
            for x in room.x + 1..room.x + room.width - 1 {
                self.grid.set(x, y, Tile::Floor);
            }
        }
    }
}

impl MapGenerator for CellularGenerator {
    fn generate(&mut self) -> &Grid {
        self.rebuild();
        &self.grid
    }

    fn width(&self) -> i32 {
        self.cell_width * self.cells_x
    }

    fn height(&self) -> i32 {
        self.cell_height * self.cells_y
    }
}
