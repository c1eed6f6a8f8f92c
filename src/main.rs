//! Dungen - Entry Point
//!
//! Small CLI that builds one of the three generators and prints the
//! resulting map to stdout.

use anyhow::Result;
use clap::{Parser, ValueEnum};

use dungen::world::generation::{
    CellularGenerator, GrowthGenerator, MapGenerator, PartitionGenerator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// Recursive partitioning into walled rooms joined by doors
    Building,
    /// Organic growth from random seed points
    Cave,
    /// Per-cell rooms stitched with corridors
    Cell,
}

#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(about = "Generate dungeon maps as wall/floor/door text grids")]
struct Args {
    /// Generation style
    #[arg(value_enum, default_value = "building")]
    style: Style,

    /// Map width in tiles (building and cave styles)
    #[arg(short = 'W', long, default_value_t = 70)]
    width: i32,

    /// Map height in tiles (building and cave styles)
    #[arg(short = 'H', long, default_value_t = 20)]
    height: i32,

    /// Maximum partition depth (building style)
    #[arg(long, default_value_t = 10)]
    iterations: u32,

    /// Number of growth seeds (cave style)
    #[arg(long, default_value_t = 5)]
    seeds: usize,

    /// Growth steps to perform (cave style)
    #[arg(long, default_value_t = 300)]
    growth: usize,

    /// Width of one cell in tiles (cell style)
    #[arg(long, default_value_t = 10)]
    cell_width: i32,

    /// Height of one cell in tiles (cell style)
    #[arg(long, default_value_t = 8)]
    cell_height: i32,

    /// Number of cells across (cell style)
    #[arg(long, default_value_t = 10)]
    cells_x: i32,

    /// Number of cells down (cell style)
    #[arg(long, default_value_t = 5)]
    cells_y: i32,

    /// Chance of a cell containing a room (cell style)
    #[arg(long, default_value_t = 0.65)]
    room_probability: f64,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("running with {args:?}");

    match args.style {
        Style::Building => {
            let mut gen = match args.seed {
                Some(s) => PartitionGenerator::with_seed(args.width, args.height, args.iterations, s),
                None => PartitionGenerator::new(args.width, args.height, args.iterations),
            };
            print!("{}", gen.generate());
        }
        Style::Cave => {
            let mut gen = match args.seed {
                Some(s) => {
                    GrowthGenerator::with_seed(args.width, args.height, args.seeds, args.growth, s)?
                }
                None => GrowthGenerator::new(args.width, args.height, args.seeds, args.growth)?,
            };
            print!("{}", gen.generate());
        }
        Style::Cell => {
            let mut gen = match args.seed {
                Some(s) => CellularGenerator::with_seed(
                    args.cell_width,
                    args.cell_height,
                    args.cells_x,
                    args.cells_y,
                    args.room_probability,
                    s,
                ),
                None => CellularGenerator::new(
                    args.cell_width,
                    args.cell_height,
                    args.cells_x,
                    args.cells_y,
                    args.room_probability,
                ),
            };
            print!("{}", gen.generate());
        }
    }

    Ok(())
}
