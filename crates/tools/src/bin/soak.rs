use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::{LevelFilter, warn};
use walker_core::{CellType, FloorGenerator, GeneratedFloor, RunProgress, StageConfig};

/// Generate many floors and check stage invariants
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    floors: u32,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn check_floor(floor: &GeneratedFloor) -> Result<()> {
    let logical = floor.maze.grid();
    ensure!(logical.count(CellType::Start) == 1, "floor {}: expected one start", floor.floor);
    ensure!(logical.count(CellType::Goal) == 1, "floor {}: expected one goal", floor.floor);
    for (pos, cell) in logical.iter() {
        if pos.x % 2 == 1 && pos.y % 2 == 1 {
            ensure!(cell == CellType::Block, "floor {}: pillar {pos:?} is {cell:?}", floor.floor);
        }
    }

    let params = floor.stage.params();
    let physical = floor.stage.physical();
    let outer = params.outer_wall_thickness;
    for (pos, cell) in physical.iter() {
        let x = pos.x as usize;
        let y = pos.y as usize;
        let on_border = x < outer
            || y < outer
            || x >= physical.width() - outer
            || y >= physical.height() - outer;
        if on_border {
            ensure!(
                cell == CellType::OuterWall,
                "floor {}: border {pos:?} is {cell:?}",
                floor.floor
            );
        }
    }

    let room_cells = params.room_size.x * params.room_size.y;
    ensure!(physical.count(CellType::Start) == room_cells, "floor {}: start room", floor.floor);
    ensure!(physical.count(CellType::Goal) == room_cells, "floor {}: goal room", floor.floor);

    for span in floor.stage.collider_spans().iter() {
        ensure!(span.cell_count() >= 2, "floor {}: single-cell span {span:?}", floor.floor);
        for pos in span.cells() {
            let solid = physical.get(pos).is_some_and(CellType::is_solid);
            ensure!(solid, "floor {}: span {span:?} covers open {pos:?}", floor.floor);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().filter_level(LevelFilter::Warn).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => StageConfig::load(path).context("Failed to load stage config")?,
        None => StageConfig::default(),
    };

    println!("Starting soak on seed {} for {} floors...", args.seed, args.floors);
    let generator = FloorGenerator::new(config, args.seed).context("Invalid stage config")?;
    let mut progress = RunProgress::new();
    let mut unreachable = 0_u32;

    for _ in 0..args.floors {
        let floor = generator.next_floor(&mut progress)?;
        check_floor(&floor)?;
        if !floor.start_reachable {
            unreachable += 1;
        }
    }

    if unreachable > 0 {
        warn!("{unreachable} of {} floors had a start cut off from the goal", args.floors);
    }
    println!("Soak completed: {} floors, {} unreachable starts.", args.floors, unreachable);
    Ok(())
}
