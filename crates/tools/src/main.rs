use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use serde::Serialize;
use walker_core::maze::runtime_seed;
use walker_core::{CellType, ColliderSpans, GeneratedFloor, Grid, StageConfig, generate_floor};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

/// Generate one floor and print its maze and stage
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML stage config; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Run seed; drawn from the clock when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long, default_value_t = 1)]
    floor: u32,
    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    format: Format,
}

#[derive(Serialize)]
struct FloorReport<'a> {
    run_seed: u64,
    #[serde(flatten)]
    floor: &'a GeneratedFloor,
    colliders: ColliderSpans,
}

fn render(grid: &Grid<CellType>) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        out.extend(grid.row(y).iter().map(|cell| cell.glyph()));
        out.push('\n');
    }
    out
}

fn load_config(path: Option<&Path>) -> Result<StageConfig> {
    match path {
        Some(path) => StageConfig::load(path).context("Failed to load stage config"),
        None => Ok(StageConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().filter_level(LevelFilter::Info).init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let run_seed = args.seed.unwrap_or_else(runtime_seed);
    info!("run seed {run_seed}, floor {}", args.floor);

    let floor = generate_floor(&config, run_seed, args.floor)
        .with_context(|| format!("Failed to generate floor {}", args.floor))?;

    match args.format {
        Format::Ascii => {
            println!("Floor {} (seed {}, floor seed {})", floor.floor, run_seed, floor.floor_seed);
            println!("Fingerprint: {:016x}", floor.maze.fingerprint());
            println!("Start reaches goal: {}", floor.start_reachable);
            println!();
            print!("{}", render(floor.maze.grid()));
            println!();
            print!("{}", render(floor.stage.physical()));
            println!();
            println!("Player spawn: {:?}", floor.spawns.player.position);
            println!("Searchers: {}", floor.spawns.searchers.len());
            println!("Pursuers: {}", floor.spawns.pursuers.len());
        }
        Format::Json => {
            let report =
                FloorReport { run_seed, colliders: floor.stage.collider_spans(), floor: &floor };
            let json = serde_json::to_string_pretty(&report)
                .with_context(|| "Failed to serialize floor report")?;
            println!("{json}");
        }
    }

    Ok(())
}
