use std::ops::Range;

use anyhow::{Context, Result, ensure};
use cave_core::{CaveGenerator, CaveMap, GeneratorConfig, Seed, Tile};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, info};

/// Generates a run of seeds and checks the structural guarantees of each map.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 0)]
    start: u64,
    #[arg(short, long, default_value_t = 200)]
    count: u64,
    #[arg(long, default_value_t = 64)]
    width: usize,
    #[arg(long, default_value_t = 48)]
    height: usize,
    #[arg(long)]
    passage_radius: Option<u32>,
}

fn check_border(map: &CaveMap) -> Result<()> {
    let ring = map.border_size + 1;
    for pos in map.grid.coords() {
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < ring || y < ring || x >= map.width() - ring || y >= map.height() - ring {
            ensure!(map.tile_at(pos) == Tile::Wall, "border tile {pos:?} is open");
        }
    }
    Ok(())
}

fn seed_range(start: u64, count: u64) -> Result<Range<u64>> {
    let end = start.checked_add(count).context("seed range runs past u64::MAX")?;
    Ok(start..end)
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let seeds = seed_range(args.start, args.count)?;

    info!("Sweeping seeds {seeds:?}");
    let mut empty_maps = 0_u64;
    for seed in seeds {
        let config = GeneratorConfig {
            width: args.width,
            height: args.height,
            seed: Seed::Number(seed),
            passage_radius: args.passage_radius,
            ..GeneratorConfig::default()
        };
        let generator = CaveGenerator::new(config)?;
        let map = generator.generate();

        let expected = (generator.config().padded_width(), generator.config().padded_height());
        ensure!((map.width(), map.height()) == expected, "seed {seed}: wrong output size");
        check_border(&map).map_err(|err| err.context(format!("seed {seed}")))?;
        ensure!(map.rooms.all_accessible(), "seed {seed}: unreachable room");
        let again = generator.generate();
        ensure!(map.fingerprint() == again.fingerprint(), "seed {seed}: nondeterministic output");

        if map.rooms.is_empty() {
            empty_maps += 1;
        }
        debug!("seed {seed}: {} rooms, {:016x}", map.rooms.len(), map.fingerprint());
    }

    info!("Sweep completed: {} maps checked, {empty_maps} without rooms.", args.count);
    Ok(())
}
