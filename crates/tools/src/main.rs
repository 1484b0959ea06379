use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cave_core::{CaveMap, generate};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::info;

mod config_file;
mod export;

use config_file::Overrides;
use export::ExportedCave;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file holding a generator config
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    overrides: Overrides,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Write here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn render(map: &CaveMap, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(map.grid.render()),
        Format::Json => serde_json::to_string_pretty(&ExportedCave::from_map(map))
            .context("Failed to serialize cave as JSON"),
    }
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = config_file::resolve(cli.config.as_deref(), &cli.overrides)?;
    let map = generate(&config).context("Invalid generator configuration")?;
    info!(
        "seed {} -> {}x{} map, {} rooms, {} connections, fingerprint {:016x}",
        map.seed,
        map.width(),
        map.height(),
        map.rooms.len(),
        map.rooms.connections().len(),
        map.fingerprint()
    );

    let body = render(&map, cli.format)?;
    match &cli.output {
        Some(path) => fs::write(path, body)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => io::stdout().lock().write_all(body.as_bytes()).context("Failed to write stdout")?,
    }
    Ok(())
}
