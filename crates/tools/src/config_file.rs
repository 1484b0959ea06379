//! TOML config loading and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cave_core::{GeneratorConfig, Seed};
use clap::Args;

/// Flags that replace individual fields of the loaded config.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    #[arg(long)]
    pub width: Option<usize>,
    #[arg(long)]
    pub height: Option<usize>,
    /// Digits are used as a number; anything else is hashed.
    #[arg(long)]
    pub seed: Option<Seed>,
    /// Ignore the configured seed and draw a fresh one.
    #[arg(long)]
    pub randomize: bool,
    #[arg(long)]
    pub fill_percent: Option<u32>,
    #[arg(long)]
    pub smooth_passes: Option<u32>,
    #[arg(long)]
    pub wall_threshold: Option<usize>,
    #[arg(long)]
    pub room_threshold: Option<usize>,
    #[arg(long)]
    pub border_size: Option<usize>,
    /// Carve connections into the map with this brush radius.
    #[arg(long)]
    pub passage_radius: Option<u32>,
}

impl Overrides {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = &self.seed {
            config.seed = seed.clone();
        }
        if self.randomize {
            config.randomize = true;
        }
        if let Some(fill_percent) = self.fill_percent {
            config.fill_percent = fill_percent;
        }
        if let Some(passes) = self.smooth_passes {
            config.smooth_passes = passes;
        }
        if let Some(threshold) = self.wall_threshold {
            config.wall_threshold = threshold;
        }
        if let Some(threshold) = self.room_threshold {
            config.room_threshold = threshold;
        }
        if let Some(border_size) = self.border_size {
            config.border_size = border_size;
        }
        if self.passage_radius.is_some() {
            config.passage_radius = self.passage_radius;
        }
    }
}

pub fn load(path: &Path) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Defaults, then the optional file, then flags.
pub fn resolve(path: Option<&Path>, overrides: &Overrides) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => load(path)?,
        None => GeneratorConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}
