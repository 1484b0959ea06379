//! Procedural cave generation split into one submodule per pipeline stage.

mod border;
mod config;
mod fill;
mod generator;
mod grid;
mod model;
mod passages;
mod regions;
mod rooms;
mod seed;
mod smooth;

pub use config::{GeneratorConfig, MAX_DIMENSION, MAX_PASSAGE_RADIUS, MIN_DIMENSION};
pub use generator::CaveGenerator;
pub use grid::Grid;
pub use model::CaveMap;
pub use rooms::{Connection, Room, RoomGraph, RoomId};
pub use seed::{Seed, runtime_seed};

use crate::error::ConfigError;

/// Validates `config` and runs the full pipeline once.
pub fn generate(config: &GeneratorConfig) -> Result<CaveMap, ConfigError> {
    Ok(CaveGenerator::new(config.clone())?.generate())
}
