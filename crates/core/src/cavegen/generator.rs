//! Pipeline orchestration: fill, smooth, filter, connect, carve, pad.

use log::debug;

use crate::error::ConfigError;

use super::border::pad_with_border;
use super::config::GeneratorConfig;
use super::fill::random_fill;
use super::model::CaveMap;
use super::passages::carve_passages;
use super::regions::filter_regions;
use super::rooms::RoomGraph;
use super::seed::resolve_seed;
use super::smooth::smooth;

#[derive(Clone, Debug)]
pub struct CaveGenerator {
    config: GeneratorConfig,
}

impl CaveGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs the pipeline with the configured seed, or a fresh one when
    /// `randomize` is set.
    pub fn generate(&self) -> CaveMap {
        self.generate_with_seed(resolve_seed(&self.config.seed, self.config.randomize))
    }

    pub fn generate_with_seed(&self, seed: u64) -> CaveMap {
        let config = &self.config;
        let mut grid = random_fill(config.width, config.height, seed, config.fill_percent);
        smooth(&mut grid, config.smooth_passes);

        let regions = filter_regions(&mut grid, config.wall_threshold, config.room_threshold);
        let rooms = RoomGraph::build(&grid, regions);
        if let Some(radius) = config.passage_radius {
            carve_passages(&mut grid, rooms.connections(), radius);
        }

        let grid = pad_with_border(&grid, config.border_size);
        debug!(
            "generated {}x{} cave from seed {seed}: {} rooms, {} connections",
            grid.width(),
            grid.height(),
            rooms.len(),
            rooms.connections().len()
        );
        CaveMap { seed, border_size: config.border_size, grid, rooms }
    }
}
