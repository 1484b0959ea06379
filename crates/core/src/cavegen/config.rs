//! Generator options and their up-front validation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::seed::Seed;

pub const MIN_DIMENSION: usize = 3;
/// Upper bound on the padded output width and height.
pub const MAX_DIMENSION: usize = 16_384;
/// Largest accepted passage brush radius.
pub const MAX_PASSAGE_RADIUS: u32 = MAX_DIMENSION as u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Seed,
    /// Draw a fresh time-derived seed on every run instead of using `seed`.
    pub randomize: bool,
    /// Chance, in percent, that an interior tile starts as a wall.
    pub fill_percent: u32,
    pub smooth_passes: u32,
    /// Interior wall regions smaller than this are opened up.
    pub wall_threshold: usize,
    /// Open regions smaller than this are filled in; the rest become rooms.
    pub room_threshold: usize,
    pub border_size: usize,
    /// Carve each room connection into the grid with this brush radius.
    pub passage_radius: Option<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            seed: Seed::default(),
            randomize: false,
            fill_percent: 45,
            smooth_passes: 5,
            wall_threshold: 50,
            room_threshold: 50,
            border_size: 5,
            passage_radius: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(ConfigError::DimensionsTooSmall { width: self.width, height: self.height });
        }
        if self.fill_percent > 100 {
            return Err(ConfigError::FillPercentOutOfRange(self.fill_percent));
        }
        let fits = |extent: usize| {
            padded_extent(extent, self.border_size).is_some_and(|padded| padded <= MAX_DIMENSION)
        };
        if !fits(self.width) || !fits(self.height) {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
                border_size: self.border_size,
            });
        }
        if let Some(radius) = self.passage_radius
            && radius > MAX_PASSAGE_RADIUS
        {
            return Err(ConfigError::PassageRadiusTooLarge(radius));
        }
        Ok(())
    }

    pub fn padded_width(&self) -> usize {
        self.width + 2 * self.border_size
    }

    pub fn padded_height(&self) -> usize {
        self.height + 2 * self.border_size
    }
}

fn padded_extent(extent: usize, border_size: usize) -> Option<usize> {
    border_size.checked_mul(2).and_then(|ring| ring.checked_add(extent))
}
