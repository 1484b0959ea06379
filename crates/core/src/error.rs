//! Configuration errors surfaced before any generation work starts.

use thiserror::Error;

use crate::cavegen::{MAX_DIMENSION, MAX_PASSAGE_RADIUS, MIN_DIMENSION};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("map must be at least {min}x{min} tiles, got {width}x{height}", min = MIN_DIMENSION)]
    DimensionsTooSmall { width: usize, height: usize },

    #[error(
        "map {width}x{height} with border {border_size} exceeds {max} tiles",
        max = MAX_DIMENSION
    )]
    DimensionsTooLarge { width: usize, height: usize, border_size: usize },

    #[error("fill percent must be within 0..=100, got {0}")]
    FillPercentOutOfRange(u32),

    #[error("passage radius must be at most {max}, got {0}", max = MAX_PASSAGE_RADIUS)]
    PassageRadiusTooLarge(u32),
}
