pub mod cavegen;
pub mod error;
pub mod types;

pub use cavegen::{
    CaveGenerator, CaveMap, Connection, GeneratorConfig, Grid, MAX_DIMENSION, MAX_PASSAGE_RADIUS,
    MIN_DIMENSION, Room, RoomGraph, RoomId, Seed, generate,
};
pub use error::ConfigError;
pub use types::*;
