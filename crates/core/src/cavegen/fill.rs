//! Seeded random initialization with a forced solid border.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use crate::types::Tile;

use super::grid::Grid;

pub(super) fn random_fill(width: usize, height: usize, seed: u64, fill_percent: u32) -> Grid {
    debug_assert!(fill_percent <= 100);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::filled(width, height, Tile::Wall);

    for pos in grid.coords() {
        if grid.is_edge(pos) {
            continue;
        }
        let roll = rng.next_u64() % 100;
        let tile = if roll < u64::from(fill_percent) { Tile::Wall } else { Tile::Open };
        grid.set(pos, tile);
    }
    grid
}
