//! Solid border padding around the finished interior grid.

use crate::types::{Coord, Tile};

use super::grid::Grid;

pub(super) fn pad_with_border(interior: &Grid, border_size: usize) -> Grid {
    let mut padded = Grid::filled(
        interior.width() + 2 * border_size,
        interior.height() + 2 * border_size,
        Tile::Wall,
    );
    let offset = border_size as i32;
    for pos in interior.coords() {
        padded.set(Coord { y: pos.y + offset, x: pos.x + offset }, interior.tile_at(pos));
    }
    padded
}
