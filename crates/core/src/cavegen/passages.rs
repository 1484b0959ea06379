//! Line traces between connected rooms and optional passage carving.

use log::debug;

use crate::types::{Coord, Tile};

use super::grid::Grid;
use super::rooms::Connection;

/// Integer line from `from` to `to`, stepping one tile along the dominant axis
/// each time. Both endpoints are included.
pub(super) fn line(from: Coord, to: Coord) -> Vec<Coord> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let inverted = dx.abs() < dy.abs();
    let (longest, shortest, step, gradient_step) = if inverted {
        (dy.abs(), dx.abs(), dy.signum(), dx.signum())
    } else {
        (dx.abs(), dy.abs(), dx.signum(), dy.signum())
    };

    let mut tiles = Vec::with_capacity(longest as usize + 1);
    let mut pos = from;
    let mut accumulation = longest / 2;
    for _ in 0..longest {
        tiles.push(pos);
        if inverted {
            pos.y += step;
        } else {
            pos.x += step;
        }

        accumulation += shortest;
        if accumulation >= longest {
            if inverted {
                pos.x += gradient_step;
            } else {
                pos.y += gradient_step;
            }
            accumulation -= longest;
        }
    }
    tiles.push(pos);
    tiles
}

/// Opens a disc of `radius` around every tile of every connection line.
/// The outermost ring of the grid is never touched.
pub(super) fn carve_passages(grid: &mut Grid, connections: &[Connection], radius: u32) {
    let radius = i64::from(radius);
    let limit = radius.saturating_mul(radius);
    // Interior bounds; discs are clipped to them before iterating.
    let max_x = grid.width() as i64 - 2;
    let max_y = grid.height() as i64 - 2;

    let mut opened = 0_usize;
    for connection in connections {
        for center in connection.line() {
            let (cx, cy) = (i64::from(center.x), i64::from(center.y));
            for y in (cy - radius).max(1)..=(cy + radius).min(max_y) {
                for x in (cx - radius).max(1)..=(cx + radius).min(max_x) {
                    let (dx, dy) = (x - cx, y - cy);
                    if dx * dx + dy * dy > limit {
                        continue;
                    }
                    let pos = Coord { y: y as i32, x: x as i32 };
                    if grid.tile_at(pos) == Tile::Wall {
                        grid.set(pos, Tile::Open);
                        opened += 1;
                    }
                }
            }
        }
    }
    debug!("carved {} passages, opening {opened} wall tiles", connections.len());
}
