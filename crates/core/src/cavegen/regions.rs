//! Flood-fill region extraction and size-threshold filtering.

use std::collections::VecDeque;

use log::debug;

use crate::types::{Coord, Tile};

use super::grid::Grid;

/// A maximal 4-connected set of tiles sharing one value, in flood-fill order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Region {
    pub(super) tiles: Vec<Coord>,
}

impl Region {
    pub(super) fn len(&self) -> usize {
        self.tiles.len()
    }

    pub(super) fn touches_edge(&self, grid: &Grid) -> bool {
        self.tiles.iter().any(|&pos| grid.is_edge(pos))
    }
}

pub(super) fn extract_regions(grid: &Grid, tile: Tile) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for pos in grid.coords() {
        if visited[grid.index(pos)] || grid.tile_at(pos) != tile {
            continue;
        }
        regions.push(Region { tiles: flood_fill(grid, pos, &mut visited) });
    }
    regions
}

fn flood_fill(grid: &Grid, start: Coord, visited: &mut [bool]) -> Vec<Coord> {
    let tile = grid.tile_at(start);
    let mut tiles = Vec::new();
    let mut open = VecDeque::from([start]);
    visited[grid.index(start)] = true;

    while let Some(pos) = open.pop_front() {
        tiles.push(pos);
        for next in pos.orthogonal_neighbors() {
            if grid.get(next) != Some(tile) {
                continue;
            }
            let index = grid.index(next);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            open.push_back(next);
        }
    }
    tiles
}

/// Opens undersized interior wall islands, fills undersized open pockets, and
/// returns the surviving open regions in extraction order.
///
/// Wall regions touching the grid edge carry the map border and are kept
/// regardless of size.
pub(super) fn filter_regions(
    grid: &mut Grid,
    wall_threshold: usize,
    room_threshold: usize,
) -> Vec<Region> {
    let mut walls_removed = 0_usize;
    for region in extract_regions(grid, Tile::Wall) {
        if region.len() < wall_threshold && !region.touches_edge(grid) {
            fill_region(grid, &region, Tile::Open);
            walls_removed += 1;
        }
    }

    let mut pockets_removed = 0_usize;
    let mut survivors = Vec::new();
    for region in extract_regions(grid, Tile::Open) {
        if region.len() < room_threshold {
            fill_region(grid, &region, Tile::Wall);
            pockets_removed += 1;
        } else {
            survivors.push(region);
        }
    }

    debug!(
        "opened {walls_removed} wall islands, filled {pockets_removed} pockets, kept {} rooms",
        survivors.len()
    );
    survivors
}

fn fill_region(grid: &mut Grid, region: &Region, tile: Tile) {
    for &pos in &region.tiles {
        grid.set(pos, tile);
    }
}
