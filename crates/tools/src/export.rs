//! JSON view of a finished cave.
//!
//! Room handles are replaced by dense indices and all coordinates are in
//! output-grid space, so they line up with `rows`.

use cave_core::{CaveMap, Coord, Tile};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ExportedCave {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub border_size: usize,
    pub fingerprint: String,
    pub rows: Vec<String>,
    pub main_room: Option<usize>,
    pub rooms: Vec<ExportedRoom>,
    pub connections: Vec<ExportedConnection>,
}

#[derive(Serialize, Debug)]
pub struct ExportedRoom {
    pub size: usize,
    pub is_main_room: bool,
    pub is_accessible_from_main: bool,
    pub connected_rooms: Vec<usize>,
    pub tiles: Vec<Coord>,
    pub edge_tiles: Vec<Coord>,
}

#[derive(Serialize, Debug)]
pub struct ExportedConnection {
    pub room_a: usize,
    pub room_b: usize,
    pub tile_a: Coord,
    pub tile_b: Coord,
}

impl ExportedCave {
    pub fn from_map(map: &CaveMap) -> Self {
        let indices = map.rooms.dense_indices();
        let to_output = |tiles: &[Coord]| -> Vec<Coord> {
            tiles.iter().map(|&tile| map.to_output_coord(tile)).collect()
        };

        let rooms = map
            .rooms
            .iter()
            .map(|(_, room)| ExportedRoom {
                size: room.size(),
                is_main_room: room.is_main_room(),
                is_accessible_from_main: room.is_accessible_from_main(),
                connected_rooms: room.connected_rooms().iter().map(|&id| indices[id]).collect(),
                tiles: to_output(room.tiles()),
                edge_tiles: to_output(room.edge_tiles()),
            })
            .collect();

        let connections = map
            .rooms
            .connections()
            .iter()
            .map(|link| ExportedConnection {
                room_a: indices[link.room_a],
                room_b: indices[link.room_b],
                tile_a: map.to_output_coord(link.tile_a),
                tile_b: map.to_output_coord(link.tile_b),
            })
            .collect();

        Self {
            seed: map.seed,
            width: map.width(),
            height: map.height(),
            border_size: map.border_size,
            fingerprint: format!("{:016x}", map.fingerprint()),
            rows: map.grid.rows().map(render_row).collect(),
            main_room: map.rooms.main_room().map(|id| indices[id]),
            rooms,
            connections,
        }
    }
}

fn render_row(row: &[Tile]) -> String {
    row.iter().map(|tile| tile.glyph()).collect()
}
