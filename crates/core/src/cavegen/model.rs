//! The finished cave handed to downstream consumers.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Coord, Tile};

use super::grid::Grid;
use super::rooms::RoomGraph;

/// Padded tile grid plus the room graph that produced its connectivity.
///
/// Room and connection coordinates are interior-grid coordinates; use
/// [`CaveMap::to_output_coord`] to place them on the padded grid.
#[derive(Clone, Debug)]
pub struct CaveMap {
    /// The numeric seed the run actually used.
    pub seed: u64,
    pub border_size: usize,
    pub grid: Grid,
    pub rooms: RoomGraph,
}

impl CaveMap {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Reads the padded grid; out-of-bounds cells read as `Wall`.
    pub fn tile_at(&self, pos: Coord) -> Tile {
        self.grid.tile_at(pos)
    }

    pub fn to_output_coord(&self, interior: Coord) -> Coord {
        let offset = self.border_size as i32;
        Coord { y: interior.y + offset, x: interior.x + offset }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        bytes.extend((self.border_size as u32).to_le_bytes());
        for tile in self.grid.tiles() {
            bytes.push(match tile {
                Tile::Wall => 0,
                Tile::Open => 1,
            });
        }

        let indices = self.rooms.dense_indices();
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for (_, room) in self.rooms.iter() {
            bytes.extend((room.size() as u32).to_le_bytes());
            bytes.extend((room.edge_tiles().len() as u32).to_le_bytes());
            let flags =
                u8::from(room.is_main_room()) | (u8::from(room.is_accessible_from_main()) << 1);
            bytes.push(flags);
            bytes.extend((room.connected_rooms().len() as u32).to_le_bytes());
            for &other in room.connected_rooms() {
                bytes.extend((indices[other] as u32).to_le_bytes());
            }
        }

        bytes.extend((self.rooms.connections().len() as u32).to_le_bytes());
        for connection in self.rooms.connections() {
            bytes.extend((indices[connection.room_a] as u32).to_le_bytes());
            bytes.extend((indices[connection.room_b] as u32).to_le_bytes());
            for tile in [connection.tile_a, connection.tile_b] {
                bytes.extend(tile.y.to_le_bytes());
                bytes.extend(tile.x.to_le_bytes());
            }
        }

        bytes
    }

    /// Stable digest of [`CaveMap::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
