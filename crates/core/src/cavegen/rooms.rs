//! Room arena and the greedy passes that link every room back to the main room.
//!
//! Rooms live in a [`SlotMap`] and refer to each other through [`RoomId`]
//! handles, so adjacency never forms ownership cycles.

use log::{debug, trace};
use slotmap::{SecondaryMap, SlotMap, new_key_type};

use crate::types::{Coord, Tile};

use super::grid::Grid;
use super::passages::line;
use super::regions::Region;

new_key_type! {
    pub struct RoomId;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    tiles: Vec<Coord>,
    edge_tiles: Vec<Coord>,
    connected_rooms: Vec<RoomId>,
    is_main_room: bool,
    is_accessible_from_main: bool,
}

impl Room {
    fn new(grid: &Grid, tiles: Vec<Coord>) -> Self {
        let edge_tiles: Vec<Coord> = tiles
            .iter()
            .copied()
            .filter(|pos| {
                pos.orthogonal_neighbors().into_iter().any(|next| grid.tile_at(next) == Tile::Wall)
            })
            .collect();
        assert!(!edge_tiles.is_empty(), "room of {} tiles has no edge tiles", tiles.len());

        Self {
            tiles,
            edge_tiles,
            connected_rooms: Vec::new(),
            is_main_room: false,
            is_accessible_from_main: false,
        }
    }

    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    /// Room tiles with a wall directly above, below, or beside them.
    pub fn edge_tiles(&self) -> &[Coord] {
        &self.edge_tiles
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn connected_rooms(&self) -> &[RoomId] {
        &self.connected_rooms
    }

    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connected_rooms.contains(&other)
    }

    pub fn is_main_room(&self) -> bool {
        self.is_main_room
    }

    pub fn is_accessible_from_main(&self) -> bool {
        self.is_accessible_from_main
    }
}

/// Link between two rooms through their closest pair of edge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
    pub room_a: RoomId,
    pub room_b: RoomId,
    pub tile_a: Coord,
    pub tile_b: Coord,
}

impl Connection {
    pub fn squared_length(&self) -> i64 {
        self.tile_a.squared_distance(self.tile_b)
    }

    /// Rasterised tiles from `tile_a` to `tile_b`, both endpoints included.
    pub fn line(&self) -> Vec<Coord> {
        line(self.tile_a, self.tile_b)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RoomGraph {
    rooms: SlotMap<RoomId, Room>,
    main_room: Option<RoomId>,
    connections: Vec<Connection>,
}

impl RoomGraph {
    pub(super) fn build(grid: &Grid, regions: Vec<Region>) -> Self {
        let mut graph = Self::default();
        for region in regions {
            graph.rooms.insert(Room::new(grid, region.tiles));
        }

        graph.designate_main_room();
        graph.connect_isolated_rooms();
        let local_connections = graph.connections.len();
        graph.connect_until_accessible();

        debug!(
            "room graph: {} rooms, {} local connections, {} reachability repairs",
            graph.rooms.len(),
            local_connections,
            graph.connections.len() - local_connections
        );
        graph
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Rooms in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter()
    }

    pub fn main_room(&self) -> Option<RoomId> {
        self.main_room
    }

    /// Connections in the order they were made.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn all_accessible(&self) -> bool {
        self.rooms.values().all(Room::is_accessible_from_main)
    }

    /// Maps each handle to its position in discovery order.
    pub fn dense_indices(&self) -> SecondaryMap<RoomId, usize> {
        self.rooms.keys().enumerate().map(|(index, id)| (id, index)).collect()
    }

    fn designate_main_room(&mut self) {
        let mut largest: Option<(RoomId, usize)> = None;
        for (id, room) in &self.rooms {
            if largest.is_none_or(|(_, size)| room.size() > size) {
                largest = Some((id, room.size()));
            }
        }

        if let Some((id, _)) = largest {
            let room = &mut self.rooms[id];
            room.is_main_room = true;
            room.is_accessible_from_main = true;
            self.main_room = Some(id);
        }
    }

    /// Links every still-isolated room to its nearest neighbour.
    fn connect_isolated_rooms(&mut self) {
        let ids: Vec<RoomId> = self.rooms.keys().collect();
        for &from in &ids {
            if !self.rooms[from].connected_rooms.is_empty() {
                continue;
            }

            let mut best = None;
            for &to in &ids {
                if to != from {
                    offer_candidate(&mut best, (from, &self.rooms[from]), (to, &self.rooms[to]));
                }
            }

            if let Some(candidate) = best
                && !self.rooms[from].is_connected(candidate.connection.room_b)
            {
                self.connect(candidate.connection);
            }
        }
    }

    /// Repeatedly bridges the closest unreachable room to the reachable set.
    fn connect_until_accessible(&mut self) {
        loop {
            let mut best = None;
            for (from_id, from) in &self.rooms {
                if from.is_accessible_from_main {
                    continue;
                }
                for (to_id, to) in &self.rooms {
                    if to.is_accessible_from_main {
                        offer_candidate(&mut best, (from_id, from), (to_id, to));
                    }
                }
            }

            let Some(candidate) = best else {
                break;
            };
            self.connect(candidate.connection);
        }
    }

    fn connect(&mut self, connection: Connection) {
        let Connection { room_a, room_b, .. } = connection;
        self.rooms[room_a].connected_rooms.push(room_b);
        self.rooms[room_b].connected_rooms.push(room_a);

        if self.rooms[room_a].is_accessible_from_main {
            self.mark_accessible(room_b);
        } else if self.rooms[room_b].is_accessible_from_main {
            self.mark_accessible(room_a);
        }

        trace!(
            "connected rooms via {:?} -> {:?} (squared length {})",
            connection.tile_a,
            connection.tile_b,
            connection.squared_length()
        );
        self.connections.push(connection);
    }

    fn mark_accessible(&mut self, start: RoomId) {
        let mut pending = vec![start];
        while let Some(id) = pending.pop() {
            let room = &mut self.rooms[id];
            if room.is_accessible_from_main {
                continue;
            }
            room.is_accessible_from_main = true;
            pending.extend(room.connected_rooms.iter().copied());
        }
    }
}

struct Candidate {
    distance: i64,
    connection: Connection,
}

/// Replaces `best` only on a strictly shorter link, so ties keep the first
/// pair seen in room then edge-tile order.
fn offer_candidate(best: &mut Option<Candidate>, from: (RoomId, &Room), to: (RoomId, &Room)) {
    let (from_id, from_room) = from;
    let (to_id, to_room) = to;
    for &tile_a in &from_room.edge_tiles {
        for &tile_b in &to_room.edge_tiles {
            let distance = tile_a.squared_distance(tile_b);
            if best.as_ref().is_none_or(|current| distance < current.distance) {
                *best = Some(Candidate {
                    distance,
                    connection: Connection { room_a: from_id, room_b: to_id, tile_a, tile_b },
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::cavegen::fill::random_fill;
    use crate::cavegen::regions::{extract_regions, filter_regions};
    use crate::cavegen::smooth::smooth;

    const TWO_CLUSTERS: [&str; 4] = [
        "####################",
        "#..#..######..#....#",
        "#..#..######..#....#",
        "####################",
    ];

    fn graph_for(rows: &[&str]) -> (RoomGraph, Vec<RoomId>) {
        let grid = Grid::from_glyphs(rows);
        let graph = RoomGraph::build(&grid, extract_regions(&grid, Tile::Open));
        let ids = graph.iter().map(|(id, _)| id).collect();
        (graph, ids)
    }

    #[test]
    fn empty_room_set_builds_an_empty_graph() {
        let grid = Grid::filled(5, 5, Tile::Wall);
        let graph = RoomGraph::build(&grid, Vec::new());
        assert!(graph.is_empty());
        assert_eq!(graph.main_room(), None);
        assert!(graph.connections().is_empty());
        assert!(graph.all_accessible());
    }

    #[test]
    fn lone_room_is_main_and_needs_no_connections() {
        let (graph, ids) = graph_for(&["#####", "#...#", "#####"]);
        assert_eq!(graph.main_room(), Some(ids[0]));
        let room = graph.get(ids[0]).expect("room exists");
        assert!(room.is_main_room() && room.is_accessible_from_main());
        assert!(graph.connections().is_empty());
    }

    #[test]
    fn main_room_ties_go_to_the_first_room_found() {
        let (graph, ids) = graph_for(&["#######", "#..#..#", "#######"]);
        assert_eq!(graph.main_room(), Some(ids[0]));
        assert_eq!(graph.iter().filter(|(_, room)| room.is_main_room()).count(), 1);
    }

    #[test]
    fn edge_tiles_exclude_fully_enclosed_tiles() {
        let (graph, ids) = graph_for(&["#####", "#...#", "#...#", "#...#", "#####"]);
        let room = graph.get(ids[0]).expect("room exists");
        assert_eq!(room.size(), 9);
        assert_eq!(room.edge_tiles().len(), 8);
        assert!(!room.edge_tiles().contains(&Coord::new(2, 2)));
    }

    #[test]
    fn isolated_rooms_link_to_their_nearest_neighbour() {
        let (graph, ids) = graph_for(&[
            "#############",
            "#..#....#..##",
            "#..#....#..##",
            "#############",
        ]);
        let (left, middle, right) = (ids[0], ids[1], ids[2]);

        assert_eq!(graph.main_room(), Some(middle));
        assert_eq!(
            graph.connections(),
            &[
                Connection {
                    room_a: left,
                    room_b: middle,
                    tile_a: Coord::new(2, 1),
                    tile_b: Coord::new(4, 1),
                },
                Connection {
                    room_a: right,
                    room_b: middle,
                    tile_a: Coord::new(9, 1),
                    tile_b: Coord::new(7, 1),
                },
            ]
        );
        assert!(graph.all_accessible());
    }

    #[test]
    fn unreachable_clusters_are_bridged_to_the_main_room() {
        // Two pairs link among themselves first; only the right pair holds the main room.
        let (graph, ids) = graph_for(&TWO_CLUSTERS);
        let (p, q, r, main) = (ids[0], ids[1], ids[2], ids[3]);

        assert_eq!(graph.main_room(), Some(main));
        let links: Vec<_> = graph
            .connections()
            .iter()
            .map(|c| (c.room_a, c.room_b, c.tile_a, c.tile_b))
            .collect();
        assert_eq!(
            links,
            vec![
                (p, q, Coord::new(2, 1), Coord::new(4, 1)),
                (r, main, Coord::new(13, 1), Coord::new(15, 1)),
                (q, r, Coord::new(5, 1), Coord::new(12, 1)),
            ]
        );
        assert!(graph.all_accessible());
    }

    #[test]
    fn accessibility_spreads_through_existing_links() {
        let (graph, ids) = graph_for(&TWO_CLUSTERS);
        let p = graph.get(ids[0]).expect("room exists");
        assert!(p.is_accessible_from_main(), "p reaches main only through q and r");
        assert_eq!(p.connected_rooms(), &[ids[1]]);
    }

    fn reachable_from_main(graph: &RoomGraph) -> BTreeSet<usize> {
        let indices = graph.dense_indices();
        let mut seen = BTreeSet::new();
        let Some(main) = graph.main_room() else {
            return seen;
        };
        let mut open = VecDeque::from([main]);
        seen.insert(indices[main]);
        while let Some(id) = open.pop_front() {
            for &next in graph.get(id).expect("room exists").connected_rooms() {
                if seen.insert(indices[next]) {
                    open.push_back(next);
                }
            }
        }
        seen
    }

    proptest! {
        #[test]
        fn every_room_ends_up_reachable_from_main(seed in any::<u64>(), threshold in 1_usize..30) {
            let mut grid = random_fill(40, 30, seed, 47);
            smooth(&mut grid, 4);
            let regions = filter_regions(&mut grid, threshold, threshold);
            let graph = RoomGraph::build(&grid, regions);

            prop_assert!(graph.all_accessible());
            prop_assert_eq!(reachable_from_main(&graph).len(), graph.len());
            if !graph.is_empty() {
                prop_assert!(graph.connections().len() >= graph.len() - 1);
                prop_assert_eq!(graph.iter().filter(|(_, room)| room.is_main_room()).count(), 1);
            }

            for (id, room) in graph.iter() {
                for &other in room.connected_rooms() {
                    let back = graph.get(other).expect("linked room exists");
                    prop_assert!(back.is_connected(id), "adjacency must be symmetric");
                }
            }
            for connection in graph.connections() {
                let a = graph.get(connection.room_a).expect("room exists");
                let b = graph.get(connection.room_b).expect("room exists");
                prop_assert!(a.edge_tiles().contains(&connection.tile_a));
                prop_assert!(b.edge_tiles().contains(&connection.tile_b));
            }
        }
    }
}
