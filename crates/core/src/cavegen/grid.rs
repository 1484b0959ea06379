//! Row-major tile storage shared by every pipeline stage.

use crate::types::{Coord, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// True for cells on the outermost row or column.
    pub fn is_edge(&self, pos: Coord) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.x as usize == self.width - 1
            || pos.y as usize == self.height - 1
    }

    pub fn get(&self, pos: Coord) -> Option<Tile> {
        self.in_bounds(pos).then(|| self.tiles[self.index(pos)])
    }

    /// Out-of-bounds cells read as `Wall`.
    pub fn tile_at(&self, pos: Coord) -> Tile {
        self.get(pos).unwrap_or(Tile::Wall)
    }

    pub fn set(&mut self, pos: Coord, tile: Tile) {
        assert!(
            self.in_bounds(pos),
            "tile write outside {}x{} grid at {pos:?}",
            self.width,
            self.height
        );
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord { y, x }))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    /// One line per row, `#` for walls and `.` for open tiles.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|tile| tile.glyph()));
            out.push('\n');
        }
        out
    }

    pub(crate) fn index(&self, pos: Coord) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    #[cfg(test)]
    pub(crate) fn from_glyphs(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "ragged fixture row {row:?}");
            tiles.extend(row.chars().map(|glyph| match glyph {
                '#' => Tile::Wall,
                '.' => Tile::Open,
                other => panic!("unknown fixture glyph {other:?}"),
            }));
        }
        Self { width, height, tiles }
    }
}
