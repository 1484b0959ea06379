use serde::{Deserialize, Serialize};

/// Grid-local tile coordinate. Ordering is row-major (`y` before `x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub y: i32,
    pub x: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn squared_distance(self, other: Coord) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// 4-connected neighbours in the fixed order up, right, down, left.
    pub fn orthogonal_neighbors(self) -> [Coord; 4] {
        [
            Coord { y: self.y - 1, x: self.x },
            Coord { y: self.y, x: self.x + 1 },
            Coord { y: self.y + 1, x: self.x },
            Coord { y: self.y, x: self.x - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Open,
}

impl Tile {
    pub fn opposite(self) -> Self {
        match self {
            Self::Wall => Self::Open,
            Self::Open => Self::Wall,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
        }
    }
}
