//! Cellular-automaton smoothing with the 3x3 majority rule.

use crate::types::{Coord, Tile};

use super::grid::Grid;

pub(super) fn smooth(grid: &mut Grid, passes: u32) {
    for _ in 0..passes {
        let snapshot = grid.clone();
        for pos in snapshot.coords() {
            match surrounding_wall_count(&snapshot, pos) {
                count if count > 4 => grid.set(pos, Tile::Wall),
                count if count < 4 => grid.set(pos, Tile::Open),
                _ => {}
            }
        }
    }
}

/// Walls among the eight neighbours; cells beyond the grid count as walls.
pub(super) fn surrounding_wall_count(grid: &Grid, pos: Coord) -> u8 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let neighbor = Coord { y: pos.y + dy, x: pos.x + dx };
            if grid.tile_at(neighbor) == Tile::Wall {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::cavegen::fill::random_fill;

    #[test]
    fn zero_passes_is_a_no_op() {
        let original = random_fill(25, 25, 5, 50);
        let mut grid = original.clone();
        smooth(&mut grid, 0);
        assert_eq!(grid, original);
    }

    #[test]
    fn corner_cells_see_five_out_of_bounds_walls() {
        let grid = Grid::filled(4, 4, Tile::Open);
        assert_eq!(surrounding_wall_count(&grid, Coord::new(0, 0)), 5);
        assert_eq!(surrounding_wall_count(&grid, Coord::new(1, 0)), 3);
        assert_eq!(surrounding_wall_count(&grid, Coord::new(1, 1)), 0);
    }

    #[test]
    fn rounds_read_from_a_pre_round_snapshot() {
        // Updated in place, this grid would collapse into solid wall.
        let mut grid = Grid::from_glyphs(&["#..##", "#..##", ".#.##", ".#..#", "#..##"]);
        smooth(&mut grid, 1);
        let expected = Grid::from_glyphs(&["#####", "#..##", "#..##", "#..##", "#####"]);
        assert_eq!(grid, expected);
    }

    #[test]
    fn ties_at_four_keep_the_current_tile() {
        let mut grid = Grid::from_glyphs(&["##.", "#..", "..#"]);
        assert_eq!(surrounding_wall_count(&grid, Coord::new(1, 1)), 4);
        smooth(&mut grid, 1);
        assert_eq!(grid.tile_at(Coord::new(1, 1)), Tile::Open);
    }

    proptest! {
        #[test]
        fn solid_wall_grids_are_fixed_points(
            width in 3_usize..24,
            height in 3_usize..24,
            passes in 0_u32..6,
        ) {
            let original = Grid::filled(width, height, Tile::Wall);
            let mut grid = original.clone();
            smooth(&mut grid, passes);
            prop_assert_eq!(grid, original);
        }

        #[test]
        fn open_grids_only_close_their_corners(
            width in 4_usize..24,
            height in 4_usize..24,
            passes in 1_u32..6,
        ) {
            let mut grid = Grid::filled(width, height, Tile::Open);
            smooth(&mut grid, passes);

            let (right, bottom) = (width as i32 - 1, height as i32 - 1);
            let corners = [
                Coord::new(0, 0),
                Coord::new(right, 0),
                Coord::new(0, bottom),
                Coord::new(right, bottom),
            ];
            prop_assert_eq!(grid.count(Tile::Wall), 4);
            for corner in corners {
                prop_assert_eq!(grid.tile_at(corner), Tile::Wall);
            }
        }

        #[test]
        fn smoothing_is_deterministic(seed in any::<u64>(), passes in 0_u32..6) {
            let mut left = random_fill(20, 16, seed, 45);
            let mut right = left.clone();
            smooth(&mut left, passes);
            smooth(&mut right, passes);
            prop_assert_eq!(left, right);
        }
    }
}
