//! Weighted 8-way neighbor generation with corner-cutting suppression.

use gridway_core::{GridMap, Point};

use crate::direction::DIRS;

/// Cached neighbor computation helper.
///
/// Yields the valid 8-way neighbors of a cell under the blocking rules:
/// out-of-bounds and wall candidates are discarded, and a diagonal candidate
/// is discarded when both orthogonal cells flanking it are walls (a diagonal
/// step never slips between two walls that touch only at a corner).
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the valid neighbors of `p`, orthogonals first.
    pub fn of(&mut self, grid: &GridMap, p: Point) -> &[Point] {
        self.buf.clear();
        for &d in &DIRS[..4] {
            let n = p + d;
            if grid.contains(n) && !grid.is_wall(n) {
                self.buf.push(n);
            }
        }
        for &d in &DIRS[4..] {
            let n = p + d;
            if !grid.contains(n) || grid.is_wall(n) {
                continue;
            }
            // Both flanking orthogonals walled shut means the corner is solid.
            if grid.is_wall(p.shift(d.x, 0)) && grid.is_wall(p.shift(0, d.y)) {
                continue;
            }
            self.buf.push(n);
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridway_core::Cell;

    fn points(nb: &[Point]) -> Vec<(i32, i32)> {
        nb.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn open_center_has_eight_neighbors() {
        let grid = GridMap::new(3);
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(&grid, Point::new(1, 1)).len(), 8);
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let grid = GridMap::new(3);
        let mut nb = Neighbors::new();
        assert_eq!(
            points(nb.of(&grid, Point::new(0, 0))),
            vec![(1, 0), (0, 1), (1, 1)]
        );
    }

    #[test]
    fn walls_are_skipped() {
        let mut grid = GridMap::new(3);
        grid.set(Point::new(1, 0), Cell::Wall);
        let mut nb = Neighbors::new();
        let ns = nb.of(&grid, Point::new(1, 1));
        assert!(!ns.contains(&Point::new(1, 0)));
        assert_eq!(ns.len(), 7);
    }

    #[test]
    fn solid_corner_blocks_diagonal() {
        // Walls above and to the right of (1,1): the diagonal to (2,0) is
        // sealed even though (2,0) itself is free.
        let mut grid = GridMap::new(3);
        grid.set(Point::new(1, 0), Cell::Wall);
        grid.set(Point::new(2, 1), Cell::Wall);
        let mut nb = Neighbors::new();
        let ns = nb.of(&grid, Point::new(1, 1));
        assert!(!ns.contains(&Point::new(2, 0)));
        // The other three diagonals stay open.
        assert!(ns.contains(&Point::new(0, 0)));
        assert!(ns.contains(&Point::new(0, 2)));
        assert!(ns.contains(&Point::new(2, 2)));
    }

    #[test]
    fn single_flanking_wall_keeps_diagonal() {
        let mut grid = GridMap::new(3);
        grid.set(Point::new(1, 0), Cell::Wall);
        let mut nb = Neighbors::new();
        let ns = nb.of(&grid, Point::new(1, 1));
        assert!(ns.contains(&Point::new(2, 0)));
        assert!(ns.contains(&Point::new(0, 0)));
    }
}
