//! The 8-way neighborhood: candidate offsets, step weights and compact
//! direction indices.

use gridway_core::{GridMap, Point};

/// Cost of an orthogonal step.
pub const ORTHO_COST: i32 = 10;

/// Cost of a diagonal step (integer approximation of `ORTHO_COST * sqrt(2)`).
pub const DIAG_COST: i32 = 14;

/// The 8 candidate offsets, orthogonals first.
///
/// The position of an offset in this array is its *direction index*, the
/// compact code used in [`SearchResult`](crate::SearchResult)'s
/// parent-direction grid.
pub const DIRS: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// 3×3 step-weight table indexed by `(dx + 1, dy + 1)`.
///
/// The center entry is a placeholder; a zero offset is not an edge.
const OFFSET_WEIGHTS: [[i32; 3]; 3] = [
    [DIAG_COST, ORTHO_COST, DIAG_COST],
    [ORTHO_COST, 0, ORTHO_COST],
    [DIAG_COST, ORTHO_COST, DIAG_COST],
];

/// The direction index (0–7) for an adjacent offset, or `None` if the
/// offset is zero or outside the 3×3 neighborhood.
pub fn dir_index(offset: Point) -> Option<u8> {
    DIRS.iter().position(|&d| d == offset).map(|i| i as u8)
}

/// The offset for a direction index. Indices above 7 yield `None`.
pub fn dir_offset(index: u8) -> Option<Point> {
    DIRS.get(index as usize).copied()
}

/// The weight of the edge from `from` to the adjacent cell `to`.
///
/// # Panics
///
/// Panics if `to` is a wall or if the two cells are not distinct 8-way
/// neighbors. Both cases are caller contract violations: the search engine
/// only ever asks for edges the neighbor generator produced.
pub fn edge_cost(grid: &GridMap, from: Point, to: Point) -> i32 {
    let d = to - from;
    assert!(
        d != Point::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1,
        "edge_cost: {to} is not adjacent to {from}"
    );
    assert!(!grid.is_wall(to), "edge_cost: {to} is a wall");
    OFFSET_WEIGHTS[(d.x + 1) as usize][(d.y + 1) as usize]
}
