//! Per-search state grids: distances, back-pointers and boolean flags.
//!
//! One set of maps is allocated per search invocation, sized to the input
//! grid, and owned exclusively by that search. The distance map is shared by
//! reference with the frontier, which looks priorities up through it on
//! demand instead of caching costs.

use gridway_core::Point;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// N×N map of best-known path costs, initialized to [`UNREACHABLE`].
///
/// Per-cell values only ever decrease during a search; once a cell is
/// closed its value is final.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistMap {
    size: i32,
    values: Vec<i32>,
}

impl DistMap {
    /// Create a map of side `size` with every cell [`UNREACHABLE`].
    pub fn new(size: i32) -> Self {
        Self {
            size: size.max(0),
            values: vec![UNREACHABLE; (size.max(0) as usize).pow(2)],
        }
    }

    /// Side length of the map.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Cost at `p`. Returns [`UNREACHABLE`] for out-of-bounds points.
    #[inline]
    pub fn get(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.values[i],
            None => UNREACHABLE,
        }
    }

    /// Set the cost at `p`. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, cost: i32) {
        if let Some(i) = self.idx(p) {
            self.values[i] = cost;
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.size || p.y < 0 || p.y >= self.size {
            return None;
        }
        Some((p.y * self.size + p.x) as usize)
    }
}

/// N×N map of back-pointers: the predecessor that achieved each cell's
/// current best distance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentMap {
    size: i32,
    parents: Vec<Option<Point>>,
}

impl ParentMap {
    /// Create a map of side `size` with no recorded parents.
    pub fn new(size: i32) -> Self {
        Self {
            size: size.max(0),
            parents: vec![None; (size.max(0) as usize).pow(2)],
        }
    }

    /// The recorded parent of `p`, if any.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Point> {
        self.idx(p).and_then(|i| self.parents[i])
    }

    /// Record `parent` as the predecessor of `p`.
    #[inline]
    pub fn set(&mut self, p: Point, parent: Point) {
        if let Some(i) = self.idx(p) {
            self.parents[i] = Some(parent);
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.size || p.y < 0 || p.y >= self.size {
            return None;
        }
        Some((p.y * self.size + p.x) as usize)
    }
}

/// N×N boolean grid, used for the closed and visited sets.
#[derive(Debug, Clone)]
pub(crate) struct FlagGrid {
    size: i32,
    flags: Vec<bool>,
}

impl FlagGrid {
    pub(crate) fn new(size: i32) -> Self {
        Self {
            size: size.max(0),
            flags: vec![false; (size.max(0) as usize).pow(2)],
        }
    }

    #[inline]
    pub(crate) fn get(&self, p: Point) -> bool {
        if p.x < 0 || p.x >= self.size || p.y < 0 || p.y >= self.size {
            return false;
        }
        self.flags[(p.y * self.size + p.x) as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, p: Point) {
        if p.x >= 0 && p.x < self.size && p.y >= 0 && p.y < self.size {
            self.flags[(p.y * self.size + p.x) as usize] = true;
        }
    }
}
