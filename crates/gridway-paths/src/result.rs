//! Search output: path reconstruction, the classified grid and the compact
//! parent-direction grid.

use gridway_core::{Cell, GridMap, Point};

use crate::direction::dir_index;
use crate::maps::{DistMap, FlagGrid, ParentMap};

/// How the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end cell was extracted from the frontier; a path exists.
    Found,
    /// The frontier ran dry before reaching the end; no path exists.
    Exhausted,
}

/// Per-cell classification of the search outcome.
///
/// The `code` values extend the input encoding `{0..3}` with two search
/// outcomes, giving six distinct external codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellClass {
    /// Free cell the search never examined.
    Unreached,
    Wall,
    Start,
    End,
    /// Free cell on the reconstructed shortest path.
    OnPath,
    /// Free cell examined as a neighbor but not on the path.
    Reached,
}

impl CellClass {
    /// The external integer code for this classification.
    pub const fn code(self) -> i32 {
        match self {
            Self::Unreached => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::End => 3,
            Self::OnPath => 4,
            Self::Reached => 5,
        }
    }
}

/// The full output bundle of one search invocation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    outcome: Outcome,
    input: GridMap,
    end: Point,
    dist: DistMap,
    classes: Vec<CellClass>,
    parent_dirs: Vec<Option<u8>>,
    path: Option<Vec<Point>>,
}

impl SearchResult {
    /// Build the result bundle from final engine state.
    ///
    /// Path reconstruction only happens on [`Outcome::Found`]; an exhausted
    /// search reports no path rather than following dangling parent links.
    pub(crate) fn assemble(
        grid: &GridMap,
        outcome: Outcome,
        start: Point,
        end: Point,
        dist: DistMap,
        parent: ParentMap,
        visited: &FlagGrid,
    ) -> Self {
        let size = grid.size();
        let path = match outcome {
            Outcome::Found => Some(reconstruct(&parent, start, end)),
            Outcome::Exhausted => None,
        };

        let mut classes: Vec<CellClass> = grid
            .iter()
            .map(|(p, cell)| match cell {
                Cell::Wall => CellClass::Wall,
                Cell::Start => CellClass::Start,
                Cell::End => CellClass::End,
                Cell::Free if visited.get(p) => CellClass::Reached,
                Cell::Free => CellClass::Unreached,
            })
            .collect();
        if let Some(path) = &path {
            for p in path {
                let i = (p.y * size + p.x) as usize;
                if classes[i] == CellClass::Reached {
                    classes[i] = CellClass::OnPath;
                }
            }
        }

        let parent_dirs = grid
            .iter()
            .map(|(p, _)| parent.get(p).and_then(|par| dir_index(par - p)))
            .collect();

        Self {
            outcome,
            input: grid.clone(),
            end,
            dist,
            classes,
            parent_dirs,
            path,
        }
    }

    /// How the search terminated.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether a path was found.
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// The reconstructed start→end path, when one exists.
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Total cost of the found path, when one exists.
    pub fn cost(&self) -> Option<i32> {
        self.found().then(|| self.dist.get(self.end))
    }

    /// The per-cell distance map ([`UNREACHABLE`](crate::UNREACHABLE) for
    /// cells the search never relaxed).
    pub fn distances(&self) -> &DistMap {
        &self.dist
    }

    /// Echo of the input grid.
    pub fn input(&self) -> &GridMap {
        &self.input
    }

    /// Classification of the cell at `p`, or `None` if out of bounds.
    pub fn class_at(&self, p: Point) -> Option<CellClass> {
        self.idx(p).map(|i| self.classes[i])
    }

    /// Direction index (0–7) toward the parent of `p`, or `None` when the
    /// cell has no recorded parent (or is out of bounds).
    pub fn parent_dir(&self, p: Point) -> Option<u8> {
        self.idx(p).and_then(|i| self.parent_dirs[i])
    }

    /// The classified grid as flat row-major external codes.
    pub fn class_codes(&self) -> Vec<i32> {
        self.classes.iter().map(|c| c.code()).collect()
    }

    /// The parent-direction grid as flat row-major codes, `-1` for cells
    /// without a parent.
    pub fn parent_dir_codes(&self) -> Vec<i32> {
        self.parent_dirs
            .iter()
            .map(|d| d.map_or(-1, i32::from))
            .collect()
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        let size = self.input.size();
        if p.x < 0 || p.x >= size || p.y < 0 || p.y >= size {
            return None;
        }
        Some((p.y * size + p.x) as usize)
    }
}

/// Walk the parent chain from `end` back to `start` and reverse.
///
/// Only called on a confirmed [`Outcome::Found`], which guarantees an intact
/// chain ending at `start`.
fn reconstruct(parent: &ParentMap, start: Point, end: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = end;
    while cur != start {
        path.push(cur);
        match parent.get(cur) {
            Some(p) => cur = p,
            None => break,
        }
    }
    path.push(start);
    path.reverse();
    path
}
