//! The open set: a priority frontier over grid cells.
//!
//! Entries are bare [`Point`]s; their priority is the *current* value in the
//! engine-owned [`DistMap`], looked up at call time. Neither implementation
//! caches costs, so a relaxation that lowers a cell's distance is visible to
//! the frontier immediately.

use gridway_core::Point;

use crate::maps::DistMap;

/// Heap slot marker for "not currently in the frontier".
const ABSENT: usize = usize::MAX;

/// The open-set contract shared by both frontier implementations.
///
/// Callers guarantee single membership: a cell is only added when it is not
/// currently present (the engine adds a cell the first time it is examined
/// as a neighbor, while its distance is still the
/// [`UNREACHABLE`](crate::UNREACHABLE) sentinel, and never again).
pub trait Frontier {
    /// Insert a cell that is not currently present, positioned by its
    /// current distance-map value.
    fn add(&mut self, cell: Point, dist: &DistMap);

    /// Remove and return the open cell with minimum current distance, or
    /// `None` when the frontier is empty.
    fn extract_min(&mut self, dist: &DistMap) -> Option<Point>;

    /// Number of open cells.
    fn len(&self) -> usize;

    /// Whether the frontier holds no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notify the frontier that `cell`'s distance-map value decreased, so
    /// that future [`extract_min`](Frontier::extract_min) calls stay correct.
    fn decrease_key(&mut self, cell: Point, dist: &DistMap);
}

/// Which frontier implementation a search should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierKind {
    /// Unordered list with linear-scan extraction.
    Linear,
    /// Binary min-heap with a cell→slot index for O(log n) decrease-key.
    #[default]
    Heap,
}

impl FrontierKind {
    /// Build a frontier for a grid of side `size`.
    pub fn build(self, size: i32) -> Box<dyn Frontier> {
        match self {
            Self::Linear => Box::new(LinearFrontier::new()),
            Self::Heap => Box::new(HeapFrontier::new(size)),
        }
    }
}

// ---------------------------------------------------------------------------
// LinearFrontier
// ---------------------------------------------------------------------------

/// Unordered open set. O(n) extract, O(1) add, O(1) decrease-key.
#[derive(Debug, Default)]
pub struct LinearFrontier {
    cells: Vec<Point>,
}

impl LinearFrontier {
    /// Create an empty linear frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LinearFrontier {
    fn add(&mut self, cell: Point, _dist: &DistMap) {
        self.cells.push(cell);
    }

    fn extract_min(&mut self, dist: &DistMap) -> Option<Point> {
        if self.cells.is_empty() {
            return None;
        }
        let mut best = 0;
        let mut best_cost = i32::MAX;
        for (i, &c) in self.cells.iter().enumerate() {
            let cost = dist.get(c);
            if cost < best_cost {
                best_cost = cost;
                best = i;
            }
        }
        Some(self.cells.swap_remove(best))
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn decrease_key(&mut self, _cell: Point, _dist: &DistMap) {
        // The minimum is recomputed on every extraction, so nothing to do.
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

/// Binary min-heap keyed by distance-map lookup.
///
/// A flat cell→slot index (sized to the grid) tracks each open cell's
/// position in the heap array, giving O(log n) decrease-key via sift-up.
/// Every swap updates the index for both swapped cells.
#[derive(Debug)]
pub struct HeapFrontier {
    heap: Vec<Point>,
    slots: Vec<usize>,
    size: i32,
}

impl HeapFrontier {
    /// Create an empty heap frontier for a grid of side `size`.
    pub fn new(size: i32) -> Self {
        Self {
            heap: Vec::new(),
            slots: vec![ABSENT; (size.max(0) as usize).pow(2)],
            size: size.max(0),
        }
    }

    #[inline]
    fn slot_idx(&self, p: Point) -> usize {
        debug_assert!(p.x >= 0 && p.x < self.size && p.y >= 0 && p.y < self.size);
        (p.y * self.size + p.x) as usize
    }

    #[inline]
    fn is_less(&self, i: usize, j: usize, dist: &DistMap) -> bool {
        dist.get(self.heap[i]) < dist.get(self.heap[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        let pi = self.slot_idx(self.heap[i]);
        let pj = self.slot_idx(self.heap[j]);
        self.slots[pi] = i;
        self.slots[pj] = j;
    }

    fn sift_up(&mut self, mut i: usize, dist: &DistMap) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.is_less(i, parent, dist) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize, dist: &DistMap) {
        loop {
            let mut min = i;
            let lc = 2 * i + 1;
            let rc = 2 * i + 2;
            if lc < self.heap.len() && self.is_less(lc, min, dist) {
                min = lc;
            }
            if rc < self.heap.len() && self.is_less(rc, min, dist) {
                min = rc;
            }
            if min == i {
                return;
            }
            self.swap(i, min);
            i = min;
        }
    }
}

impl Frontier for HeapFrontier {
    fn add(&mut self, cell: Point, dist: &DistMap) {
        self.heap.push(cell);
        let si = self.slot_idx(cell);
        debug_assert_eq!(self.slots[si], ABSENT, "cell added twice: {cell}");
        self.slots[si] = self.heap.len() - 1;
        // A no-op when the cell is still at the UNREACHABLE maximum, but a
        // cell added with a finite distance must take its proper place.
        self.sift_up(self.heap.len() - 1, dist);
    }

    fn extract_min(&mut self, dist: &DistMap) -> Option<Point> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap[0];
        let last = self.heap.len() - 1;
        self.swap(0, last);
        self.heap.pop();
        let si = self.slot_idx(min);
        self.slots[si] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0, dist);
        }
        Some(min)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn decrease_key(&mut self, cell: Point, dist: &DistMap) {
        let slot = self.slots[self.slot_idx(cell)];
        debug_assert_ne!(slot, ABSENT, "decrease_key on absent cell: {cell}");
        if slot != ABSENT {
            self.sift_up(slot, dist);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::UNREACHABLE;

    fn dist_with(size: i32, entries: &[(Point, i32)]) -> DistMap {
        let mut dist = DistMap::new(size);
        for &(p, c) in entries {
            dist.set(p, c);
        }
        dist
    }

    fn drain(f: &mut dyn Frontier, dist: &DistMap) -> Vec<i32> {
        let mut costs = Vec::new();
        while let Some(p) = f.extract_min(dist) {
            costs.push(dist.get(p));
        }
        costs
    }

    #[test]
    fn empty_extraction_is_none() {
        let dist = DistMap::new(4);
        for kind in [FrontierKind::Linear, FrontierKind::Heap] {
            let mut f = kind.build(4);
            assert!(f.is_empty());
            assert_eq!(f.extract_min(&dist), None);
        }
    }

    #[test]
    fn extracts_in_cost_order() {
        let cells = [
            (Point::new(0, 0), 30),
            (Point::new(1, 0), 10),
            (Point::new(2, 0), 20),
            (Point::new(0, 1), 50),
            (Point::new(1, 1), 40),
        ];
        let dist = dist_with(4, &cells);
        for kind in [FrontierKind::Linear, FrontierKind::Heap] {
            let mut f = kind.build(4);
            for &(p, _) in &cells {
                f.add(p, &dist);
            }
            assert_eq!(f.len(), 5);
            assert_eq!(drain(f.as_mut(), &dist), vec![10, 20, 30, 40, 50]);
        }
    }

    #[test]
    fn decrease_key_repositions() {
        let mut dist = dist_with(
            4,
            &[
                (Point::new(0, 0), 100),
                (Point::new(1, 0), 20),
                (Point::new(2, 0), 30),
            ],
        );
        for kind in [FrontierKind::Linear, FrontierKind::Heap] {
            let mut f = kind.build(4);
            for p in [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)] {
                f.add(p, &dist);
            }
            // (0,0) starts worst; lowering its distance must surface it first.
            dist.set(Point::new(0, 0), 5);
            f.decrease_key(Point::new(0, 0), &dist);
            assert_eq!(f.extract_min(&dist), Some(Point::new(0, 0)));
            dist.set(Point::new(0, 0), 100);
        }
    }

    #[test]
    fn add_with_finite_distance_keeps_order() {
        // No decrease_key in between: add alone must position the cell.
        let dist = dist_with(4, &[(Point::new(0, 0), 30), (Point::new(1, 0), 10)]);
        for kind in [FrontierKind::Linear, FrontierKind::Heap] {
            let mut f = kind.build(4);
            f.add(Point::new(0, 0), &dist);
            f.add(Point::new(1, 0), &dist);
            assert_eq!(f.extract_min(&dist), Some(Point::new(1, 0)));
            assert_eq!(f.extract_min(&dist), Some(Point::new(0, 0)));
        }
    }

    #[test]
    fn unreached_cells_extract_last() {
        let dist = dist_with(4, &[(Point::new(1, 1), 7)]);
        for kind in [FrontierKind::Linear, FrontierKind::Heap] {
            let mut f = kind.build(4);
            f.add(Point::new(0, 0), &dist); // still UNREACHABLE
            f.add(Point::new(1, 1), &dist);
            assert_eq!(f.extract_min(&dist), Some(Point::new(1, 1)));
            let leftover = f.extract_min(&dist);
            assert_eq!(leftover, Some(Point::new(0, 0)));
            assert_eq!(dist.get(Point::new(0, 0)), UNREACHABLE);
        }
    }

    #[test]
    fn heap_matches_linear_under_interleaved_ops() {
        use rand::RngExt;
        use rand::seq::SliceRandom;
        let mut rng = rand::rng();
        let size = 10;

        let mut dist = DistMap::new(size);
        let mut linear = LinearFrontier::new();
        let mut heap = HeapFrontier::new(size);
        let mut open: Vec<Point> = Vec::new();

        // Distinct costs so both frontiers must extract the same cell.
        let mut costs: Vec<i32> = (1..=(size * size)).map(|i| i * 10).collect();
        costs.shuffle(&mut rng);
        for y in 0..size {
            for x in 0..size {
                let p = Point::new(x, y);
                dist.set(p, costs[(y * size + x) as usize]);
                linear.add(p, &dist);
                heap.add(p, &dist);
                open.push(p);
            }
        }

        // Unique replacement costs, always below every initial cost.
        let mut next_low = 0;
        while !open.is_empty() {
            // Occasionally lower a random open cell's distance.
            if rng.random_range(0..3u32) == 0 {
                let p = open[rng.random_range(0..open.len())];
                next_low -= 1;
                if next_low < dist.get(p) {
                    dist.set(p, next_low);
                    linear.decrease_key(p, &dist);
                    heap.decrease_key(p, &dist);
                }
            }
            let a = linear.extract_min(&dist);
            let b = heap.extract_min(&dist);
            assert_eq!(a, b);
            let extracted = a.unwrap();
            open.retain(|&p| p != extracted);
        }
        assert_eq!(heap.extract_min(&dist), None);
        assert_eq!(linear.extract_min(&dist), None);
    }
}
