//! The Dijkstra search engine: relaxation loop over frontier and neighbors.

use std::fmt;

use gridway_core::{GridMap, Point};
use log::{debug, trace};

use crate::direction::edge_cost;
use crate::frontier::{Frontier, FrontierKind};
use crate::maps::{DistMap, FlagGrid, ParentMap, UNREACHABLE};
use crate::neighbors::Neighbors;
use crate::result::{Outcome, SearchResult};

/// Input-contract violations detected before any search state is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The grid holds no start cell.
    MissingStart,
    /// The grid holds no end cell.
    MissingEnd,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "grid has no start cell"),
            Self::MissingEnd => write!(f, "grid has no end cell"),
        }
    }
}

impl std::error::Error for SearchError {}

/// One shortest-path search over a grid.
///
/// A search owns all of its working state (distance, parent, closed and
/// visited maps plus the frontier), allocated at construction and sized to
/// the grid. Instances are single-use and not meant for sharing: parallel
/// searches over independent grids each need their own `DijkstraSearch`.
pub struct DijkstraSearch<'g> {
    grid: &'g GridMap,
    start: Point,
    end: Point,
    dist: DistMap,
    parent: ParentMap,
    closed: FlagGrid,
    visited: FlagGrid,
    frontier: Box<dyn Frontier>,
    neighbors: Neighbors,
}

impl<'g> DijkstraSearch<'g> {
    /// Prepare a search over `grid` using the given frontier strategy.
    ///
    /// Fails if the grid lacks its start or end marker; no search state is
    /// built in that case.
    pub fn new(grid: &'g GridMap, kind: FrontierKind) -> Result<Self, SearchError> {
        let start = grid.start().ok_or(SearchError::MissingStart)?;
        let end = grid.end().ok_or(SearchError::MissingEnd)?;
        let size = grid.size();
        Ok(Self {
            grid,
            start,
            end,
            dist: DistMap::new(size),
            parent: ParentMap::new(size),
            closed: FlagGrid::new(size),
            visited: FlagGrid::new(size),
            frontier: kind.build(size),
            neighbors: Neighbors::new(),
        })
    }

    /// Run the search to completion and assemble the result bundle.
    ///
    /// Terminates as soon as the end cell's distance is finalized (its
    /// neighbors are never relaxed), or when the frontier runs dry.
    pub fn run(mut self) -> SearchResult {
        let size = self.grid.size();
        debug!("dijkstra: {} -> {} on {size}x{size} grid", self.start, self.end);
        self.dist.set(self.start, 0);
        self.frontier.add(self.start, &self.dist);

        let outcome = loop {
            let Some(u) = self.frontier.extract_min(&self.dist) else {
                break Outcome::Exhausted;
            };
            self.closed.set(u);
            if u == self.end {
                break Outcome::Found;
            }
            self.relax_neighbors(u);
        };
        debug!("dijkstra: {outcome:?}, end cost {}", self.dist.get(self.end));

        SearchResult::assemble(
            self.grid,
            outcome,
            self.start,
            self.end,
            self.dist,
            self.parent,
            &self.visited,
        )
    }

    /// Relax every open neighbor of the freshly closed cell `u`.
    fn relax_neighbors(&mut self, u: Point) {
        let base = self.dist.get(u);
        let mut nb = std::mem::take(&mut self.neighbors);
        for &v in nb.of(self.grid, u) {
            self.visited.set(v);
            if self.closed.get(v) {
                continue;
            }
            if self.dist.get(v) == UNREACHABLE {
                // First time this cell is seen as a neighbor.
                self.frontier.add(v, &self.dist);
            }
            let candidate = base + edge_cost(self.grid, u, v);
            if candidate < self.dist.get(v) {
                trace!("relax {v}: {} -> {candidate} via {u}", self.dist.get(v));
                self.dist.set(v, candidate);
                self.frontier.decrease_key(v, &self.dist);
                self.parent.set(v, u);
            }
        }
        self.neighbors = nb;
    }
}

/// Convenience entry point: search `grid` with the given frontier strategy.
pub fn shortest_path(grid: &GridMap, kind: FrontierKind) -> Result<SearchResult, SearchError> {
    Ok(DijkstraSearch::new(grid, kind)?.run())
}
