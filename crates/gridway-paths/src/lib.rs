//! Dijkstra shortest-path search on 8-connected obstacle grids.
//!
//! Given a [`GridMap`](gridway_core::GridMap) holding free cells, walls and
//! one start/end pair, [`shortest_path`] (or [`DijkstraSearch`] for explicit
//! control) returns a [`SearchResult`] bundling:
//!
//! - the minimum-cost start→end path, when one exists,
//! - the per-cell distance map,
//! - a six-code classified grid for external rendering,
//! - a compact parent-direction grid (one of 8 direction indices per cell).
//!
//! Movement is 8-way: orthogonal steps cost [`ORTHO_COST`], diagonal steps
//! [`DIAG_COST`], and a diagonal never cuts a corner whose two flanking
//! cells are both walls.
//!
//! The open set is the [`Frontier`] trait with two plug-compatible
//! implementations, chosen per search via [`FrontierKind`]:
//!
//! | Implementation | extract-min | decrease-key |
//! |---|---|---|
//! | [`LinearFrontier`] | O(n) scan | O(1) no-op |
//! | [`HeapFrontier`] | O(log n) | O(log n) sift-up via slot index |
//!
//! Frontier entries carry no cost of their own: priority is always the
//! current value in the engine-owned distance map, looked up on demand.

mod dijkstra;
mod direction;
mod frontier;
mod maps;
mod neighbors;
mod result;

pub use dijkstra::{DijkstraSearch, SearchError, shortest_path};
pub use direction::{DIAG_COST, DIRS, ORTHO_COST, dir_index, dir_offset, edge_cost};
pub use frontier::{Frontier, FrontierKind, HeapFrontier, LinearFrontier};
pub use maps::{DistMap, ParentMap, UNREACHABLE};
pub use neighbors::Neighbors;
pub use result::{CellClass, Outcome, SearchResult};
