//! **gridway-core** — Grid pathfinding core types.
//!
//! This crate provides the foundational types used across the *gridway*
//! workspace: the integer [`Point`] geometry primitive and the square
//! obstacle map ([`GridMap`]) that search algorithms consume.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Cell, GridError, GridMap};
