//! **gridseek-core** — grid geometry and wall maps.
//!
//! This crate provides the static types shared by the *gridseek* crates:
//! geometry primitives that identify grid nodes, and a wall map that
//! pathfinding searches read but never write.

pub mod geom;
pub mod walls;

pub use geom::{Point, Range, RangeIter};
pub use walls::{GridError, WallGrid};
