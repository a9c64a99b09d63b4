//! **wallmaze** generates random perfect mazes over a rectangular grid and
//! exposes the wall layout needed to render and physically simulate them.
//!
//! The carved maze is a spanning tree of the grid graph: every cell is
//! reachable from every other cell by exactly one path. The maze is stored as
//! two boolean open-flag matrices (east passages and south passages), from
//! which the `layout` module derives world-space wall geometry for an external
//! rendering/physics collaborator.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod layout;
pub mod maze;
pub mod rng;
pub mod units;
#[cfg(test)]
mod utils;
