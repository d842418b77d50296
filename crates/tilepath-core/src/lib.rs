//! Geometry and walkability grids for tile-based pathfinding.
//!
//! This crate provides the types shared by the *tilepath* crates: integer
//! [`Point`]s and half-open [`Range`]s, the immutable [`Cell`] record, and the
//! [`Grid`] of walkable/blocked cells built from an external map source.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
