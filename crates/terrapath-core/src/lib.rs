//! **terrapath-core** — grid data model for terrapath.
//!
//! This crate provides the types shared by the path engine and its
//! adapters: `(row, col)` coordinates, grid shapes, cell semantics and the
//! immutable row-major [`CostGrid`].

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellSemantics;
pub use geom::{Coord, Dims, DimsIter};
pub use grid::{CostGrid, GridError};
