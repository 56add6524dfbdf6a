//! Spatial data structures for the pipe board
//!
//! This module contains the board-related functionality:
//! - Cell state, orientations, and candidate option sets
//! - Board lattice with coordinate transforms and neighbor lookup

/// Cell state, orientations, and candidate option sets
pub mod cell;
/// Board lattice, coordinate transforms, and neighbor lookup
pub mod grid;

pub use cell::{Cell, CellView, OptionSet, Orientation};
pub use grid::{Direction, PipeGrid};
