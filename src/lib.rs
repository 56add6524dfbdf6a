//! Wave function collapse-inspired generator for pipe-segment puzzles
//!
//! The system assigns a pipe orientation to every cell of a rectangular
//! board, collapsing one minimal-entropy cell at a time and propagating
//! adjacency constraints to its neighbors until the board stabilizes.

#![forbid(unsafe_code)]

/// Core algorithm implementation: rules, selection, propagation, and the simulation driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Board lattice and cell state
pub mod spatial;

pub use io::error::{GenerationError, Result};
