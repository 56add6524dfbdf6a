//! Fixed-size board lattice with coordinate transforms and neighbor lookup
//!
//! Cells are addressed both by a row-major linear index (their identity) and
//! by `[x, y]` coordinates. Coordinate transforms are pure and inverse;
//! positions outside the board map to `None` rather than to a sentinel index.

use crate::spatial::cell::Cell;
use ndarray::Array2;

/// One step of cardinal movement between adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing y
    North,
    /// Towards increasing x
    East,
    /// Towards increasing y
    South,
    /// Towards decreasing x
    West,
}

impl Direction {
    /// Every direction, in propagation order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction pointing back across the same shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit coordinate offset of one step in this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::North => [0, -1],
            Self::East => [1, 0],
            Self::South => [0, 1],
            Self::West => [-1, 0],
        }
    }
}

/// A fixed `rows x cols` board of pipe cells
///
/// The grid exclusively owns its cells; other components refer to cells by
/// linear index only. There is no entity deletion, resetting the board
/// reinitializes every cell in place.
#[derive(Debug, Clone)]
pub struct PipeGrid {
    rows: usize,
    cols: usize,
    cells: Array2<Cell>,
}

impl PipeGrid {
    /// Create a board with every cell holding the full candidate set
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| Cell::new(row * cols + col));
        Self { rows, cols, cells }
    }

    /// Number of rows in the board
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the board
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Convert a linear index to `[x, y]` coordinates
    ///
    /// Returns `None` for indices beyond the board extent.
    pub fn index_to_point(&self, index: usize) -> Option<[i32; 2]> {
        (index < self.cell_count())
            .then(|| [(index % self.cols) as i32, (index / self.cols) as i32])
    }

    /// Convert `[x, y]` coordinates to a linear index
    ///
    /// Returns `None` for coordinates outside `[0, cols) x [0, rows)`, never
    /// a valid index.
    pub fn point_to_index(&self, point: [i32; 2]) -> Option<usize> {
        let [x, y] = point;
        let in_bounds = x >= 0 && x < self.cols as i32 && y >= 0 && y < self.rows as i32;
        in_bounds.then(|| y as usize * self.cols + x as usize)
    }

    /// Index of the cell one step away in `direction`, if it exists
    pub fn neighbor_index(&self, index: usize, direction: Direction) -> Option<usize> {
        let [x, y] = self.index_to_point(index)?;
        let [dx, dy] = direction.offset();
        self.point_to_index([x + dx, y + dy])
    }

    /// The cell one step away in `direction`, if it exists
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<&Cell> {
        self.neighbor_index(index, direction)
            .and_then(|neighbor| self.cell(neighbor))
    }

    /// Immutable access to a cell by linear index
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        let [x, y] = self.index_to_point(index)?;
        self.cells.get([y as usize, x as usize])
    }

    /// Mutable access to a cell by linear index
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        let [x, y] = self.index_to_point(index)?;
        self.cells.get_mut([y as usize, x as usize])
    }

    /// Iterate over all cells in linear-index order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Indices of every undecided cell (the collapse frontier)
    ///
    /// Recomputed on demand; the frontier is not persisted across resets.
    pub fn undecided_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.entropy() > 1)
            .map(Cell::id)
            .collect()
    }

    /// Count of decided cells
    pub fn decided_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_decided()).count()
    }

    /// A board is stable once no cell is left to collapse
    pub fn is_stable(&self) -> bool {
        self.cells.iter().all(|cell| cell.entropy() < 2)
    }

    /// Restore every cell to the full candidate set
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}
