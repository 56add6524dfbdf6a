use crate::algorithm::rules;
use crate::algorithm::selection::RandomSelector;
use crate::io::error::{GenerationError, Result};
use crate::spatial::{Cell, Direction, OptionSet, Orientation, PipeGrid};
use std::collections::VecDeque;

/// Worklist for the constraint cascade
///
/// Holds cells that just became decided and still need their adjacency
/// constraints pushed onto their neighbors. The explicit queue keeps the
/// cascade inspectable and its depth bounded by the cell count; the outcome
/// matches a depth-first cascade because each narrowing depends only on the
/// decided cell's orientation, never on processing order.
#[derive(Debug)]
pub struct CollapseQueue {
    queue: VecDeque<usize>,
}

impl Default for CollapseQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CollapseQueue {
    /// Create a new empty queue
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue a cell index, skipping indices already pending
    pub fn push(&mut self, index: usize) {
        if !self.queue.contains(&index) {
            self.queue.push_back(index);
        }
    }

    /// Remove and return the next pending cell index
    pub fn take_next(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of pending cells
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Collapse one cell and run the resulting constraint cascade
///
/// With `forced` given, the cell's candidate set is replaced verbatim (the
/// clear-to-empty user action at the boundary); otherwise one of the cell's
/// remaining candidates is chosen uniformly at random. A cell that is already
/// decided, or already contradictory, is left untouched: re-collapsing is a
/// designed no-op, not an error.
///
/// # Errors
///
/// Returns [`GenerationError::CellIndexOutOfBounds`] for an index beyond the
/// board, and propagates any contradiction surfaced by the cascade.
pub fn collapse(
    grid: &mut PipeGrid,
    index: usize,
    forced: Option<&[Orientation]>,
    selector: &mut RandomSelector,
) -> Result<()> {
    let Some(cell) = grid.cell(index) else {
        return Err(GenerationError::CellIndexOutOfBounds {
            index,
            cell_count: grid.cell_count(),
        });
    };

    if cell.entropy() < 2 {
        return Ok(());
    }

    let options = match forced {
        Some(orientations) => OptionSet::from_slice(orientations),
        None => {
            let remaining = cell.options().to_vec();
            let Some(orientation) = selector.pick_orientation(&remaining) else {
                return Ok(());
            };
            OptionSet::from_slice(&[orientation])
        }
    };

    if let Some(target) = grid.cell_mut(index) {
        target.set_options(options);
    }

    propagate(grid, index)
}

/// Push the decided cell's constraints through the board
///
/// Each of the four neighbors has its candidate set intersected with the
/// orientations compatible with the decided cell across their shared edge.
/// Missing neighbors (off the board) and already-decided neighbors are left
/// alone; a neighbor narrowed down to exactly one candidate joins the
/// worklist and cascades in turn. Candidate sets only ever shrink, and a cell
/// joins the worklist at most once per cascade, so the loop visits at most
/// one cell per board cell.
///
/// Calling this on an undecided cell is a quiet no-op; only decided cells
/// constrain their neighborhood.
///
/// # Errors
///
/// Returns [`GenerationError::Contradiction`] if a neighbor's candidate set
/// is narrowed to nothing. The symmetric compatibility table never produces
/// this from auto-advance alone; it is reachable through forced candidate
/// sets, and the cascade halts at the offending cell.
pub fn propagate(grid: &mut PipeGrid, index: usize) -> Result<()> {
    let mut queue = CollapseQueue::new();
    queue.push(index);

    while let Some(current) = queue.take_next() {
        let Some(orientation) = grid.cell(current).and_then(Cell::decided_type) else {
            continue;
        };

        for direction in Direction::ALL {
            let Some(neighbor_index) = grid.neighbor_index(current, direction) else {
                continue;
            };
            let allowed = rules::allowed_neighbors(orientation, direction);
            let Some(neighbor) = grid.cell_mut(neighbor_index) else {
                continue;
            };

            // Decided cells are never narrowed further; this is what stops
            // the cascade from revisiting finalized cells on closed loops
            if neighbor.entropy() < 2 {
                continue;
            }

            neighbor.narrow(&allowed);
            match neighbor.entropy() {
                0 => {
                    return Err(GenerationError::Contradiction {
                        index: neighbor_index,
                    });
                }
                1 => queue.push(neighbor_index),
                _ => {}
            }
        }
    }

    Ok(())
}
