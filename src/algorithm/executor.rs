use crate::algorithm::propagation;
use crate::algorithm::selection::{self, RandomSelector};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::visualization::VisualizationCapture;
use crate::spatial::{CellView, Orientation, PipeGrid};

/// Complete simulation state for one board
///
/// Owns the grid, the seeded selector, the step counter, and the optional
/// visualization capture. Every core operation takes this state explicitly;
/// there are no process-wide singletons. All operations are synchronous and
/// run each cascade to completion, so the state is single-writer by
/// construction.
pub struct Simulation {
    grid: PipeGrid,
    selector: RandomSelector,
    iteration: usize,
    visualization: Option<VisualizationCapture>,
}

impl Simulation {
    /// Create a simulation over a fresh board
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`].
    pub fn new(rows: usize, cols: usize, seed: u64) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("cols", cols)?;

        Ok(Self {
            grid: PipeGrid::new(rows, cols),
            selector: RandomSelector::new(seed),
            iteration: 0,
            visualization: None,
        })
    }

    /// Access the current board
    pub const fn grid(&self) -> &PipeGrid {
        &self.grid
    }

    /// Number of collapse actions performed since the last reset
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Read-only snapshot of a single cell, `None` out of bounds
    pub fn cell_at(&self, index: usize) -> Option<CellView> {
        self.grid.cell(index).map(crate::spatial::Cell::view)
    }

    /// Whether any undecided cell remains
    pub fn is_stable(&self) -> bool {
        self.grid.is_stable()
    }

    /// Advance the board by one collapse-and-propagate cascade
    ///
    /// Recomputes the frontier, picks one minimal-entropy cell uniformly at
    /// random, collapses it, and cascades. Returns `Ok(false)` without
    /// touching the board when the frontier is empty; repeated calls on a
    /// stable board are safe no-ops.
    ///
    /// # Errors
    ///
    /// Propagates a contradiction surfaced by the cascade.
    pub fn step(&mut self) -> Result<bool> {
        let candidates = selection::lowest_entropy_candidates(&self.grid);
        let Some(index) = self.selector.pick_cell(&candidates) else {
            return Ok(false);
        };

        self.iteration += 1;
        propagation::collapse(&mut self.grid, index, None, &mut self.selector)?;
        self.record_step();
        Ok(true)
    }

    /// Collapse one cell to a random remaining candidate (user action)
    ///
    /// No-op if the target is already decided.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-bounds index or a contradiction
    /// surfaced by the cascade.
    pub fn force_collapse(&mut self, index: usize) -> Result<()> {
        propagation::collapse(&mut self.grid, index, None, &mut self.selector)?;
        self.iteration += 1;
        self.record_step();
        Ok(())
    }

    /// Clear one cell to `Empty` and propagate (user action)
    ///
    /// No-op if the target is already decided.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-bounds index or a contradiction
    /// surfaced by the cascade.
    pub fn force_empty(&mut self, index: usize) -> Result<()> {
        propagation::collapse(
            &mut self.grid,
            index,
            Some(&[Orientation::Empty]),
            &mut self.selector,
        )?;
        self.iteration += 1;
        self.record_step();
        Ok(())
    }

    /// Step repeatedly until the board is stable or the budget runs out
    ///
    /// Returns the number of steps actually taken.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`Simulation::step`].
    pub fn run_to_stable(&mut self, max_iterations: usize) -> Result<usize> {
        let mut steps = 0;
        while steps < max_iterations {
            if !self.step()? {
                break;
            }
            steps += 1;
        }
        Ok(steps)
    }

    /// Reinitialize every cell and zero the step counter
    ///
    /// The random selector keeps its state; create a new simulation for a
    /// replay from the same seed.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.iteration = 0;
        if let Some(viz) = &mut self.visualization {
            viz.clear();
        }
    }

    /// Enable GIF recording of board progression
    pub fn enable_visualization(&mut self, max_iterations: usize) {
        self.visualization = Some(VisualizationCapture::new(
            self.grid.rows(),
            self.grid.cols(),
            max_iterations,
        ));
    }

    /// Export the captured progression as a GIF if enabled
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - GIF export fails
    pub fn export_visualization(&self, output_path: &str) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(GenerationError::InvalidParameter {
                    parameter: "visualization",
                    value: "disabled".to_string(),
                    reason: "Visualization was not enabled for this run".to_string(),
                })
            },
            |viz| {
                viz.export_gif(
                    output_path,
                    crate::io::configuration::GIF_FRAME_DELAY_MS,
                )
            },
        )
    }

    fn record_step(&mut self) {
        if let Some(viz) = &mut self.visualization {
            viz.record_step(&self.grid, self.iteration);
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be nonzero"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("exceeds the maximum board dimension {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
