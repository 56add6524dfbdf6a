//! Frame capture and GIF generation for board progression

use crate::io::configuration::{GIF_CELL_SIZE, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{GenerationError, Result};
use crate::io::image::render_board;
use crate::spatial::{Orientation, PipeGrid};
use image::Frame;

/// A single cell-decision event
#[derive(Debug, Clone)]
pub struct CellDecision {
    /// Linear index of the decided cell
    pub index: usize,
    /// Orientation the cell was decided to
    pub orientation: Orientation,
    /// Collapse step that decided the cell
    pub iteration: usize,
}

/// Captures cell decisions for visualization
///
/// Records decision events during the run to enable post-processing
/// visualization of the board filling in. A cascade that decides several
/// cells in one step yields one event per cell, replayed in cascade order.
pub struct VisualizationCapture {
    decisions: Vec<CellDecision>,
    seen: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl VisualizationCapture {
    /// Create a capture for a board of the given extent
    pub fn new(rows: usize, cols: usize, max_iterations: usize) -> Self {
        Self {
            decisions: Vec::with_capacity(max_iterations),
            seen: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Record every cell newly decided by the latest cascade
    pub fn record_step(&mut self, grid: &PipeGrid, iteration: usize) {
        for cell in grid.cells() {
            let Some(orientation) = cell.decided_type() else {
                continue;
            };
            if let Some(seen) = self.seen.get_mut(cell.id()) {
                if !*seen {
                    *seen = true;
                    self.decisions.push(CellDecision {
                        index: cell.id(),
                        orientation,
                        iteration,
                    });
                }
            }
        }
    }

    /// Forget all recorded events (board reset)
    pub fn clear(&mut self) {
        self.decisions.clear();
        self.seen.fill(false);
    }

    /// Returns all recorded decision events
    pub fn decisions(&self) -> &[CellDecision] {
        &self.decisions
    }

    /// Returns the total number of decision events
    pub const fn decision_count(&self) -> usize {
        self.decisions.len()
    }

    /// Export the captured run as a GIF with automatic frame skipping
    ///
    /// Skips frames if the requested frame rate exceeds viewer capabilities:
    /// with a 5 ms request (200 FPS) and viewers supporting 50 ms (20 FPS),
    /// every 10th event produces a frame and the apparent speed is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No cell decisions were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.decisions.is_empty() {
            return Err(GenerationError::InvalidParameter {
                parameter: "visualization",
                value: "empty".to_string(),
                reason: "No cell decisions captured for visualization".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file =
            std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
                path: output_path.into(),
                operation: "create file",
                source: e,
            })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut board: Vec<Option<Orientation>> = vec![None; self.rows * self.cols];
        let mut frames = Vec::new();

        frames.push(self.render_frame(&board, delay_ms));

        let mut frame_count = 0;

        for decision in &self.decisions {
            if let Some(cell) = board.get_mut(decision.index) {
                *cell = Some(decision.orientation);

                frame_count += 1;
                if frame_count % skip_factor == 0 {
                    frames.push(self.render_frame(&board, delay_ms));
                }
            }
        }

        if frame_count % skip_factor != 0 {
            frames.push(self.render_frame(&board, delay_ms));
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            let final_frame_delay = delay_ms * 25;
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                image::Delay::from_numer_denom_ms(final_frame_delay, 1),
            ));
        }

        frames
    }

    fn render_frame(&self, board: &[Option<Orientation>], delay_ms: u32) -> Frame {
        let img = render_board(board, self.rows, self.cols, GIF_CELL_SIZE);
        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
