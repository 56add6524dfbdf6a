//! Command-line interface for batch generation of pipe boards

use crate::algorithm::executor::Simulation;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_MAX_ITERATIONS, DEFAULT_ROWS, DEFAULT_SEED, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pipewave")]
#[command(
    author,
    version,
    about = "Generate pipe-segment puzzles via constraint propagation"
)]
/// Command-line arguments for the board generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file for the generated board
    #[arg(value_name = "OUTPUT", default_value = "pipes.png")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum collapse steps per board
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: usize,

    /// Number of board rows
    #[arg(short = 'R', long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of board columns
    #[arg(short = 'c', long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of boards to generate (the seed advances per board)
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate boards even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch generation of boards with progress tracking
pub struct BoardProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BoardProcessor {
    /// Create a new board processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate boards according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if board construction, generation, or export fails
    pub fn process(&mut self) -> Result<()> {
        let targets = self.collect_targets();

        if targets.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(targets.len());
        }

        for (index, target) in targets.iter().enumerate() {
            self.process_board(target, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_targets(&self) -> Vec<PathBuf> {
        let mut targets = Vec::with_capacity(self.cli.count);

        for run in 0..self.cli.count {
            let path = if self.cli.count == 1 {
                self.cli.output.clone()
            } else {
                Self::numbered_output_path(&self.cli.output, run)
            };

            if self.should_generate(&path) {
                targets.push(path);
            }
        }

        targets
    }

    fn should_generate(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_board(&mut self, output_path: &Path, index: usize) -> Result<()> {
        let seed = self.cli.seed.wrapping_add(index as u64);
        let mut simulation = Simulation::new(self.cli.rows, self.cli.cols, seed)?;

        if self.cli.visualize {
            simulation.enable_visualization(self.cli.iterations);
        }

        if let Some(ref mut pm) = self.progress_manager {
            let label = output_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            pm.start_board(index, &label, self.cli.iterations);
        }

        for step in 1..=self.cli.iterations {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_step(index, step);
            }

            if !simulation.step()? {
                break;
            }
        }

        export_board_as_png(
            simulation.grid(),
            output_path
                .to_str()
                .ok_or_else(|| invalid_parameter("output", &"", &"Invalid output path"))?,
        )?;

        if self.cli.visualize {
            let viz_path = Self::visualization_path(output_path);
            simulation.export_visualization(viz_path.to_str().ok_or_else(|| {
                invalid_parameter("output", &"", &"Invalid visualization path")
            })?)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_board(index);
        }

        Ok(())
    }

    fn numbered_output_path(output: &Path, run: usize) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let extension = output.extension().unwrap_or_default();
        let numbered = format!(
            "{}_{run:03}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );

        if let Some(parent) = output.parent() {
            parent.join(numbered)
        } else {
            PathBuf::from(numbered)
        }
    }

    fn visualization_path(output: &Path) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let viz_name = format!("{}{}.gif", stem.to_string_lossy(), VISUALIZATION_SUFFIX);

        if let Some(parent) = output.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}
