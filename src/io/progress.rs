//! Multi-board progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch generation
///
/// Automatically switches between individual progress bars (for a handful of
/// boards) and a single batch progress bar (for large batches) based on the
/// requested board count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    board_bars: Vec<ProgressBar>,
    board_count: usize,
    /// Stores (`label`, `current_step`, `max_steps`) for rolling window display
    board_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Boards: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            board_bars: Vec::new(),
            board_count: 0,
            board_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on board count
    pub fn initialize(&mut self, board_count: usize) {
        self.board_count = board_count;

        // Switch to batch mode for large batches to avoid terminal spam
        if board_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(board_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = board_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(STEP_STYLE.clone());
            self.board_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure the progress display for a new board
    pub fn start_board(&mut self, index: usize, label: &str, max_steps: usize) {
        if index >= self.board_states.len() {
            self.board_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.board_states.get_mut(index) {
            *state = (label.to_string(), 0, max_steps);
        }
        self.update_bars();
    }

    /// Report the current collapse step for a board
    pub fn update_step(&mut self, board_index: usize, step: usize) {
        if let Some(state) = self.board_states.get_mut(board_index) {
            state.1 = step;
        }
        self.update_bars();
    }

    /// Mark a board as completed and update batch progress
    pub fn complete_board(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.board_states.get_mut(index) {
            let max_steps = state.2;
            state.0 = format!("✓ {}", state.0);
            state.1 = max_steps;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All boards generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active boards
    fn update_bars(&self) {
        let mut active_boards = Vec::new();
        for (i, (label, current, max)) in self.board_states.iter().enumerate() {
            if !label.is_empty() {
                active_boards.push((i, label.clone(), *current, *max));
            }
        }

        // Take the last N boards
        let start_idx = active_boards
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_boards = active_boards.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (_board_idx, label, current, max)) in visible_boards.iter().enumerate() {
            if let Some(bar) = self.board_bars.get(bar_idx) {
                bar.set_length(*max as u64);
                bar.set_position(*current as u64);
                let max_width = max.to_string().len();
                bar.set_message(format!("{current:>max_width$}/{max}"));
                bar.set_prefix(label.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible_boards.len()..self.board_bars.len() {
            if let Some(bar) = self.board_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
