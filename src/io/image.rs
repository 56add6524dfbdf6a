//! Board rendering and PNG export
//!
//! Reproduces the classic look of the puzzle: dark background, square cells
//! separated by quarter-cell margins, and grayscale pipe arms drawn from the
//! cell center towards every occupied edge. Undecided and empty cells render
//! as bare cell backgrounds.

use crate::algorithm::rules;
use crate::io::configuration::{
    BOARD_BACKGROUND_COLOR, CELL_BACKGROUND_COLOR, CELL_SIZE, PIPE_COLOR,
};
use crate::io::error::{GenerationError, Result};
use crate::spatial::{Cell, Direction, Orientation, PipeGrid};
use image::{Rgba, RgbaImage};

/// Decided orientation of every cell in linear order, `None` when undecided
pub fn board_snapshot(grid: &PipeGrid) -> Vec<Option<Orientation>> {
    grid.cells().map(Cell::decided_type).collect()
}

/// Pixel dimensions of a rendered board at the given cell size
///
/// Margin and outer padding derive from the cell size (a quarter and a half
/// of it respectively), so boards scale uniformly between PNG and GIF output.
pub const fn board_dimensions(rows: usize, cols: usize, cell_size: u32) -> (u32, u32) {
    let margin = cell_size / 4;
    let padding = cell_size / 2;
    let width = padding * 2 + cols as u32 * (cell_size + margin) - margin;
    let height = padding * 2 + rows as u32 * (cell_size + margin) - margin;
    (width, height)
}

/// Render a board snapshot into an RGBA image
pub fn render_board(
    cells: &[Option<Orientation>],
    rows: usize,
    cols: usize,
    cell_size: u32,
) -> RgbaImage {
    let margin = cell_size / 4;
    let padding = cell_size / 2;
    let (width, height) = board_dimensions(rows, cols, cell_size);

    let mut img = RgbaImage::from_pixel(width, height, Rgba(BOARD_BACKGROUND_COLOR));

    for (index, decided) in cells.iter().enumerate() {
        let col = (index % cols.max(1)) as u32;
        let row = (index / cols.max(1)) as u32;
        let x = padding + col * (cell_size + margin);
        let y = padding + row * (cell_size + margin);

        fill_rect(
            &mut img,
            x,
            y,
            cell_size,
            cell_size,
            Rgba(CELL_BACKGROUND_COLOR),
        );

        if let Some(orientation) = decided {
            draw_pipe(&mut img, x, y, cell_size, *orientation);
        }
    }

    img
}

/// Export the current board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(grid: &PipeGrid, output_path: &str) -> Result<()> {
    let snapshot = board_snapshot(grid);
    let img = render_board(&snapshot, grid.rows(), grid.cols(), CELL_SIZE);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}

// Arms reach from a central block to every occupied edge; the T shapes of
// the five orientations fall out of the edge-occupancy rule
fn draw_pipe(img: &mut RgbaImage, x: u32, y: u32, cell_size: u32, orientation: Orientation) {
    let pipe = cell_size / 4;
    let center = cell_size / 2;
    let half_pipe = pipe / 2;
    let pipe_color = Rgba(PIPE_COLOR);

    let occupied: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&edge| rules::occupies_edge(orientation, edge))
        .collect();

    if occupied.is_empty() {
        return;
    }

    fill_rect(
        img,
        x + center - half_pipe,
        y + center - half_pipe,
        pipe,
        pipe,
        pipe_color,
    );

    for edge in occupied {
        let (arm_x, arm_y, arm_w, arm_h) = match edge {
            Direction::North => (x + center - half_pipe, y, pipe, center),
            Direction::East => (x + center, y + center - half_pipe, center, pipe),
            Direction::South => (x + center - half_pipe, y + center, pipe, center),
            Direction::West => (x, y + center - half_pipe, center, pipe),
        };
        fill_rect(img, arm_x, arm_y, arm_w, arm_h, pipe_color);
    }
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}
