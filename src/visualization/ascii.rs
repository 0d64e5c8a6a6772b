//! ASCII projection of the 3D system onto a 2D character grid
//!
//! Maps body positions into a `height` x `width` grid sized to the terminal:
//! x selects the column, y the row, and z one of sixteen depth characters
//! running from sparse (`.`) to dense (`@`). Later bodies overwrite earlier
//! ones landing on the same cell.

use crate::simulation::states::{NVec3, System};

/// Depth characters from least z to greatest z
pub const DEPTH_PALETTE: [char; 16] = [
    '.', '\'', ':', '-', '_', '^', '+', '=', '~', '*', 'o', 'O', '#', '%', '&', '@',
];

/// Axis-aligned bounding box over all bodies
struct Bounds {
    min: NVec3,
    max: NVec3,
}

fn bounds(sys: &System) -> Bounds {
    let mut min = NVec3::repeat(f64::INFINITY);
    let mut max = NVec3::repeat(f64::NEG_INFINITY);
    for b in &sys.bodies {
        min = min.inf(&b.x);
        max = max.sup(&b.x);
    }
    Bounds { min, max }
}

/// Map a coordinate into a cell index on an axis with `cells` cells
/// A zero-extent axis (all bodies share the coordinate) falls back to the
/// centre cell instead of dividing by zero; rounding is clamped to the grid
fn axis_cell(value: f64, min: f64, max: f64, cells: usize) -> usize {
    let extent = max - min;
    if !(extent > 0.0) {
        return (cells - 1) / 2;
    }
    let idx = ((value - min) / extent * (cells - 1) as f64).round();
    (idx.max(0.0) as usize).min(cells - 1)
}

/// Render the system onto a `height` x `width` grid of characters
/// Rows are newline-terminated; the tick status line is the scheduler's job
pub fn render(height: usize, width: usize, sys: &System) -> String {
    let height = height.max(1);
    let width = width.max(1);

    let b = bounds(sys);

    // Flat row-major grid of spaces, one char per cell
    let mut grid = vec![' '; width * height];

    // Plot in collection order; last write wins on shared cells
    for body in &sys.bodies {
        let col = axis_cell(body.x.x, b.min.x, b.max.x, width);
        let row = axis_cell(body.x.y, b.min.y, b.max.y, height);
        let z = axis_cell(body.x.z, b.min.z, b.max.z, DEPTH_PALETTE.len());
        grid[row * width + col] = DEPTH_PALETTE[z];
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid.chunks(width) {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
