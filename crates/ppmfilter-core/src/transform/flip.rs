//! Mirror operations.
//!
//! Both flips keep the grid dimensions and only permute pixel positions.

use crate::grid::Grid;

/// Mirror the image left to right.
///
/// `new[row][col] = old[row][width - 1 - col]`
pub fn flip_horizontal(mut grid: Grid) -> Grid {
    for row in grid.rows_mut() {
        row.reverse();
    }
    grid
}

/// Mirror the image top to bottom.
///
/// `new[row][col] = old[height - 1 - row][col]`
pub fn flip_vertical(mut grid: Grid) -> Grid {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let pixels = grid.pixels_mut();

    for top in 0..height / 2 {
        let bottom = height - 1 - top;
        // Split so the two rows can be borrowed mutably at once
        let (upper, lower) = pixels.split_at_mut(bottom * width);
        upper[top * width..(top + 1) * width].swap_with_slice(&mut lower[..width]);
    }
    grid
}


// ============================================================================
// Property-Based Tests
// ============================================================================
