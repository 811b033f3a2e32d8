//! Sequential numbering of crossword entry starts
//!
//! Cells are scanned in row-major order; a cell receives the next number
//! when it begins an across run (nothing readable to its left, a letter to
//! its right) or a down run (nothing readable above, a letter below). A
//! cell starting both runs gets a single shared number. Rerunning the pass
//! on the same grid always reproduces the same numbers.

use crate::spatial::grid::Grid;

/// Assign entry numbers in row-major scan order
pub fn assign_numbers(grid: &mut Grid) {
    let mut next = 1_u32;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.letter(row, col).is_none() {
                continue;
            }

            let left = col
                .checked_sub(1)
                .is_some_and(|c| grid.letter(row, c).is_some());
            let right = grid.letter(row, col + 1).is_some();
            let above = row
                .checked_sub(1)
                .is_some_and(|r| grid.letter(r, col).is_some());
            let below = grid.letter(row + 1, col).is_some();

            let starts_across = !left && right;
            let starts_down = !above && below;

            if starts_across || starts_down {
                if let Some(cell) = grid.get_mut(row, col) {
                    cell.number = Some(next);
                }
                next += 1;
            }
        }
    }
}
