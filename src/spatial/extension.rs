//! Dynamically growing letter grid for intersection-driven placement
//!
//! Crossword bounds are computed during placement rather than fixed in
//! advance. The working grid stores letters in an `Array2` behind an offset
//! that maps world coordinates (which may go negative as words extend past
//! the first placement) to array indices, and grows with minimal padding
//! whenever a write lands outside the current allocation.

use ndarray::Array2;

/// Growable letter matrix addressed by world coordinates
#[derive(Debug, Clone)]
pub struct WorkGrid {
    letters: Array2<Option<char>>,
    /// Added to world coordinates to obtain array indices
    offset: [i32; 2],
}

impl Default for WorkGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkGrid {
    /// Create an empty working grid centred on the origin
    pub fn new() -> Self {
        Self {
            letters: Array2::from_elem((1, 1), None),
            offset: [0, 0],
        }
    }

    /// Letter at a world position, or `None` when the cell is empty or
    /// outside the current allocation
    pub fn letter(&self, pos: [i32; 2]) -> Option<char> {
        let row = pos[0] + self.offset[0];
        let col = pos[1] + self.offset[1];
        if row < 0 || col < 0 {
            return None;
        }
        self.letters
            .get([row as usize, col as usize])
            .copied()
            .flatten()
    }

    /// Write a letter at a world position, growing the allocation as needed
    ///
    /// Overlapping placements must agree on the shared letter; candidate
    /// validation rejects conflicts before any write happens.
    pub fn set_letter(&mut self, pos: [i32; 2], letter: char) {
        self.grow_to_include(pos);
        let row = (pos[0] + self.offset[0]) as usize;
        let col = (pos[1] + self.offset[1]) as usize;
        if let Some(slot) = self.letters.get_mut([row, col]) {
            debug_assert!(
                slot.is_none() || *slot == Some(letter),
                "conflicting letters at world position {pos:?}"
            );
            *slot = Some(letter);
        }
    }

    /// World-coordinate bounds of all occupied cells, as inclusive (min, max)
    pub fn occupied_bounds(&self) -> Option<([i32; 2], [i32; 2])> {
        let mut bounds: Option<([i32; 2], [i32; 2])> = None;
        for ((row, col), slot) in self.letters.indexed_iter() {
            if slot.is_none() {
                continue;
            }
            let pos = [row as i32 - self.offset[0], col as i32 - self.offset[1]];
            bounds = Some(match bounds {
                None => (pos, pos),
                Some((min, max)) => (
                    [min[0].min(pos[0]), min[1].min(pos[1])],
                    [max[0].max(pos[0]), max[1].max(pos[1])],
                ),
            });
        }
        bounds
    }

    /// Extend the allocation so a world position falls inside it
    ///
    /// Calculates minimal padding per side, copies existing data into the
    /// enlarged array, and shifts the offset so world coordinates stay
    /// stable across the move.
    fn grow_to_include(&mut self, pos: [i32; 2]) {
        let (rows, cols) = self.letters.dim();
        let index = [pos[0] + self.offset[0], pos[1] + self.offset[1]];

        let pad_top = if index[0] < 0 { (-index[0]) as usize } else { 0 };
        let pad_left = if index[1] < 0 { (-index[1]) as usize } else { 0 };
        let pad_bottom = if index[0] >= rows as i32 {
            (index[0] - rows as i32 + 1) as usize
        } else {
            0
        };
        let pad_right = if index[1] >= cols as i32 {
            (index[1] - cols as i32 + 1) as usize
        } else {
            0
        };

        if pad_top + pad_left + pad_bottom + pad_right == 0 {
            return;
        }

        let mut extended = Array2::from_elem(
            (rows + pad_top + pad_bottom, cols + pad_left + pad_right),
            None,
        );

        // O(mn) copy preserves spatial relationships
        for row in 0..rows {
            for col in 0..cols {
                if let (Some(src), Some(dst)) = (
                    self.letters.get([row, col]),
                    extended.get_mut([row + pad_top, col + pad_left]),
                ) {
                    *dst = *src;
                }
            }
        }

        self.letters = extended;
        self.offset = [
            self.offset[0] + pad_top as i32,
            self.offset[1] + pad_left as i32,
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::WorkGrid;

    #[test]
    fn test_growth_preserves_letters_at_world_coordinates() {
        let mut work = WorkGrid::new();
        work.set_letter([0, 0], 'A');
        work.set_letter([4, 7], 'B');
        work.set_letter([-3, -2], 'C');

        assert_eq!(work.letter([0, 0]), Some('A'));
        assert_eq!(work.letter([4, 7]), Some('B'));
        assert_eq!(work.letter([-3, -2]), Some('C'));
        assert_eq!(work.letter([2, 2]), None);
    }

    #[test]
    fn test_occupied_bounds_track_extremes() {
        let mut work = WorkGrid::new();
        assert_eq!(work.occupied_bounds(), None);

        work.set_letter([1, -4], 'X');
        work.set_letter([-2, 5], 'Y');

        assert_eq!(work.occupied_bounds(), Some(([-2, -4], [1, 5])));
    }
}
