//! The frozen puzzle value handed to rendering collaborators

use crate::puzzle::clues::ClueIndex;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;
use crate::words::entry::WordEntry;

/// Which puzzle family a grid belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleKind {
    /// Free placement in eight directions with filler letters
    WordSearch,
    /// Intersection-constrained placement with blocked cells and numbering
    Crossword,
}

/// A word committed to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The entry this placement realizes
    pub entry: WordEntry,
    /// Start row, zero-based from the top
    pub row: usize,
    /// Start column, zero-based from the left
    pub col: usize,
    /// Reading direction from the start cell
    pub direction: Direction,
}

impl PlacedWord {
    /// Grid coordinates covered by this placement, in reading order
    ///
    /// Positions are guaranteed in bounds by placement validation, so the
    /// signed arithmetic here never goes negative.
    pub fn covered_cells(&self) -> Vec<(usize, usize)> {
        let [dr, dc] = self.direction.delta();
        (0..self.entry.letter_count() as i32)
            .map(|step| {
                (
                    (self.row as i32 + dr * step) as usize,
                    (self.col as i32 + dc * step) as usize,
                )
            })
            .collect()
    }
}

/// A finished, immutable puzzle
///
/// Either a structurally valid (possibly incomplete) puzzle is produced, or
/// assembly fails before any grid exists; there is no partial state. Words
/// that could not be placed are reported in `skipped` rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Puzzle family
    pub kind: PuzzleKind,
    /// The letter grid, fully filled (word search) or blocked and numbered
    /// (crossword)
    pub grid: Grid,
    /// Successfully placed words in placement order
    pub placements: Vec<PlacedWord>,
    /// Words that exhausted their placement options
    pub skipped: Vec<WordEntry>,
    /// Numbered clues; empty for word-search puzzles
    pub clues: ClueIndex,
}

#[cfg(test)]
mod tests {
    use super::PlacedWord;
    use crate::spatial::direction::Direction;
    use crate::words::entry::WordEntry;

    #[test]
    fn test_covered_cells_follow_direction() {
        let entry = WordEntry::new("CAT", None).unwrap_or_else(|_| unreachable!("valid word"));
        let placement = PlacedWord {
            entry,
            row: 2,
            col: 4,
            direction: Direction::UpRight,
        };

        assert_eq!(placement.covered_cells(), vec![(2, 4), (1, 5), (0, 6)]);
    }
}
