//! Numbered clue lists for crossword puzzles

use crate::puzzle::assembled::PlacedWord;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// One numbered clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    /// Entry number shown in the grid
    pub number: u32,
    /// Clue text, when the source entry carried one
    pub clue: Option<String>,
    /// Answer length in letters
    pub length: usize,
}

/// Clues keyed by direction, ordered by entry number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueIndex {
    /// Across (left-to-right) clues
    pub across: Vec<ClueEntry>,
    /// Down clues
    pub down: Vec<ClueEntry>,
}

impl ClueIndex {
    /// Collect clues from placements against a numbered grid
    ///
    /// Every crossword placement starts an across or down run, so its start
    /// cell carries a number once the numbering pass has run; placements
    /// whose start is unnumbered are ignored rather than misfiled.
    pub fn from_placements(grid: &Grid, placements: &[PlacedWord]) -> Self {
        let mut index = Self::default();

        for placement in placements {
            let Some(number) = grid
                .get(placement.row, placement.col)
                .and_then(|cell| cell.number)
            else {
                continue;
            };

            let clue = ClueEntry {
                number,
                clue: placement.entry.clue().map(str::to_owned),
                length: placement.entry.letter_count(),
            };

            match placement.direction {
                Direction::Right => index.across.push(clue),
                Direction::Down => index.down.push(clue),
                _ => {}
            }
        }

        index.across.sort_by_key(|clue| clue.number);
        index.down.sort_by_key(|clue| clue.number);
        index
    }

    /// Whether the index holds no clues in either direction
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}
