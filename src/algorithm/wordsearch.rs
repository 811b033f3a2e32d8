//! Free word placement with random starts and orientations
//!
//! Each word gets a bounded number of trials; a trial draws a uniformly
//! random start cell and one of the eight orientations, and succeeds when
//! every covered cell is in bounds and either empty or already holding the
//! letter the word needs there. Exhausting the budget is a recoverable
//! outcome: the word is reported as skipped and placement continues.

use crate::io::configuration::MAX_PLACEMENT_TRIALS;
use crate::puzzle::assembled::PlacedWord;
use crate::spatial::direction::Direction;
use crate::words::entry::WordEntry;
use ndarray::Array2;
use rand::Rng;
use rand::rngs::StdRng;

/// Outcome of word-search placement
#[derive(Debug)]
pub struct WordSearchLayout {
    /// Letters keyed by (row, col); `None` where no word passes
    pub letters: Array2<Option<char>>,
    /// Successfully placed words in placement order
    pub placements: Vec<PlacedWord>,
    /// Words whose trial budget ran out
    pub skipped: Vec<WordEntry>,
}

/// Places words into a fixed-size grid with letter-compatible overlaps
#[derive(Debug, Clone, Copy)]
pub struct WordSearchPlacer {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Trial budget per word
    pub max_trials: usize,
}

impl WordSearchPlacer {
    /// Create a placer with the default trial budget
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            max_trials: MAX_PLACEMENT_TRIALS,
        }
    }

    /// Attempt every word in the order given
    ///
    /// The caller owns the ordering policy (the assembler sorts longest
    /// first) and the seeded generator, so a fixed seed reproduces the
    /// layout exactly.
    pub fn place(&self, entries: &[WordEntry], rng: &mut StdRng) -> WordSearchLayout {
        let mut layout = WordSearchLayout {
            letters: Array2::from_elem((self.height, self.width), None),
            placements: Vec::with_capacity(entries.len()),
            skipped: Vec::new(),
        };

        for entry in entries {
            match self.try_place(&mut layout.letters, entry, rng) {
                Some((row, col, direction)) => layout.placements.push(PlacedWord {
                    entry: entry.clone(),
                    row,
                    col,
                    direction,
                }),
                None => layout.skipped.push(entry.clone()),
            }
        }

        layout
    }

    fn try_place(
        &self,
        letters: &mut Array2<Option<char>>,
        entry: &WordEntry,
        rng: &mut StdRng,
    ) -> Option<(usize, usize, Direction)> {
        let word: Vec<char> = entry.word().chars().collect();

        for _ in 0..self.max_trials {
            let row = rng.random_range(0..self.height) as i32;
            let col = rng.random_range(0..self.width) as i32;
            let direction = Direction::WORD_SEARCH
                .get(rng.random_range(0..Direction::WORD_SEARCH.len()))
                .copied()
                .unwrap_or(Direction::Right);

            if self.write_if_compatible(letters, &word, row, col, direction) {
                return Some((row as usize, col as usize, direction));
            }
        }

        None
    }

    /// Validate a single trial and commit it when every covered cell is
    /// empty or already holds the required letter
    fn write_if_compatible(
        &self,
        letters: &mut Array2<Option<char>>,
        word: &[char],
        row: i32,
        col: i32,
        direction: Direction,
    ) -> bool {
        let [dr, dc] = direction.delta();
        let last = word.len() as i32 - 1;
        let end_row = row + dr * last;
        let end_col = col + dc * last;

        if end_row < 0
            || end_row >= self.height as i32
            || end_col < 0
            || end_col >= self.width as i32
        {
            return false;
        }

        for (step, &ch) in word.iter().enumerate() {
            let index = [
                (row + dr * step as i32) as usize,
                (col + dc * step as i32) as usize,
            ];
            match letters.get(index).copied() {
                Some(None) => {}
                Some(Some(existing)) if existing == ch => {}
                _ => return false,
            }
        }

        for (step, &ch) in word.iter().enumerate() {
            let index = [
                (row + dr * step as i32) as usize,
                (col + dc * step as i32) as usize,
            ];
            if let Some(slot) = letters.get_mut(index) {
                // Overlaps were validated above; two words may only share a
                // cell when they need the same letter there
                debug_assert!(
                    slot.is_none() || *slot == Some(ch),
                    "overlap changed a committed letter"
                );
                *slot = Some(ch);
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::WordSearchPlacer;
    use crate::words::entry::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, None).unwrap_or_else(|_| unreachable!("valid word"))
    }

    #[test]
    fn test_placed_word_reads_correctly_from_grid() {
        let placer = WordSearchPlacer::new(7, 7);
        let mut rng = StdRng::seed_from_u64(3);

        let layout = placer.place(&[entry("HELLO")], &mut rng);

        assert_eq!(layout.placements.len(), 1);
        assert!(layout.skipped.is_empty());

        for placement in &layout.placements {
            for ((row, col), expected) in placement
                .covered_cells()
                .into_iter()
                .zip(placement.entry.word().chars())
            {
                assert_eq!(layout.letters.get([row, col]).copied(), Some(Some(expected)));
            }
        }
    }

    #[test]
    fn test_oversized_word_is_skipped_not_fatal() {
        let placer = WordSearchPlacer::new(3, 3);
        let mut rng = StdRng::seed_from_u64(1);

        let layout = placer.place(&[entry("ELEPHANT")], &mut rng);

        assert!(layout.placements.is_empty());
        assert_eq!(
            layout.skipped.first().map(WordEntry::word),
            Some("ELEPHANT")
        );
    }
}
