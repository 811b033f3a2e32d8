//! Puzzle orchestration: word ordering, bounded retries, final assembly
//!
//! The assembler owns the policies the placers deliberately do not: words
//! are attempted longest first (ties keep input order) to maximize grid
//! utilization, and a layout placing too few words triggers a whole-run
//! retry with a derived seed, bounded so generation always terminates. The
//! best attempt seen is kept, so degraded output still reports every
//! unplaced word instead of failing.

use std::cmp::Reverse;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::crossword::{CandidateWeights, CrosswordLayout, CrosswordPlacer};
use crate::algorithm::fill::fill_unused;
use crate::algorithm::numbering::assign_numbers;
use crate::algorithm::wordsearch::{WordSearchLayout, WordSearchPlacer};
use crate::io::configuration::{
    MAX_ASSEMBLY_ATTEMPTS, MAX_GRID_DIMENSION, MAX_PLACEMENT_TRIALS, MIN_PLACEMENT_RATE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::puzzle::assembled::{Puzzle, PuzzleKind};
use crate::puzzle::clues::ClueIndex;
use crate::spatial::grid::{CellContent, Grid};
use crate::words::entry::WordEntry;
use crate::words::list::WordList;

/// Retry and sizing policy for puzzle assembly
#[derive(Debug, Clone, Copy)]
pub struct AssemblyConfig {
    /// Minimum fraction of words that must place before a layout is accepted
    pub min_placement_rate: f64,
    /// Total placement attempts before settling for the best seen
    pub max_attempts: usize,
    /// Trial budget per word in word-search mode
    pub max_trials: usize,
    /// Candidate scoring weights for crossword mode
    pub weights: CandidateWeights,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            min_placement_rate: MIN_PLACEMENT_RATE,
            max_attempts: MAX_ASSEMBLY_ATTEMPTS,
            max_trials: MAX_PLACEMENT_TRIALS,
            weights: CandidateWeights::default(),
        }
    }
}

/// Drives placement, filling, and numbering into finished puzzles
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleAssembler {
    config: AssemblyConfig,
}

impl PuzzleAssembler {
    /// Create an assembler with an explicit policy
    pub const fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    /// Generate a word-search puzzle of exactly `width` by `height` cells
    ///
    /// A fixed seed yields a byte-identical puzzle; retries derive their
    /// seeds from it deterministically.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension is zero or exceeds
    /// the safety cap. Unplaceable words are not errors; they appear in the
    /// puzzle's `skipped` list.
    pub fn word_search(
        &self,
        words: &WordList,
        width: usize,
        height: usize,
        seed: u64,
    ) -> Result<Puzzle> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let order = longest_first(words);
        let placer = WordSearchPlacer {
            width,
            height,
            max_trials: self.config.max_trials,
        };

        let mut best: Option<WordSearchLayout> = None;
        for attempt in 0..self.config.max_attempts.max(1) {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(attempt as u64));
            let mut layout = placer.place(&order, &mut rng);
            fill_unused(&mut layout.letters, &mut rng);

            let accepted = placement_rate(layout.placements.len(), order.len())
                >= self.config.min_placement_rate;
            if best
                .as_ref()
                .is_none_or(|kept| layout.placements.len() > kept.placements.len())
            {
                best = Some(layout);
            }
            if accepted {
                break;
            }
        }

        let layout = match best {
            Some(layout) => layout,
            // Unreachable: the loop above always runs at least once
            None => {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut layout = placer.place(&order, &mut rng);
                fill_unused(&mut layout.letters, &mut rng);
                layout
            }
        };
        let grid = Grid::from_letters(&layout.letters, CellContent::Empty);

        Ok(Puzzle {
            kind: PuzzleKind::WordSearch,
            grid,
            placements: layout.placements,
            skipped: layout.skipped,
            clues: ClueIndex::default(),
        })
    }

    /// Generate a crossword puzzle with dynamically computed bounds
    ///
    /// A fixed seed yields a byte-identical puzzle. Words that cannot cross
    /// any placed word appear in the puzzle's `skipped` list.
    pub fn crossword(&self, words: &WordList, seed: u64) -> Puzzle {
        let order = longest_first(words);
        let placer = CrosswordPlacer::new(self.config.weights);

        let mut best: Option<CrosswordLayout> = None;
        for attempt in 0..self.config.max_attempts.max(1) {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(attempt as u64));
            let layout = placer.place(&order, &mut rng);

            let accepted = placement_rate(layout.placements.len(), order.len())
                >= self.config.min_placement_rate;
            if best
                .as_ref()
                .is_none_or(|kept| layout.placements.len() > kept.placements.len())
            {
                best = Some(layout);
            }
            if accepted {
                break;
            }
        }

        let layout =
            best.unwrap_or_else(|| placer.place(&order, &mut StdRng::seed_from_u64(seed)));

        let mut grid = Grid::from_letters(&layout.letters, CellContent::Blocked);
        assign_numbers(&mut grid);
        let clues = ClueIndex::from_placements(&grid, &layout.placements);

        Puzzle {
            kind: PuzzleKind::Crossword,
            grid,
            placements: layout.placements,
            skipped: layout.skipped,
            clues,
        }
    }
}

/// Longest words first; the stable sort keeps input order among equals
fn longest_first(words: &WordList) -> Vec<WordEntry> {
    let mut order = words.entries().to_vec();
    order.sort_by_key(|entry| Reverse(entry.letter_count()));
    order
}

fn placement_rate(placed: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    placed as f64 / total as f64
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("exceeds maximum grid dimension {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
