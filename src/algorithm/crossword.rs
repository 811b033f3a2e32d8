//! Intersection-constrained placement with dynamically computed bounds
//!
//! The first word lands horizontally at the origin; every later word must
//! cross an already-placed word at a shared letter, oriented perpendicular
//! to it. Candidates that would corrupt a letter, butt against a parallel
//! word, or extend an existing run are rejected; survivors are scored by
//! intersections gained against bounding-box growth. This is a greedy
//! heuristic with graceful degradation, not a global optimizer: words with
//! no valid candidate are skipped, never placed disconnected.

use crate::io::configuration::{GROWTH_WEIGHT, INTERSECTION_WEIGHT};
use crate::puzzle::assembled::PlacedWord;
use crate::spatial::direction::Direction;
use crate::spatial::extension::WorkGrid;
use crate::words::entry::WordEntry;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Scoring weights for candidate selection
///
/// The exact balance is a tuning choice; the defaults favor tightly knotted
/// grids over sprawling ones.
#[derive(Debug, Clone, Copy)]
pub struct CandidateWeights {
    /// Reward per additional intersection a candidate creates
    pub intersection: f64,
    /// Penalty per cell of bounding-box growth a candidate causes
    pub growth: f64,
}

impl Default for CandidateWeights {
    fn default() -> Self {
        Self {
            intersection: INTERSECTION_WEIGHT,
            growth: GROWTH_WEIGHT,
        }
    }
}

/// Outcome of crossword placement, normalized to non-negative coordinates
#[derive(Debug)]
pub struct CrosswordLayout {
    /// Letters cropped to the occupied bounding box; `None` cells become
    /// blocked when the grid freezes
    pub letters: Array2<Option<char>>,
    /// Successfully placed words in placement order
    pub placements: Vec<PlacedWord>,
    /// Words with no conflict-free intersection anywhere
    pub skipped: Vec<WordEntry>,
}

/// A word accepted into the working grid, in world coordinates
struct Anchor {
    entry_index: usize,
    start: [i32; 2],
    direction: Direction,
    letters: Vec<char>,
}

impl Anchor {
    fn cell(&self, step: usize) -> [i32; 2] {
        let [dr, dc] = self.direction.delta();
        [
            self.start[0] + dr * step as i32,
            self.start[1] + dc * step as i32,
        ]
    }
}

/// A validated candidate placement awaiting selection
struct Candidate {
    start: [i32; 2],
    direction: Direction,
    score: f64,
}

/// Places words by crossing them through already-placed words
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosswordPlacer {
    /// Candidate scoring weights
    pub weights: CandidateWeights,
}

impl CrosswordPlacer {
    /// Create a placer with the given scoring weights
    pub const fn new(weights: CandidateWeights) -> Self {
        Self { weights }
    }

    /// Attempt every word in the order given
    ///
    /// The generator only shuffles the order in which already-placed words
    /// are considered, so a fresh seed can break score ties differently on
    /// retry while a fixed seed stays fully reproducible.
    pub fn place(&self, entries: &[WordEntry], rng: &mut StdRng) -> CrosswordLayout {
        let mut work = WorkGrid::new();
        let mut anchors: Vec<Anchor> = Vec::new();
        let mut skipped = Vec::new();

        for (entry_index, entry) in entries.iter().enumerate() {
            let letters: Vec<char> = entry.word().chars().collect();

            if anchors.is_empty() {
                commit(&mut work, [0, 0], Direction::Right, &letters);
                anchors.push(Anchor {
                    entry_index,
                    start: [0, 0],
                    direction: Direction::Right,
                    letters,
                });
                continue;
            }

            match self.best_candidate(&work, &anchors, &letters, rng) {
                Some(candidate) => {
                    commit(&mut work, candidate.start, candidate.direction, &letters);
                    anchors.push(Anchor {
                        entry_index,
                        start: candidate.start,
                        direction: candidate.direction,
                        letters,
                    });
                }
                None => skipped.push(entry.clone()),
            }
        }

        normalize(&work, &anchors, entries, skipped)
    }

    /// Enumerate every letter match against every anchor and keep the
    /// highest-scoring valid placement; ties go to the earliest found
    fn best_candidate(
        &self,
        work: &WorkGrid,
        anchors: &[Anchor],
        word: &[char],
        rng: &mut StdRng,
    ) -> Option<Candidate> {
        let mut order: Vec<usize> = (0..anchors.len()).collect();
        order.shuffle(rng);

        let mut best: Option<Candidate> = None;

        for anchor_index in order {
            let Some(anchor) = anchors.get(anchor_index) else {
                continue;
            };
            let direction = anchor.direction.crossed();
            let [dr, dc] = direction.delta();

            for (anchor_step, &anchor_ch) in anchor.letters.iter().enumerate() {
                for (word_step, &ch) in word.iter().enumerate() {
                    if anchor_ch != ch {
                        continue;
                    }

                    let crossing = anchor.cell(anchor_step);
                    let start = [
                        crossing[0] - dr * word_step as i32,
                        crossing[1] - dc * word_step as i32,
                    ];

                    let Some(intersections) = evaluate(work, word, start, direction) else {
                        continue;
                    };

                    let growth = bounding_growth(work, word, start, direction);
                    let score = self.weights.intersection * intersections as f64
                        - self.weights.growth * growth as f64;

                    if best.as_ref().is_none_or(|current| score > current.score) {
                        best = Some(Candidate {
                            start,
                            direction,
                            score,
                        });
                    }
                }
            }
        }

        best
    }
}

/// Write a validated candidate into the working grid
fn commit(work: &mut WorkGrid, start: [i32; 2], direction: Direction, word: &[char]) {
    let [dr, dc] = direction.delta();
    for (step, &ch) in word.iter().enumerate() {
        work.set_letter(
            [start[0] + dr * step as i32, start[1] + dc * step as i32],
            ch,
        );
    }
}

/// Check a candidate placement and count the intersections it would create
///
/// Returns `None` for any letter conflict, for a run that would extend an
/// existing word (occupied cell just before the start or after the end), or
/// for a fresh cell that would sit flush against a parallel word.
fn evaluate(work: &WorkGrid, word: &[char], start: [i32; 2], direction: Direction) -> Option<usize> {
    let [dr, dc] = direction.delta();
    let len = word.len() as i32;

    if work
        .letter([start[0] - dr, start[1] - dc])
        .is_some()
    {
        return None;
    }
    if work
        .letter([start[0] + dr * len, start[1] + dc * len])
        .is_some()
    {
        return None;
    }

    let mut intersections = 0;
    for (step, &ch) in word.iter().enumerate() {
        let pos = [start[0] + dr * step as i32, start[1] + dc * step as i32];
        match work.letter(pos) {
            Some(existing) if existing == ch => intersections += 1,
            Some(_) => return None,
            None => {
                // A fresh cell may not touch a parallel word sideways;
                // intersection cells already belong to the crossing word
                if work.letter([pos[0] + dc, pos[1] + dr]).is_some()
                    || work.letter([pos[0] - dc, pos[1] - dr]).is_some()
                {
                    return None;
                }
            }
        }
    }

    (intersections > 0).then_some(intersections)
}

/// Cells of bounding-box area the candidate would add
fn bounding_growth(work: &WorkGrid, word: &[char], start: [i32; 2], direction: Direction) -> i64 {
    let Some((min, max)) = work.occupied_bounds() else {
        return 0;
    };

    let [dr, dc] = direction.delta();
    let last = word.len() as i32 - 1;
    let end = [start[0] + dr * last, start[1] + dc * last];

    let new_min = [min[0].min(start[0]), min[1].min(start[1])];
    let new_max = [max[0].max(end[0]), max[1].max(end[1])];

    let old_area =
        i64::from(max[0] - min[0] + 1) * i64::from(max[1] - min[1] + 1);
    let new_area =
        i64::from(new_max[0] - new_min[0] + 1) * i64::from(new_max[1] - new_min[1] + 1);

    new_area - old_area
}

/// Crop the working grid to its occupied bounds and shift placements to
/// non-negative coordinates
fn normalize(
    work: &WorkGrid,
    anchors: &[Anchor],
    entries: &[WordEntry],
    skipped: Vec<WordEntry>,
) -> CrosswordLayout {
    let Some((min, max)) = work.occupied_bounds() else {
        return CrosswordLayout {
            letters: Array2::from_elem((0, 0), None),
            placements: Vec::new(),
            skipped,
        };
    };

    let rows = (max[0] - min[0] + 1) as usize;
    let cols = (max[1] - min[1] + 1) as usize;

    let mut letters = Array2::from_elem((rows, cols), None);
    for row in 0..rows {
        for col in 0..cols {
            if let Some(slot) = letters.get_mut([row, col]) {
                *slot = work.letter([min[0] + row as i32, min[1] + col as i32]);
            }
        }
    }

    let placements = anchors
        .iter()
        .filter_map(|anchor| {
            entries.get(anchor.entry_index).map(|entry| PlacedWord {
                entry: entry.clone(),
                row: (anchor.start[0] - min[0]) as usize,
                col: (anchor.start[1] - min[1]) as usize,
                direction: anchor.direction,
            })
        })
        .collect();

    CrosswordLayout {
        letters,
        placements,
        skipped,
    }
}
