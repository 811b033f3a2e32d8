//! The assembled puzzle value and its clue index

/// The frozen puzzle value
pub mod assembled;
/// Numbered clue lists
pub mod clues;

pub use assembled::{PlacedWord, Puzzle, PuzzleKind};
pub use clues::{ClueEntry, ClueIndex};
