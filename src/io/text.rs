//! Plain-text rendering for terminal and file output
//!
//! A presentation convenience for the CLI, not part of the library
//! contract: the solution grid plus a word bank (word search) or numbered
//! clue lists (crossword).

use std::fmt::Write as _;

use crate::puzzle::assembled::{Puzzle, PuzzleKind};
use crate::puzzle::clues::ClueEntry;
use crate::spatial::grid::Grid;
use crate::words::entry::WordEntry;

/// Character rendered for blocked crossword cells
const BLOCKED: char = '#';

/// Render a puzzle as plain text
pub fn render(puzzle: &Puzzle) -> String {
    match puzzle.kind {
        PuzzleKind::WordSearch => render_word_search(puzzle),
        PuzzleKind::Crossword => render_crossword(puzzle),
    }
}

fn render_grid(grid: &Grid, output: &mut String) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if col > 0 {
                output.push(' ');
            }
            output.push(grid.letter(row, col).unwrap_or(BLOCKED));
        }
        output.push('\n');
    }
}

fn render_word_search(puzzle: &Puzzle) -> String {
    let mut output = String::new();
    render_grid(&puzzle.grid, &mut output);

    let mut bank: Vec<&str> = puzzle
        .placements
        .iter()
        .map(|placement| placement.entry.word())
        .collect();
    bank.sort_unstable();

    let _ = writeln!(output, "\nFind these words: {}", bank.join(", "));
    output
}

fn render_clue(clue: &ClueEntry, output: &mut String) {
    match &clue.clue {
        Some(text) => {
            let _ = writeln!(output, "  {}. {} ({})", clue.number, text, clue.length);
        }
        None => {
            let _ = writeln!(output, "  {}. ({} letters)", clue.number, clue.length);
        }
    }
}

fn render_crossword(puzzle: &Puzzle) -> String {
    let mut output = String::new();
    render_grid(&puzzle.grid, &mut output);

    output.push_str("\nAcross:\n");
    for clue in &puzzle.clues.across {
        render_clue(clue, &mut output);
    }
    output.push_str("Down:\n");
    for clue in &puzzle.clues.down {
        render_clue(clue, &mut output);
    }

    if !puzzle.skipped.is_empty() {
        let skipped: Vec<&str> = puzzle.skipped.iter().map(WordEntry::word).collect();
        let _ = writeln!(output, "\nNot placed: {}", skipped.join(", "));
    }

    output
}
