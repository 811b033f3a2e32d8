//! Validates end-to-end puzzle assembly for both puzzle kinds

use wordgrid::PuzzleError;
use wordgrid::algorithm::assembler::PuzzleAssembler;
use wordgrid::puzzle::{PlacedWord, Puzzle, PuzzleKind};
use wordgrid::spatial::CellContent;
use wordgrid::words::WordList;
use wordgrid::words::themes::{self, CROSSWORD_THEMES};

fn words(input: &[&str]) -> WordList {
    WordList::from_pairs(input.iter().map(|word| (*word, None)))
        .unwrap_or_else(|_| unreachable!("valid input"))
}

/// Every placed word must read back correctly from the grid, letter by letter
fn assert_placements_read_correctly(puzzle: &Puzzle) {
    for placement in &puzzle.placements {
        for ((row, col), expected) in placement
            .covered_cells()
            .into_iter()
            .zip(placement.entry.word().chars())
        {
            assert_eq!(
                puzzle.grid.letter(row, col),
                Some(expected),
                "{} corrupted at ({row}, {col})",
                placement.entry.word()
            );
        }
    }
}

fn shared_cells(a: &PlacedWord, b: &PlacedWord) -> Vec<(usize, usize)> {
    let other = b.covered_cells();
    a.covered_cells()
        .into_iter()
        .filter(|cell| other.contains(cell))
        .collect()
}

#[test]
fn word_search_places_both_words_and_fills_every_cell() {
    let puzzle = PuzzleAssembler::default()
        .word_search(&words(&["CAT", "DOG"]), 5, 5, 1)
        .unwrap_or_else(|_| unreachable!("valid dimensions"));

    assert_eq!(puzzle.kind, PuzzleKind::WordSearch);
    assert_eq!(puzzle.placements.len(), 2, "both words present");
    assert!(puzzle.skipped.is_empty());
    assert_placements_read_correctly(&puzzle);

    // Every remaining cell holds a filler letter, never an empty sentinel
    for row in 0..puzzle.grid.rows() {
        for col in 0..puzzle.grid.cols() {
            let content = puzzle.grid.get(row, col).map(|cell| cell.content);
            assert!(
                matches!(content, Some(CellContent::Letter(ch)) if ch.is_ascii_uppercase()),
                "cell ({row}, {col}) not filled"
            );
        }
    }
}

#[test]
fn word_search_grid_matches_requested_dimensions() {
    let puzzle = PuzzleAssembler::default()
        .word_search(&words(&["CANYON", "DELTA"]), 9, 4, 3)
        .unwrap_or_else(|_| unreachable!("valid dimensions"));

    assert_eq!(puzzle.grid.rows(), 4);
    assert_eq!(puzzle.grid.cols(), 9);
}

#[test]
fn word_search_oversized_word_is_skipped_without_failing() {
    let puzzle = PuzzleAssembler::default()
        .word_search(&words(&["ELEPHANT"]), 3, 3, 1)
        .unwrap_or_else(|_| unreachable!("valid dimensions"));

    assert!(puzzle.placements.is_empty());
    assert_eq!(puzzle.skipped.len(), 1);
    assert_eq!(
        puzzle.skipped.first().map(|entry| entry.word()),
        Some("ELEPHANT")
    );
}

#[test]
fn empty_word_list_is_rejected_before_assembly() {
    let result = WordList::from_pairs(std::iter::empty());
    assert!(matches!(result, Err(PuzzleError::EmptyWordList)));
}

#[test]
fn zero_grid_dimension_is_rejected() {
    let result = PuzzleAssembler::default().word_search(&words(&["CAT"]), 5, 0, 1);
    assert!(matches!(
        result,
        Err(PuzzleError::InvalidParameter {
            parameter: "height",
            ..
        })
    ));
}

#[test]
fn word_search_is_reproducible_under_a_fixed_seed() {
    let assembler = PuzzleAssembler::default();
    let list = words(&["CORAL", "WHALE", "SHARK", "TIDE", "REEF"]);

    let first = assembler
        .word_search(&list, 10, 10, 99)
        .unwrap_or_else(|_| unreachable!("valid dimensions"));
    let second = assembler
        .word_search(&list, 10, 10, 99)
        .unwrap_or_else(|_| unreachable!("valid dimensions"));

    assert_eq!(first, second);
}

#[test]
fn crossword_is_reproducible_under_a_fixed_seed() {
    let assembler = PuzzleAssembler::default();
    let list = words(&["RIVER", "MOUNTAIN", "ISLAND", "DESERT", "CANYON"]);

    assert_eq!(assembler.crossword(&list, 7), assembler.crossword(&list, 7));
}

#[test]
fn crossword_pair_shares_exactly_one_cell() {
    let list = WordList::from_pairs([("CAT", Some("feline")), ("TAG", Some("label"))])
        .unwrap_or_else(|_| unreachable!("valid input"));
    let puzzle = PuzzleAssembler::default().crossword(&list, 1);

    assert_eq!(puzzle.kind, PuzzleKind::Crossword);
    assert_eq!(puzzle.placements.len(), 2);
    assert!(puzzle.skipped.is_empty());
    assert_placements_read_correctly(&puzzle);

    let shared = puzzle
        .placements
        .first()
        .zip(puzzle.placements.get(1))
        .map_or_else(Vec::new, |(a, b)| shared_cells(a, b));
    assert_eq!(shared.len(), 1, "one crossing cell");

    // Both entry starts carry a number after the numbering pass
    for placement in &puzzle.placements {
        assert!(
            puzzle
                .grid
                .get(placement.row, placement.col)
                .and_then(|cell| cell.number)
                .is_some(),
            "start of {} is unnumbered",
            placement.entry.word()
        );
    }

    // The clue index carries one entry per direction
    assert_eq!(puzzle.clues.across.len(), 1);
    assert_eq!(puzzle.clues.down.len(), 1);
}

#[test]
fn crossword_placements_stay_connected() {
    let theme = themes::find(CROSSWORD_THEMES, "geography")
        .unwrap_or_else(|_| unreachable!("built-in theme"));
    let list = theme
        .word_list()
        .unwrap_or_else(|_| unreachable!("built-in data"));
    let puzzle = PuzzleAssembler::default().crossword(&list, 42);

    assert!(
        puzzle.placements.len() >= 2,
        "expected a multi-word crossword"
    );
    assert_placements_read_correctly(&puzzle);

    // Every placement after the first crosses something placed before it
    for (index, placement) in puzzle.placements.iter().enumerate().skip(1) {
        let connected = puzzle
            .placements
            .iter()
            .take(index)
            .any(|earlier| !shared_cells(placement, earlier).is_empty());
        assert!(
            connected,
            "{} placed disconnected",
            placement.entry.word()
        );
    }

    // Word list accounting: nothing vanishes
    assert_eq!(
        puzzle.placements.len() + puzzle.skipped.len(),
        list.len(),
        "every word is either placed or skipped"
    );
}

#[test]
fn crossword_clue_numbers_are_ordered_and_unique() {
    let theme = themes::find(CROSSWORD_THEMES, "science")
        .unwrap_or_else(|_| unreachable!("built-in theme"));
    let list = theme
        .word_list()
        .unwrap_or_else(|_| unreachable!("built-in data"));
    let puzzle = PuzzleAssembler::default().crossword(&list, 3);

    for clues in [&puzzle.clues.across, &puzzle.clues.down] {
        let numbers: Vec<u32> = clues.iter().map(|clue| clue.number).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(numbers, sorted, "clue numbers sorted without duplicates");
    }
}

#[test]
fn crossword_blocked_cells_are_distinct_from_letters() {
    let list = words(&["CAT", "TAG"]);
    let puzzle = PuzzleAssembler::default().crossword(&list, 1);

    let mut letters = 0;
    let mut blocked = 0;
    for row in 0..puzzle.grid.rows() {
        for col in 0..puzzle.grid.cols() {
            match puzzle.grid.get(row, col).map(|cell| cell.content) {
                Some(CellContent::Letter(_)) => letters += 1,
                Some(CellContent::Blocked) => blocked += 1,
                other => panic!("unexpected cell state {other:?}"),
            }
        }
    }

    // Two three-letter words crossing once cover five cells
    assert_eq!(letters, 5);
    assert_eq!(
        blocked,
        puzzle.grid.rows() * puzzle.grid.cols() - 5,
        "unused crossword cells are blocked, not filled"
    );
}
