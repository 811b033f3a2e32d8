//! Word-list file parsing for the command-line shell
//!
//! One entry per line: either `WORD` or `WORD,clue text`. Blank lines and
//! lines starting with `#` are ignored. Word validation is shared with the
//! library boundary, so a malformed file fails the same way malformed
//! caller input does.

use std::path::Path;

use crate::io::error::{PuzzleError, Result};
use crate::words::entry::WordEntry;
use crate::words::list::WordList;

/// Load and parse a word-list file
///
/// # Errors
///
/// Returns `FileSystem` when the file cannot be read, plus any parse or
/// validation failure from [`parse_word_list`].
pub fn load_word_list(path: &Path) -> Result<WordList> {
    let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read word list",
        source,
    })?;
    parse_word_list(&text)
}

/// Parse word-list text into a validated list
///
/// # Errors
///
/// Returns `InvalidWord` for any malformed word and `EmptyWordList` when no
/// entries remain after comments and blanks are stripped.
pub fn parse_word_list(text: &str) -> Result<WordList> {
    let mut entries = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (word, clue) = match line.split_once(',') {
            Some((word, clue)) => (word, Some(clue.trim()).filter(|text| !text.is_empty())),
            None => (line, None),
        };

        entries.push(WordEntry::new(word, clue)?);
    }

    WordList::new(entries)
}
