//! Validated, ordered word lists

use crate::io::error::{PuzzleError, Result};
use crate::words::entry::WordEntry;

/// The ordered input to puzzle assembly
///
/// Construction is the validation boundary: an empty list is rejected here,
/// before any grid is allocated, and every entry has already passed word
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Wrap validated entries into a word list
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` when no entries are supplied.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        Ok(Self { entries })
    }

    /// Build a word list from raw (word, clue) string pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord` for any word failing validation and
    /// `EmptyWordList` when the input is empty.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(word, clue)| WordEntry::new(word, clue))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Entries in their original input order
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries; always false for constructed lists
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::WordList;
    use crate::io::error::PuzzleError;

    #[test]
    fn test_empty_input_rejected() {
        let result = WordList::from_pairs(std::iter::empty());
        assert!(matches!(result, Err(PuzzleError::EmptyWordList)));
    }

    #[test]
    fn test_input_order_preserved() {
        let words = WordList::from_pairs([("cat", None), ("dog", Some("barks"))])
            .unwrap_or_else(|_| unreachable!("valid input"));

        assert_eq!(words.len(), 2);
        assert_eq!(
            words.entries().first().map(super::WordEntry::word),
            Some("CAT")
        );
        assert_eq!(
            words.entries().get(1).and_then(super::WordEntry::clue),
            Some("barks")
        );
    }
}
