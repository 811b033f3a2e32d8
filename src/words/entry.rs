//! Validated puzzle entries
//!
//! A `WordEntry` is immutable once constructed: the answer word is trimmed
//! and uppercased during normalization, then validated against the alphabet
//! the placement engines assume. Rejection here is the fatal `InvalidInput`
//! path; nothing downstream re-checks letters.

use crate::io::error::{Result, invalid_word};

/// One puzzle entry: an answer word and its optional clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    clue: Option<String>,
}

impl WordEntry {
    /// Normalize and validate a word with an optional clue
    ///
    /// The word is trimmed and uppercased; it must then be at least two
    /// ASCII letters with no other characters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord` when the normalized word is too short or
    /// contains anything outside `A..=Z`.
    pub fn new(word: &str, clue: Option<&str>) -> Result<Self> {
        let normalized = word.trim().to_ascii_uppercase();

        if normalized.chars().count() < 2 {
            return Err(invalid_word(
                word.to_string(),
                "must be at least two letters long",
            ));
        }

        if !normalized.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(invalid_word(
                word.to_string(),
                "must contain only ASCII letters",
            ));
        }

        Ok(Self {
            word: normalized,
            clue: clue.map(str::to_owned),
        })
    }

    /// The normalized answer word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The clue text, when one was supplied
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Number of letters in the answer word
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::WordEntry;
    use crate::io::error::PuzzleError;

    #[test]
    fn test_normalization_trims_and_uppercases() {
        let entry = WordEntry::new("  river ", Some("A flowing body of water"))
            .ok()
            .filter(|e| e.word() == "RIVER");
        assert!(entry.is_some());
    }

    #[test]
    fn test_single_letter_word_rejected() {
        let result = WordEntry::new("A", None);
        assert!(matches!(result, Err(PuzzleError::InvalidWord { .. })));
    }

    #[test]
    fn test_non_alphabetic_word_rejected() {
        let result = WordEntry::new("R2D2", None);
        assert!(matches!(result, Err(PuzzleError::InvalidWord { .. })));
    }
}
