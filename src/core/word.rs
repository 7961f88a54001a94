//! Playable word representation
//!
//! A Word is an immutable sequence of alphabet letters, case-folded to the
//! canonical uppercase form at construction time.

use super::alphabet;
use std::fmt;

/// A validated, canonically cased playable word
///
/// Every character is a letter of the guessing alphabet; equality and
/// hashing are case-insensitive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The trimmed input was empty
    Empty,
    /// The input contains a character outside the alphabet
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains a character outside the alphabet: {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw input
    ///
    /// The input is trimmed, validated against the alphabet and case-folded.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - the trimmed input is empty
    /// - any character is not a letter of the alphabet
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Straße").unwrap();
    /// assert_eq!(word.text(), "STRAßE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("Rust 2024").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let text = trimmed
            .chars()
            .map(|c| alphabet::fold(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<String, _>>()?;

        Ok(Self { text })
    }

    /// Get the word in its canonical form
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// A word is never empty; provided for completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters in position order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Check whether the word contains a letter (given in canonical form)
    #[inline]
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        self.text.chars().any(|c| c == letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("Katze").unwrap();
        assert_eq!(word.text(), "KATZE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_case_folded() {
        let word = Word::new("katze").unwrap();
        let word2 = Word::new("KaTzE").unwrap();
        assert_eq!(word.text(), "KATZE");
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  Hund\n").unwrap();
        assert_eq!(word.text(), "HUND");
    }

    #[test]
    fn word_creation_extended_letters() {
        let word = Word::new("Straße").unwrap();
        assert_eq!(word.text(), "STRAßE");
        assert_eq!(word.len(), 6);

        let word = Word::new("übung").unwrap();
        assert_eq!(word.text(), "ÜBUNG");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("Kat2e"), Err(WordError::InvalidCharacter('2')));
        assert_eq!(
            Word::new("zwei Worte"),
            Err(WordError::InvalidCharacter(' '))
        );
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacter('é')));
    }

    #[test]
    fn word_contains_letter() {
        let word = Word::new("Möwe").unwrap();
        assert!(word.contains_letter('M'));
        assert!(word.contains_letter('Ö'));
        assert!(!word.contains_letter('X'));
        // Lookup expects canonical form
        assert!(!word.contains_letter('m'));
    }

    #[test]
    fn word_letters_in_order() {
        let word = Word::new("Bär").unwrap();
        let letters: Vec<char> = word.letters().collect();
        assert_eq!(letters, vec!['B', 'Ä', 'R']);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Igel").unwrap();
        assert_eq!(format!("{word}"), "IGEL");
    }
}
