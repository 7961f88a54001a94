//! Word collection
//!
//! Holds the set of playable words. Entries are validated and case-folded
//! on the way in; insertion order is preserved for display and counting.

use crate::core::{Word, WordError};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// An insertion-ordered collection of unique playable words
///
/// Uniqueness is case-insensitive (words are canonical after validation).
/// [`WordCollection::merge`] is the one deliberate exception: it appends
/// the other collection's entries as-is, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct WordCollection {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordCollection {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, normalize and add a single word
    ///
    /// Adding an already present word (case-insensitive) is a no-op.
    /// Returns whether the word was actually inserted.
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty or contains characters
    /// outside the alphabet.
    pub fn add(&mut self, raw: &str) -> Result<bool, WordError> {
        let word = Word::new(raw)?;

        if self.index.contains(word.text()) {
            return Ok(false);
        }

        self.index.insert(word.text().to_string());
        self.words.push(word);
        Ok(true)
    }

    /// Add words from a newline-delimited text file
    ///
    /// Each line is added independently; invalid or duplicate lines are
    /// skipped without aborting the rest of the file. Returns the number
    /// of words actually added.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<usize> {
        let content = fs::read_to_string(path)?;

        let added = content
            .lines()
            .filter(|line| matches!(self.add(line), Ok(true)))
            .count();

        Ok(added)
    }

    /// Append all of another collection's words
    ///
    /// This is a plain concatenation: entries already present are appended
    /// again rather than deduplicated. The uniqueness index is still
    /// updated so that later [`WordCollection::add`] calls stay idempotent.
    pub fn merge(&mut self, other: &Self) {
        for word in &other.words {
            self.index.insert(word.text().to_string());
            self.words.push(word.clone());
        }
    }

    /// Check whether a word is present (case-insensitive)
    ///
    /// Invalid input is simply not contained.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        Word::new(raw).is_ok_and(|word| self.index.contains(word.text()))
    }

    /// Pick a uniformly random word
    ///
    /// Returns `None` if the collection is empty; callers start a round
    /// only after checking for a non-empty collection.
    pub fn pick_random<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Number of stored entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the collection holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// All words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn add_stores_canonical_words() {
        let mut collection = WordCollection::new();
        assert!(collection.add("Katze").unwrap());

        assert_eq!(collection.len(), 1);
        assert!(collection.contains("KATZE"));
        assert!(collection.contains("katze"));
    }

    #[test]
    fn add_is_idempotent_across_cases() {
        let mut collection = WordCollection::new();
        assert!(collection.add("Katze").unwrap());
        assert!(!collection.add("KATZE").unwrap());
        assert!(!collection.add("katze").unwrap());

        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_words() {
        let mut collection = WordCollection::new();
        assert!(collection.add("").is_err());
        assert!(collection.add("zwei Worte").is_err());
        assert!(collection.add("Kat2e").is_err());
        assert!(collection.is_empty());
    }

    #[test]
    fn add_file_skips_invalid_lines() {
        let path = std::env::temp_dir().join("hangman_collection_test_words.txt");
        fs::write(&path, "Katze\nnicht gültig\nHund\n\nKATZE\n123\nMaus\n").unwrap();

        let mut collection = WordCollection::new();
        let added = collection.add_file(&path).unwrap();
        fs::remove_file(&path).ok();

        // Katze, Hund, Maus; the blank line, the duplicate and the two
        // invalid lines are skipped
        assert_eq!(added, 3);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn add_file_missing_path_is_an_error() {
        let mut collection = WordCollection::new();
        let result = collection.add_file("does/not/exist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn merge_concatenates_without_deduplication() {
        let mut a = WordCollection::new();
        a.add("Katze").unwrap();
        a.add("Hund").unwrap();

        let mut b = WordCollection::new();
        b.add("Hund").unwrap();
        b.add("Maus").unwrap();

        a.merge(&b);

        // HUND is now stored twice
        assert_eq!(a.len(), 4);
        assert!(a.contains("Maus"));

        // But add stays idempotent afterwards
        assert!(!a.add("Maus").unwrap());
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn pick_random_on_empty_collection_is_none() {
        let collection = WordCollection::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(collection.pick_random(&mut rng).is_none());
    }

    #[test]
    fn pick_random_is_reproducible_with_a_seed() {
        let mut collection = WordCollection::new();
        for word in ["Katze", "Hund", "Maus", "Igel"] {
            collection.add(word).unwrap();
        }

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let first = collection.pick_random(&mut rng1).unwrap();
        let second = collection.pick_random(&mut rng2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut collection = WordCollection::new();
        collection.add("Zebra").unwrap();
        collection.add("Apfel").unwrap();

        let texts: Vec<&str> = collection.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["ZEBRA", "APFEL"]);
    }
}
