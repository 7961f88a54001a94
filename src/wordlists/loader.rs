//! Word collection loading utilities
//!
//! Constructors for collections from the builtin list, files or slices.

use super::WordCollection;
use super::embedded::WORDS;
use std::io;
use std::path::Path;

/// Build a collection from the embedded builtin word list
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::builtin_collection;
///
/// let words = builtin_collection();
/// assert!(!words.is_empty());
/// ```
#[must_use]
pub fn builtin_collection() -> WordCollection {
    collection_from_slice(WORDS)
}

/// Build a collection from a newline-delimited word file
///
/// Invalid lines are skipped; validation happens inside the collection.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::collection_from_file;
///
/// let words = collection_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn collection_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordCollection> {
    let mut collection = WordCollection::new();
    collection.add_file(path)?;
    Ok(collection)
}

/// Build a collection from a string slice, skipping invalid entries
#[must_use]
pub fn collection_from_slice(slice: &[&str]) -> WordCollection {
    let mut collection = WordCollection::new();
    for raw in slice {
        // Invalid entries are skipped, mirroring file loading
        let _ = collection.add(raw);
    }
    collection
}
