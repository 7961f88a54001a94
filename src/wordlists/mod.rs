//! Word lists for hangman
//!
//! Provides the word collection plus an embedded builtin list compiled
//! into the binary.

mod collection;
mod embedded;
pub mod loader;

pub use collection::WordCollection;
pub use embedded::{WORDS, WORDS_COUNT};
