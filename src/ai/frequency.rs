//! Frequency-based computer player
//!
//! Counts how often each alphabet letter occurs across the word collection
//! and guesses unused letters greedily by descending frequency.

use crate::core::alphabet;
use crate::wordlists::WordCollection;

/// Sentinel counter value for letters that have already been picked
const USED: i64 = -1;

/// A computer player that guesses letters by corpus frequency
///
/// [`FrequencyAi::prepare`] must be called once per round; each
/// [`FrequencyAi::pick_letter`] then returns the most frequent letter not
/// yet suggested in this round.
#[derive(Debug, Clone)]
pub struct FrequencyAi {
    counts: [i64; alphabet::LEN],
}

impl Default for FrequencyAi {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyAi {
    /// Create an unprepared player (all counters zero)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; alphabet::LEN],
        }
    }

    /// Recompute the letter frequencies over the given collection
    ///
    /// Resets every counter first; this is a full recomputation, not an
    /// incremental update. Words are already canonical, so each letter maps
    /// directly onto the counter array.
    pub fn prepare(&mut self, words: &WordCollection) {
        self.counts = [0; alphabet::LEN];

        for word in words.iter() {
            for letter in word.letters() {
                if let Some(index) = alphabet::index_of(letter) {
                    self.counts[index] += 1;
                }
            }
        }
    }

    /// Pick the next letter to guess
    ///
    /// Returns the letter with the strictly greatest counter, scanning the
    /// alphabet in its fixed order so ties resolve to the earliest letter.
    /// The picked letter is marked used and never suggested again until the
    /// next [`FrequencyAi::prepare`]. Returns `None` once every letter has
    /// been picked; callers bound their calls to at most the alphabet size.
    pub fn pick_letter(&mut self) -> Option<char> {
        let mut best = 0;
        for index in 1..alphabet::LEN {
            if self.counts[index] > self.counts[best] {
                best = index;
            }
        }

        // Only possible when every counter carries the used sentinel
        if self.counts[best] == USED {
            return None;
        }

        self.counts[best] = USED;
        Some(alphabet::LETTERS[best])
    }
}
