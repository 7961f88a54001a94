//! Round state machine
//!
//! Tracks one in-progress round: the target word, per-position reveal
//! buffer, the set of distinct wrong letters, and the difficulty snapshot.
//! Win and loss are reported through the value returned by [`Round::guess`];
//! the owner decides when to stop or reset the round afterwards.

use super::alphabet;
use super::difficulty::Difficulty;
use super::word::Word;

/// One position of the reveal buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The letter at this position has not been guessed yet
    Hidden,
    /// The letter at this position has been revealed
    Revealed(char),
}

impl Slot {
    /// Check whether the slot has been revealed
    #[inline]
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

/// Result of evaluating a single letter guess
///
/// `CorrectAndWon` and `WrongAndLost` are the one-shot win/loss
/// notifications: they are returned exactly by the triggering guess, and
/// the caller is expected to stop or reset the round once it sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The input was not an alphabet letter, or no round is active;
    /// nothing changed
    Rejected,
    /// The letter occurs in the target word
    Correct,
    /// The letter occurs in the target word and completed it
    CorrectAndWon,
    /// The letter does not occur in the target word
    Wrong,
    /// The letter does not occur in the target word and exhausted the
    /// wrong-guess budget
    WrongAndLost,
}

/// State of one guessing round
#[derive(Debug, Clone, Default)]
pub struct Round {
    target: String,
    slots: Vec<Slot>,
    wrong_letters: Vec<char>,
    difficulty: Difficulty,
    active: bool,
}

impl Round {
    /// Create an idle round with no active word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round with the given word and difficulty
    ///
    /// Allocates one hidden slot per letter position and clears the
    /// wrong-letter set from any previous round.
    pub fn start(&mut self, word: &Word, difficulty: Difficulty) {
        self.target = word.text().to_string();
        self.slots = vec![Slot::Hidden; word.len()];
        self.wrong_letters.clear();
        self.difficulty = difficulty;
        self.active = true;
    }

    /// Evaluate a single letter guess
    ///
    /// The letter is case-folded first. Out-of-alphabet input and guesses
    /// while no round is active return [`GuessOutcome::Rejected`] without
    /// any state change. Revealing is idempotent: repeating an already
    /// revealed letter is still `Correct`. A wrong letter is recorded only
    /// once; the round is lost when the count of distinct wrong letters
    /// strictly exceeds the difficulty's budget.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if !self.active {
            return GuessOutcome::Rejected;
        }

        let Some(letter) = alphabet::fold(letter) else {
            return GuessOutcome::Rejected;
        };

        if self.target.chars().any(|c| c == letter) {
            for (slot, c) in self.slots.iter_mut().zip(self.target.chars()) {
                if c == letter {
                    *slot = Slot::Revealed(letter);
                }
            }

            if self.slots.iter().all(|slot| slot.is_revealed()) {
                GuessOutcome::CorrectAndWon
            } else {
                GuessOutcome::Correct
            }
        } else {
            if !self.wrong_letters.contains(&letter) {
                self.wrong_letters.push(letter);
            }

            if self.wrong_letters.len() > self.difficulty.max_wrong_guesses() {
                GuessOutcome::WrongAndLost
            } else {
                GuessOutcome::Wrong
            }
        }
    }

    /// Reset the round back to the idle state
    ///
    /// Clears the target, the reveal buffer and the wrong letters, and
    /// restores the lowest difficulty.
    pub fn reset(&mut self) {
        self.target.clear();
        self.slots.clear();
        self.wrong_letters.clear();
        self.difficulty = Difficulty::L1;
        self.active = false;
    }

    /// Whether a round is currently active
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The reveal buffer, one slot per letter position
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Distinct wrong letters in guess order
    #[inline]
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    /// Difficulty snapshot taken at round start
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The target word in canonical form (empty while idle)
    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Wrong guesses remaining before the round is lost
    #[must_use]
    pub fn wrong_guesses_left(&self) -> usize {
        (self.difficulty.max_wrong_guesses() + 1).saturating_sub(self.wrong_letters.len())
    }

    /// Check whether a canonical letter has been revealed somewhere
    #[must_use]
    pub fn is_letter_revealed(&self, letter: char) -> bool {
        self.slots.iter().any(|slot| *slot == Slot::Revealed(letter))
    }

    /// Check whether a canonical letter was guessed wrong
    #[must_use]
    pub fn is_letter_wrong(&self, letter: char) -> bool {
        self.wrong_letters.contains(&letter)
    }
}
